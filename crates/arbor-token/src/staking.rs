// crates/arbor-token/src/staking.rs
//
// Stake management: moves value between an account's spendable balance and
// its staked bucket. Total supply is unaffected; there are no minimums,
// cooldowns, or rewards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use arbor_core::{Address, Amount, TokenError};

use crate::ledger::Ledger;

/// Staked balances per account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingModule {
    #[serde(default)]
    staked: BTreeMap<Address, Amount>,
}

impl StakingModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Staked balance of `who` (zero if never staked).
    pub fn staked_of(&self, who: &Address) -> Amount {
        self.staked.get(who).copied().unwrap_or(0)
    }

    /// Sum of all staked balances.
    pub fn total_staked(&self) -> Amount {
        self.staked.values().fold(0, |acc, v| acc.saturating_add(*v))
    }

    /// Non-zero staked balances, ordered by address.
    pub fn stakes(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.staked.iter()
    }

    /// Move `amount` from `who`'s balance into stake.
    ///
    /// # Errors
    /// `InvalidAmount` on zero, `InsufficientBalance` if the spendable balance
    /// is below `amount`.
    pub fn stake(&mut self, ledger: &mut Ledger, who: &Address, amount: Amount) -> Result<(), TokenError> {
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        ledger.debit(who, amount)?;
        let entry = self.staked.entry(*who).or_insert(0);
        *entry = entry.saturating_add(amount);
        Ok(())
    }

    /// Move `amount` from `who`'s stake back into the spendable balance.
    ///
    /// # Errors
    /// `InvalidAmount` on zero, `InsufficientStake` if the staked balance is
    /// below `amount`.
    pub fn unstake(&mut self, ledger: &mut Ledger, who: &Address, amount: Amount) -> Result<(), TokenError> {
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        let remaining = self
            .staked_of(who)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientStake)?;
        if remaining == 0 {
            self.staked.remove(who);
        } else {
            self.staked.insert(*who, remaining);
        }
        ledger.credit(*who, amount);
        Ok(())
    }
}
