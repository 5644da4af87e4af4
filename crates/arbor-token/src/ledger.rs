// crates/arbor-token/src/ledger.rs
//
// Spendable balances and the allowance relation.
//
// Absent entries read as zero, and entries that drop to zero are removed so
// two ledgers with the same balances always serialize identically.
//
// Pause checks live in `TreeToken`; everything here assumes the gate is open.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use arbor_core::{Address, Amount, TokenError};

/// One leg of a batch transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEntry {
    pub to: Address,
    pub amount: Amount,
}

impl TransferEntry {
    pub fn new(to: Address, amount: Amount) -> Self {
        Self { to, amount }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    balances: BTreeMap<Address, Amount>,
    /// owner -> spender -> remaining allowance
    #[serde(default)]
    allowances: BTreeMap<Address, BTreeMap<Address, Amount>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, who: &Address) -> Amount {
        self.balances.get(who).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all spendable balances.
    pub fn total_balances(&self) -> Amount {
        self.balances.values().fold(0, |acc, v| acc.saturating_add(*v))
    }

    /// Non-zero balances, ordered by address.
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    /// Add `amount` to `who`'s balance.
    ///
    /// Every balance is bounded by total supply, which is bounded by
    /// `max_supply`, so this cannot overflow for a consistent state.
    pub(crate) fn credit(&mut self, who: Address, amount: Amount) {
        if amount == 0 {
            return;
        }
        let balance = self.balances.entry(who).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Remove `amount` from `who`'s balance, failing closed.
    pub(crate) fn debit(&mut self, who: &Address, amount: Amount) -> Result<(), TokenError> {
        let balance = self.balance_of(who);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        if remaining == 0 {
            self.balances.remove(who);
        } else {
            self.balances.insert(*who, remaining);
        }
        Ok(())
    }

    /// Destroy `amount` of `who`'s balance. The caller adjusts total supply.
    ///
    /// # Errors
    /// `InvalidAmount` on zero, `InsufficientBalance` if `who` holds less.
    pub fn burn(&mut self, who: &Address, amount: Amount) -> Result<(), TokenError> {
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        self.debit(who, amount)
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// # Errors
    /// - `InvalidAddress` if `to` is the null address.
    /// - `InvalidAmount` if `amount` is zero.
    /// - `InsufficientBalance` if `from` holds less than `amount`.
    pub fn transfer(&mut self, from: &Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        if to.is_null() {
            return Err(TokenError::InvalidAddress);
        }
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        self.debit(from, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    /// Apply `entries` in order as independent transfers from `from`.
    ///
    /// Each entry sees the balance left by the entries before it. The first
    /// failing entry returns its error and entries already applied stay
    /// applied: this is NOT atomic. An empty batch succeeds.
    pub fn batch_transfer(&mut self, from: &Address, entries: &[TransferEntry]) -> Result<(), TokenError> {
        for (index, entry) in entries.iter().enumerate() {
            if let Err(e) = self.transfer(from, entry.to, entry.amount) {
                tracing::debug!(
                    from = %from.short(),
                    failed_entry = index,
                    code = e.code(),
                    "Batch transfer stopped; earlier entries remain applied"
                );
                return Err(e);
            }
        }
        Ok(())
    }

    /// Set the allowance of `spender` over `owner`'s balance to exactly `amount`.
    ///
    /// # Errors
    /// `InvalidAddress` on a null spender, `InvalidAmount` on zero.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) -> Result<(), TokenError> {
        if spender.is_null() {
            return Err(TokenError::InvalidAddress);
        }
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        self.allowances.entry(owner).or_default().insert(spender, amount);
        Ok(())
    }

    /// Move `amount` from `owner` to `recipient` on behalf of `spender`.
    ///
    /// # Errors
    /// - `InvalidAddress` if `recipient` is the null address.
    /// - `InvalidAmount` if `amount` is zero.
    /// - `InsufficientAllowance` (wire code 100) if the allowance is too low.
    /// - `InsufficientBalance` if `owner` holds less than `amount`.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        if recipient.is_null() {
            return Err(TokenError::InvalidAddress);
        }
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        let allowance = self.allowance(owner, spender);
        if allowance < amount {
            return Err(TokenError::InsufficientAllowance);
        }
        if self.balance_of(owner) < amount {
            return Err(TokenError::InsufficientBalance);
        }

        self.set_allowance(owner, spender, allowance - amount);
        self.debit(owner, amount)?;
        self.credit(recipient, amount);
        Ok(())
    }

    fn set_allowance(&mut self, owner: &Address, spender: &Address, amount: Amount) {
        if amount > 0 {
            self.allowances.entry(*owner).or_default().insert(*spender, amount);
            return;
        }
        if let Some(spenders) = self.allowances.get_mut(owner) {
            spenders.remove(spender);
            if spenders.is_empty() {
                self.allowances.remove(owner);
            }
        }
    }
}
