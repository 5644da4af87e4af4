// crates/arbor-token/src/state.rs
//
// The TREE token state machine.
//
// `TreeToken` is the single owned aggregate for one deployed token. Every
// operation takes the authenticated caller (and, for minting, the current
// block height) as plain arguments, runs its guards (access control, pause
// gate), and then hands the mutation to the owning component.
//
// Single-entry operations are all-or-nothing. `batch_transfer` is the one
// exception: see `Ledger::batch_transfer`.

use serde::{Deserialize, Serialize};

use arbor_core::{Address, Amount, TokenError};

use crate::access::{AccessControl, Role};
use crate::ledger::{Ledger, TransferEntry};
use crate::params::TokenParams;
use crate::pause::PauseGate;
use crate::staking::StakingModule;
use crate::supply::SupplyController;

/// A deployed TREE token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeToken {
    params: TokenParams,
    access: AccessControl,
    pause: PauseGate,
    supply: SupplyController,
    ledger: Ledger,
    staking: StakingModule,
}

impl TreeToken {
    /// Deploy a new token. The deployer becomes admin and governance.
    pub fn deploy(deployer: Address, params: TokenParams) -> Self {
        tracing::info!(
            deployer = %deployer.short(),
            max_supply = %params.max_supply,
            "TREE token deployed"
        );
        Self {
            params,
            access: AccessControl::new(deployer),
            pause: PauseGate::default(),
            supply: SupplyController::new(&params),
            ledger: Ledger::new(),
            staking: StakingModule::new(),
        }
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    pub fn params(&self) -> &TokenParams {
        &self.params
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn staking(&self) -> &StakingModule {
        &self.staking
    }

    pub fn admin(&self) -> Address {
        self.access.admin()
    }

    pub fn governance(&self) -> Address {
        self.access.governance()
    }

    pub fn role_of(&self, who: &Address) -> Role {
        self.access.role_of(who)
    }

    pub fn is_admin(&self, caller: &Address) -> bool {
        self.access.is_admin(caller)
    }

    pub fn is_governance(&self, caller: &Address) -> bool {
        self.access.is_governance(caller)
    }

    pub fn is_minter(&self, caller: &Address) -> bool {
        self.access.is_minter(caller)
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn total_supply(&self) -> Amount {
        self.supply.total_supply()
    }

    pub fn current_mint_cap(&self) -> Amount {
        self.supply.current_mint_cap()
    }

    pub fn last_mint_block(&self) -> u64 {
        self.supply.last_mint_block()
    }

    pub fn remaining_mintable(&self) -> Amount {
        self.supply.remaining_mintable(&self.params)
    }

    pub fn balance_of(&self, who: &Address) -> Amount {
        self.ledger.balance_of(who)
    }

    pub fn staked_of(&self, who: &Address) -> Amount {
        self.staking.staked_of(who)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.ledger.allowance(owner, spender)
    }

    /// True when total supply equals the sum of all balances and stakes.
    pub fn supply_is_conserved(&self) -> bool {
        self.ledger
            .total_balances()
            .checked_add(self.staking.total_staked())
            == Some(self.supply.total_supply())
    }

    // ---------------------------------------------------------------
    // Access control
    // ---------------------------------------------------------------

    /// Flip the pause switch. Returns the new value.
    pub fn set_paused(&mut self, caller: &Address, pause: bool) -> Result<bool, TokenError> {
        self.access.ensure_admin(caller)?;
        tracing::info!(paused = pause, "Pause switch set");
        Ok(self.pause.set(pause))
    }

    pub fn transfer_admin(&mut self, caller: &Address, new_admin: Address) -> Result<(), TokenError> {
        self.access.transfer_admin(caller, new_admin)
    }

    pub fn set_governance(
        &mut self,
        caller: &Address,
        new_governance: Address,
    ) -> Result<(), TokenError> {
        self.access.set_governance(caller, new_governance)
    }

    pub fn set_minter(
        &mut self,
        caller: &Address,
        target: Address,
        can_mint: bool,
    ) -> Result<(), TokenError> {
        self.access.set_minter(caller, target, can_mint)
    }

    // ---------------------------------------------------------------
    // Supply
    // ---------------------------------------------------------------

    /// Recompute the decaying mint cap for `current_block` and return it.
    /// Open to any caller; it only moves the cap as time dictates.
    pub fn update_mint_cap(&mut self, current_block: u64) -> Amount {
        self.supply.update_mint_cap(&self.params, current_block)
    }

    /// Mint `amount` to `recipient` at `current_block`. Not gated by pause.
    ///
    /// # Errors
    /// `Unauthorized`, `InvalidAddress`, `InvalidAmount`, `MintCapExceeded`,
    /// `MaxSupplyExceeded`, checked in that order.
    pub fn mint(
        &mut self,
        caller: &Address,
        recipient: Address,
        amount: Amount,
        current_block: u64,
    ) -> Result<(), TokenError> {
        if !self.access.is_minter(caller) {
            tracing::debug!(caller = %caller.short(), "Rejected mint: caller is not a minter");
            return Err(TokenError::Unauthorized);
        }
        if recipient.is_null() {
            return Err(TokenError::InvalidAddress);
        }
        let new_supply = self.supply.mint(&self.params, amount, current_block)?;
        self.ledger.credit(recipient, amount);
        tracing::info!(
            to = %recipient.short(),
            amount = %amount,
            total_supply = %new_supply,
            block = current_block,
            "Minted"
        );
        Ok(())
    }

    /// Destroy `amount` of the caller's balance, lowering total supply.
    pub fn burn(&mut self, caller: &Address, amount: Amount) -> Result<(), TokenError> {
        self.pause.ensure_unpaused()?;
        self.ledger.burn(caller, amount)?;
        self.supply.retire(amount);
        tracing::info!(
            from = %caller.short(),
            amount = %amount,
            total_supply = %self.supply.total_supply(),
            "Burned"
        );
        Ok(())
    }

    // ---------------------------------------------------------------
    // Ledger
    // ---------------------------------------------------------------

    pub fn transfer(&mut self, caller: &Address, recipient: Address, amount: Amount) -> Result<(), TokenError> {
        self.pause.ensure_unpaused()?;
        self.ledger.transfer(caller, recipient, amount)?;
        tracing::info!(
            from = %caller.short(),
            to = %recipient.short(),
            amount = %amount,
            "Transferred"
        );
        Ok(())
    }

    /// Apply `entries` in order. NOT atomic: on the first failing entry the
    /// error is returned and earlier entries stay applied.
    pub fn batch_transfer(&mut self, caller: &Address, entries: &[TransferEntry]) -> Result<(), TokenError> {
        self.pause.ensure_unpaused()?;
        self.ledger.batch_transfer(caller, entries)?;
        tracing::info!(from = %caller.short(), entries = entries.len(), "Batch transferred");
        Ok(())
    }

    pub fn approve(&mut self, caller: &Address, spender: Address, amount: Amount) -> Result<(), TokenError> {
        self.pause.ensure_unpaused()?;
        self.ledger.approve(*caller, spender, amount)?;
        tracing::info!(
            owner = %caller.short(),
            spender = %spender.short(),
            amount = %amount,
            "Allowance set"
        );
        Ok(())
    }

    /// Spend from `owner`'s balance using the allowance granted to `caller`.
    ///
    /// An allowance that is too low yields `InsufficientAllowance`, which
    /// shares wire code 100 with `Unauthorized`.
    pub fn transfer_from(
        &mut self,
        caller: &Address,
        owner: &Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.pause.ensure_unpaused()?;
        self.ledger.transfer_from(caller, owner, recipient, amount)?;
        tracing::info!(
            spender = %caller.short(),
            owner = %owner.short(),
            to = %recipient.short(),
            amount = %amount,
            "Transferred from allowance"
        );
        Ok(())
    }

    // ---------------------------------------------------------------
    // Staking
    // ---------------------------------------------------------------

    pub fn stake(&mut self, caller: &Address, amount: Amount) -> Result<(), TokenError> {
        self.pause.ensure_unpaused()?;
        self.staking.stake(&mut self.ledger, caller, amount)?;
        tracing::info!(who = %caller.short(), amount = %amount, "Staked");
        Ok(())
    }

    pub fn unstake(&mut self, caller: &Address, amount: Amount) -> Result<(), TokenError> {
        self.pause.ensure_unpaused()?;
        self.staking.unstake(&mut self.ledger, caller, amount)?;
        tracing::info!(who = %caller.short(), amount = %amount, "Unstaked");
        Ok(())
    }
}
