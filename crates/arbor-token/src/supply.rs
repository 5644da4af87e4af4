// crates/arbor-token/src/supply.rs
//
// Total supply and the decaying mint cap.
//
// The cap starts at `max_supply` and only ever shrinks. It is recomputed when
// at least `minting_period` blocks have elapsed since the last recomputation:
//
//   decay = min(minting_decay_rate * elapsed / BASIS_POINTS, BASIS_POINTS)
//   cap   = cap * (BASIS_POINTS - decay) / BASIS_POINTS
//
// All divisions truncate. The clamp on `decay` keeps a very long gap between
// recomputations from underflowing the multiplier; the cap bottoms out at 0.

use serde::{Deserialize, Serialize};

use arbor_core::{Amount, TokenError};

use crate::params::{TokenParams, BASIS_POINTS};

/// Apply one decay step to `cap` for `elapsed` blocks.
pub fn decayed_cap(cap: Amount, decay_rate: u128, elapsed: u64) -> Amount {
    let decay = (decay_rate.saturating_mul(elapsed as u128) / BASIS_POINTS).min(BASIS_POINTS);
    // cap <= max_supply, and TokenParams::validate guarantees the product fits.
    cap.saturating_mul(BASIS_POINTS - decay) / BASIS_POINTS
}

/// Supply bookkeeping: total supply, current cap, and when the cap last moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyController {
    total_supply: Amount,
    current_mint_cap: Amount,
    last_mint_block: u64,
}

impl SupplyController {
    /// Fresh controller: zero supply, cap at `max_supply`, last recompute at block 0.
    pub fn new(params: &TokenParams) -> Self {
        Self {
            total_supply: 0,
            current_mint_cap: params.max_supply,
            last_mint_block: 0,
        }
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn current_mint_cap(&self) -> Amount {
        self.current_mint_cap
    }

    pub fn last_mint_block(&self) -> u64 {
        self.last_mint_block
    }

    /// Headroom under both the cap and the absolute ceiling.
    pub fn remaining_mintable(&self, params: &TokenParams) -> Amount {
        self.current_mint_cap
            .min(params.max_supply)
            .saturating_sub(self.total_supply)
    }

    /// Cap and last-recompute block as they would be at `current_block`,
    /// without committing anything.
    fn refreshed(&self, params: &TokenParams, current_block: u64) -> (Amount, u64) {
        // A block height below the last recompute counts as no time elapsed.
        let elapsed = current_block.saturating_sub(self.last_mint_block);
        if elapsed >= params.minting_period {
            (
                decayed_cap(self.current_mint_cap, params.minting_decay_rate, elapsed),
                current_block,
            )
        } else {
            (self.current_mint_cap, self.last_mint_block)
        }
    }

    /// Recompute the cap for `current_block` and return it.
    ///
    /// A no-op unless at least `minting_period` blocks have elapsed since the
    /// last recomputation, so calling it twice at the same height changes
    /// nothing the second time.
    pub fn update_mint_cap(&mut self, params: &TokenParams, current_block: u64) -> Amount {
        let (cap, last) = self.refreshed(params, current_block);
        if last != self.last_mint_block {
            tracing::debug!(
                block = current_block,
                old_cap = %self.current_mint_cap,
                new_cap = %cap,
                "Mint cap decayed"
            );
        }
        self.current_mint_cap = cap;
        self.last_mint_block = last;
        cap
    }

    /// Raise total supply by `amount` at `current_block`.
    ///
    /// The cap is refreshed for `current_block` first. Nothing (including the
    /// cap refresh) is committed unless the mint succeeds.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount` is zero.
    /// - `MintCapExceeded` if the new supply would exceed the refreshed cap.
    /// - `MaxSupplyExceeded` if the new supply would exceed `max_supply`.
    pub fn mint(
        &mut self,
        params: &TokenParams,
        amount: Amount,
        current_block: u64,
    ) -> Result<Amount, TokenError> {
        if amount == 0 {
            return Err(TokenError::InvalidAmount);
        }
        let (cap, last) = self.refreshed(params, current_block);
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::MintCapExceeded)?;
        if new_supply > cap {
            return Err(TokenError::MintCapExceeded);
        }
        if new_supply > params.max_supply {
            return Err(TokenError::MaxSupplyExceeded);
        }

        self.current_mint_cap = cap;
        self.last_mint_block = last;
        self.total_supply = new_supply;
        Ok(new_supply)
    }

    /// Lower total supply by `amount`.
    ///
    /// Callers debit a balance of at least `amount` first, so the supply
    /// (which bounds every balance) cannot go below zero.
    pub fn retire(&mut self, amount: Amount) {
        self.total_supply = self.total_supply.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MAX_SUPPLY;

    fn small_params() -> TokenParams {
        // 1% decay per elapsed block, recomputed every 10 blocks.
        TokenParams {
            max_supply: 1_000_000,
            minting_decay_rate: 100 * BASIS_POINTS,
            minting_period: 10,
        }
    }

    #[test]
    fn test_new_controller() {
        let params = TokenParams::default();
        let supply = SupplyController::new(&params);
        assert_eq!(supply.total_supply(), 0);
        assert_eq!(supply.current_mint_cap(), MAX_SUPPLY);
        assert_eq!(supply.last_mint_block(), 0);
    }

    #[test]
    fn test_update_before_period_is_noop() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        assert_eq!(supply.update_mint_cap(&params, 9), 1_000_000);
        assert_eq!(supply.last_mint_block(), 0);
    }

    #[test]
    fn test_update_after_period_decays() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        // 10 blocks * 1% = 10% decay
        assert_eq!(supply.update_mint_cap(&params, 10), 900_000);
        assert_eq!(supply.last_mint_block(), 10);
    }

    #[test]
    fn test_update_is_idempotent_at_same_height() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        let first = supply.update_mint_cap(&params, 25);
        let snapshot = supply;
        let second = supply.update_mint_cap(&params, 25);
        assert_eq!(first, second);
        assert_eq!(supply, snapshot);
    }

    #[test]
    fn test_decay_truncates() {
        // 999 * (10000 - 1) / 10000 = 998.9001 -> 998
        assert_eq!(decayed_cap(999, BASIS_POINTS, 1), 998);
    }

    #[test]
    fn test_default_params_first_period_clamps_to_zero() {
        // 5_000_000 * 1440 / 10000 = 720_000 basis points, clamped to 10_000.
        let params = TokenParams::default();
        let mut supply = SupplyController::new(&params);
        assert_eq!(supply.update_mint_cap(&params, params.minting_period), 0);
    }

    #[test]
    fn test_huge_elapsed_does_not_underflow() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        assert_eq!(supply.update_mint_cap(&params, u64::MAX), 0);
        assert_eq!(supply.last_mint_block(), u64::MAX);
        assert_eq!(decayed_cap(MAX_SUPPLY, u128::MAX, u64::MAX), 0);
    }

    #[test]
    fn test_block_going_backwards_is_noop() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        supply.update_mint_cap(&params, 100);
        let cap = supply.current_mint_cap();
        assert_eq!(supply.update_mint_cap(&params, 50), cap);
        assert_eq!(supply.last_mint_block(), 100);
    }

    #[test]
    fn test_mint_up_to_cap_boundary() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        assert_eq!(supply.mint(&params, 1_000_000, 0), Ok(1_000_000));
        assert_eq!(supply.mint(&params, 1, 0), Err(TokenError::MintCapExceeded));
        assert_eq!(supply.total_supply(), 1_000_000);
    }

    #[test]
    fn test_mint_zero_rejected() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        assert_eq!(supply.mint(&params, 0, 0), Err(TokenError::InvalidAmount));
    }

    #[test]
    fn test_failed_mint_commits_no_cap_refresh() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        let before = supply;
        // At block 10 the cap decays to 900_000, so 950_000 is rejected.
        assert_eq!(
            supply.mint(&params, 950_000, 10),
            Err(TokenError::MintCapExceeded)
        );
        assert_eq!(supply, before);
    }

    #[test]
    fn test_successful_mint_commits_cap_refresh() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        supply.mint(&params, 100, 10).unwrap();
        assert_eq!(supply.current_mint_cap(), 900_000);
        assert_eq!(supply.last_mint_block(), 10);
    }

    #[test]
    fn test_max_supply_checked_when_cap_is_above_it() {
        let params = small_params();
        let mut supply = SupplyController {
            total_supply: 0,
            current_mint_cap: 2_000_000,
            last_mint_block: 0,
        };
        assert_eq!(
            supply.mint(&params, 1_500_000, 0),
            Err(TokenError::MaxSupplyExceeded)
        );
    }

    #[test]
    fn test_retire_and_remaining() {
        let params = small_params();
        let mut supply = SupplyController::new(&params);
        supply.mint(&params, 400_000, 0).unwrap();
        assert_eq!(supply.remaining_mintable(&params), 600_000);
        supply.retire(100_000);
        assert_eq!(supply.total_supply(), 300_000);
        assert_eq!(supply.remaining_mintable(&params), 700_000);
    }
}
