// crates/arbor-token/src/params.rs
//
// Deploy-time parameters and supply constants for the TREE token.
//
// All monetary values are in base units (no decimals). The mint cap decays
// in basis points: BASIS_POINTS (10,000) represents 100%.

use serde::{Deserialize, Serialize};

use arbor_core::{Amount, ArborError};

/// Basis-point denominator: 10,000 = 100%.
pub const BASIS_POINTS: u128 = 10_000;

/// Absolute supply ceiling: 10^16 base units.
pub const MAX_SUPPLY: Amount = 10_000_000_000_000_000;

/// Decay rate applied per elapsed block, scaled by `BASIS_POINTS`.
pub const MINTING_DECAY_RATE: u128 = 5_000_000;

/// Minimum number of blocks between mint cap recomputations.
pub const MINTING_PERIOD: u64 = 1_440;

/// Parameters fixed when the token is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenParams {
    /// Absolute ceiling on total supply. Also the initial mint cap.
    pub max_supply: Amount,
    /// Per-block decay rate, in units of 1/`BASIS_POINTS` of a basis point.
    pub minting_decay_rate: u128,
    /// Blocks that must elapse before the mint cap is recomputed.
    pub minting_period: u64,
}

impl Default for TokenParams {
    fn default() -> Self {
        Self {
            max_supply: MAX_SUPPLY,
            minting_decay_rate: MINTING_DECAY_RATE,
            minting_period: MINTING_PERIOD,
        }
    }
}

impl TokenParams {
    /// Reject parameter sets the decay arithmetic cannot handle.
    ///
    /// # Errors
    /// Returns `ArborError::Config` if `max_supply` is zero or so large that
    /// `max_supply * BASIS_POINTS` overflows, or if `minting_period` is zero.
    pub fn validate(&self) -> Result<(), ArborError> {
        if self.max_supply == 0 {
            return Err(ArborError::Config("max_supply must be positive".to_string()));
        }
        if self.max_supply.checked_mul(BASIS_POINTS).is_none() {
            return Err(ArborError::Config(format!(
                "max_supply {} overflows basis-point arithmetic",
                self.max_supply
            )));
        }
        if self.minting_period == 0 {
            return Err(ArborError::Config(
                "minting_period must be at least one block".to_string(),
            ));
        }
        Ok(())
    }
}
