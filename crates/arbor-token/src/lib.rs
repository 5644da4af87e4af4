// crates/arbor-token/src/lib.rs
//
// arbor-token: the TREE token state machine. Access control, pause gate,
// decaying mint cap, balances and allowances, and staking.
//
// All values are tracked in base units as `Amount` (u128). Operations take
// the caller and block height as explicit arguments; nothing here reads
// ambient state, so independent `TreeToken` instances never interfere.

pub mod access;
pub mod ledger;
pub mod params;
pub mod pause;
pub mod staking;
pub mod state;
pub mod supply;

// Re-export key types for ergonomic access from downstream crates.
pub use access::{AccessControl, Role};
pub use ledger::{Ledger, TransferEntry};
pub use params::{TokenParams, BASIS_POINTS, MAX_SUPPLY, MINTING_DECAY_RATE, MINTING_PERIOD};
pub use pause::PauseGate;
pub use staking::StakingModule;
pub use state::TreeToken;
pub use supply::{decayed_cap, SupplyController};
