// crates/arbor-core/src/lib.rs
//
// arbor-core: Core types, error codes, and storage traits for the Arbor
// TREE token.
//
// This is the leaf crate that the rest of the workspace depends on. It
// defines addresses, amounts, the token error taxonomy with its numeric
// wire codes, and the snapshot persistence trait.

pub mod address;
pub mod error;
pub mod traits;

/// Token amounts in base units. Arithmetic on amounts is always checked.
pub type Amount = u128;

pub use address::Address;
pub use error::{ArborError, TokenError};
pub use traits::StateStore;
