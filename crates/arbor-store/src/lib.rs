// crates/arbor-store/src/lib.rs
//
// arbor-store: Snapshot storage for the Arbor TREE token.
//
// Provides an in-memory store for tests and embedded hosts, and a JSON-file
// store used by the `arbor` CLI. Both implement `arbor_core::StateStore`.

pub mod json;
pub mod memory;

// Re-export key types for ergonomic access from downstream crates.
pub use json::JsonFileStore;
pub use memory::MemoryStore;
