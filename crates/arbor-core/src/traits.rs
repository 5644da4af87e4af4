// crates/arbor-core/src/traits.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ArborError;

/// Trait for durable snapshot storage of contract state.
///
/// The state machine itself never touches storage; hosts load a snapshot,
/// run operations against it, and save it back. Implemented by arbor-store.
#[async_trait]
pub trait StateStore<S>: Send + Sync
where
    S: Serialize + DeserializeOwned + Send + Sync,
{
    /// Load the stored snapshot. Returns `None` if nothing has been saved yet.
    async fn load(&self) -> Result<Option<S>, ArborError>;

    /// Persist a snapshot, replacing any previous one.
    async fn save(&self, state: &S) -> Result<(), ArborError>;
}
