// crates/arbor-store/src/memory.rs
//
// In-memory snapshot store implementing the `StateStore` trait.
//
// Snapshots are held as serialized JSON rather than live values, so a load
// always hands back an independent copy and exercises the same serde path
// as the file store. Suitable for tests and embedded hosts.

use std::sync::RwLock;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use arbor_core::error::ArborError;
use arbor_core::traits::StateStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RwLock<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a snapshot has been saved.
    pub fn is_empty(&self) -> bool {
        self.snapshot
            .read()
            .map(|guard| guard.is_none())
            .unwrap_or(true)
    }
}

#[async_trait]
impl<S> StateStore<S> for MemoryStore
where
    S: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Option<S>, ArborError> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| ArborError::Storage("MemoryStore lock poisoned".to_string()))?;
        match guard.as_deref() {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, state: &S) -> Result<(), ArborError> {
        let bytes = serde_json::to_vec(state)?;
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| ArborError::Storage("MemoryStore lock poisoned".to_string()))?;
        *guard = Some(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::Address;
    use arbor_token::{TokenParams, TreeToken};

    #[tokio::test]
    async fn test_empty_store_loads_none() {
        let store = MemoryStore::new();
        let loaded: Option<TreeToken> = store.load().await.unwrap();
        assert!(loaded.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryStore::new();
        let admin = Address::from_label("admin");
        let mut token = TreeToken::deploy(admin, TokenParams::default());
        token.mint(&admin, Address::from_label("alice"), 42, 0).unwrap();

        store.save(&token).await.unwrap();
        assert!(!store.is_empty());

        let loaded: TreeToken = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, token);
    }

    #[tokio::test]
    async fn test_save_replaces_previous() {
        let store = MemoryStore::new();
        let admin = Address::from_label("admin");
        let mut token = TreeToken::deploy(admin, TokenParams::default());
        store.save(&token).await.unwrap();

        token.set_paused(&admin, true).unwrap();
        store.save(&token).await.unwrap();

        let loaded: TreeToken = store.load().await.unwrap().unwrap();
        assert!(loaded.is_paused());
    }
}
