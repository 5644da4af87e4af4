// crates/arbor-store/tests/json_store.rs
//
// JsonFileStore round trips against a real filesystem.

use arbor_core::{Address, StateStore};
use arbor_store::JsonFileStore;
use arbor_token::{TokenParams, TransferEntry, TreeToken};
use uuid::Uuid;

/// Create a temporary file path using UUID to avoid conflicts.
fn temp_state_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("arbor_test_{}_{}", label, Uuid::now_v7()))
        .join("state.json")
}

fn populated_token() -> TreeToken {
    let admin = Address::from_label("admin");
    let alice = Address::from_label("alice");
    let bob = Address::from_label("bob");

    let params = TokenParams {
        max_supply: 1_000_000,
        minting_decay_rate: 10_000,
        minting_period: 10,
    };
    let mut token = TreeToken::deploy(admin, params);
    token.set_minter(&admin, bob, true).unwrap();
    token.set_governance(&admin, bob).unwrap();
    token.mint(&bob, alice, 10_000, 25).unwrap();
    token
        .batch_transfer(&alice, &[TransferEntry::new(bob, 1_000)])
        .unwrap();
    token.approve(&alice, bob, 500).unwrap();
    token.stake(&alice, 2_000).unwrap();
    token
}

#[tokio::test]
async fn missing_file_loads_none() {
    let store = JsonFileStore::new(temp_state_path("missing"));
    let loaded: Option<TreeToken> = store.load().await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn snapshot_round_trip_preserves_every_field() {
    let path = temp_state_path("round_trip");
    let store = JsonFileStore::new(&path);
    let token = populated_token();

    store.save(&token).await.unwrap();
    assert!(path.exists());

    let loaded: TreeToken = store.load().await.unwrap().unwrap();
    assert_eq!(loaded, token);
    assert_eq!(loaded.last_mint_block(), 25);
    assert_eq!(loaded.current_mint_cap(), token.current_mint_cap());
    assert!(loaded.supply_is_conserved());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn save_overwrites_and_leaves_no_tmp_file() {
    let path = temp_state_path("overwrite");
    let store = JsonFileStore::new(&path);
    let admin = Address::from_label("admin");

    let mut token = TreeToken::deploy(admin, TokenParams::default());
    store.save(&token).await.unwrap();
    token.set_paused(&admin, true).unwrap();
    store.save(&token).await.unwrap();

    let loaded: TreeToken = store.load().await.unwrap().unwrap();
    assert!(loaded.is_paused());
    assert!(!path.with_file_name("state.json.tmp").exists());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn corrupt_snapshot_is_a_serialization_error() {
    let path = temp_state_path("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"{ not json").unwrap();

    let store = JsonFileStore::new(&path);
    let result: Result<Option<TreeToken>, _> = store.load().await;
    assert!(matches!(
        result,
        Err(arbor_core::ArborError::Serialization(_))
    ));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
