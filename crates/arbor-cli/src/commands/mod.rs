// crates/arbor-cli/src/commands/mod.rs
//
// Command module declarations for the arbor CLI, plus the session that
// every command runs against: the snapshot store, the acting caller, and
// the block height supplied on the command line.

pub mod admin;
pub mod init;
pub mod stake;
pub mod status;
pub mod supply;
pub mod transfer;

use arbor_core::{Address, ArborError, StateStore, TokenError};
use arbor_store::JsonFileStore;
use arbor_token::{TokenParams, TreeToken};

use crate::output::OutputFormat;

/// Everything a command needs besides its own arguments.
pub struct Session {
    pub store: JsonFileStore,
    pub caller: Option<String>,
    pub block: u64,
    pub format: OutputFormat,
    pub params: TokenParams,
}

impl Session {
    /// The acting account. Mutating commands require `--caller`.
    pub fn caller(&self) -> Result<Address, ArborError> {
        match &self.caller {
            Some(raw) => Ok(parse_address(raw)),
            None => Err(ArborError::Config(
                "this command needs --caller <address|label>".to_string(),
            )),
        }
    }

    /// Load the deployed token, failing if `arbor init` has not run.
    pub async fn load_token(&self) -> Result<TreeToken, ArborError> {
        let loaded: Option<TreeToken> = self.store.load().await?;
        loaded.ok_or_else(|| {
            ArborError::NotFound(format!(
                "no token state at {} (run `arbor init` first)",
                self.store.path().display()
            ))
        })
    }

    pub async fn save_token(&self, token: &TreeToken) -> Result<(), ArborError> {
        self.store.save(token).await
    }

    /// Run `op` against the stored token and persist whatever it changed.
    ///
    /// The snapshot is written whenever the state moved, even if `op` then
    /// failed: a partially applied batch keeps its completed entries.
    pub async fn execute<T, F>(&self, op: F) -> Result<T, ArborError>
    where
        F: FnOnce(&mut TreeToken) -> Result<T, TokenError>,
    {
        let mut token = self.load_token().await?;
        let before = token.clone();
        let result = op(&mut token);
        if token != before {
            self.save_token(&token).await?;
        }
        result.map_err(ArborError::from)
    }
}

/// Resolve a command-line account reference.
///
/// Accepts a 64-digit hex address (with or without `0x`), the literal
/// `null`, or any other string as a label hashed by `Address::from_label`.
pub fn parse_address(raw: &str) -> Address {
    if let Ok(address) = raw.parse::<Address>() {
        return address;
    }
    if raw.eq_ignore_ascii_case("null") {
        return Address::NULL;
    }
    Address::from_label(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_forms() {
        let alice = Address::from_label("alice");
        assert_eq!(parse_address(&alice.to_string()), alice);
        assert_eq!(parse_address(&alice.to_hex()), alice);
        assert_eq!(parse_address("alice"), alice);
        assert_eq!(parse_address("null"), Address::NULL);
        assert!(parse_address("NULL").is_null());
    }

    fn session(label: &str) -> Session {
        let path = std::env::temp_dir()
            .join(format!("arbor_cli_{}_{}", label, uuid::Uuid::now_v7()))
            .join("state.json");
        Session {
            store: JsonFileStore::new(path),
            caller: Some("admin".to_string()),
            block: 0,
            format: OutputFormat::Json,
            params: TokenParams::default(),
        }
    }

    #[tokio::test]
    async fn test_execute_without_state_is_not_found() {
        let session = session("missing");
        let result = session.execute(|token| Ok(token.total_supply())).await;
        assert!(matches!(result, Err(ArborError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_execute_persists_partial_batch() {
        use arbor_token::TransferEntry;

        let session = session("partial_batch");
        let admin = session.caller().unwrap();
        let bob = Address::from_label("bob");
        let mut token = TreeToken::deploy(admin, session.params);
        token.mint(&admin, admin, 100, 0).unwrap();
        session.save_token(&token).await.unwrap();

        let entries = [TransferEntry::new(bob, 60), TransferEntry::new(bob, 60)];
        let result = session
            .execute(|token| token.batch_transfer(&admin, &entries))
            .await;
        assert!(matches!(
            result,
            Err(ArborError::Token(TokenError::InsufficientBalance))
        ));

        let stored = session.load_token().await.unwrap();
        assert_eq!(stored.balance_of(&bob), 60);
        assert_eq!(stored.balance_of(&admin), 40);

        let _ = std::fs::remove_dir_all(session.store.path().parent().unwrap());
    }

    #[test]
    fn test_caller_required() {
        let mut session = session("no_caller");
        session.caller = None;
        assert!(matches!(session.caller(), Err(ArborError::Config(_))));
    }
}
