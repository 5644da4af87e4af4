// crates/arbor-cli/src/commands/init.rs
//
// `arbor init`: deploy a fresh TREE token and write its first snapshot.

use arbor_core::{ArborError, StateStore};
use arbor_token::TreeToken;

use super::{parse_address, Session};
use crate::output::{self, FieldRow, OutputFormat};

/// Run the init command.
///
/// `deployer` defaults to `--caller`. An existing snapshot is only replaced
/// when `force` is set.
pub async fn run(session: &Session, deployer: Option<&str>, force: bool) -> Result<(), ArborError> {
    let deployer = match deployer {
        Some(raw) => parse_address(raw),
        None => session.caller()?,
    };
    if deployer.is_null() {
        return Err(ArborError::InvalidAddress("deployer cannot be the null address".into()));
    }

    let existing: Option<TreeToken> = session.store.load().await?;
    if existing.is_some() && !force {
        return Err(ArborError::Config(format!(
            "token state already exists at {} (pass --force to replace it)",
            session.store.path().display()
        )));
    }

    let token = TreeToken::deploy(deployer, session.params);
    session.save_token(&token).await?;
    tracing::info!(
        deployer = %deployer.short(),
        path = %session.store.path().display(),
        "Token deployed"
    );

    let rows = vec![
        FieldRow::new("admin", token.admin()),
        FieldRow::new("governance", token.governance()),
        FieldRow::new("max_supply", token.params().max_supply),
        FieldRow::new("mint_cap", token.current_mint_cap()),
        FieldRow::new("state_path", session.store.path().display()),
    ];
    match session.format {
        OutputFormat::Json => println!("{}", output::format_json(&rows)),
        OutputFormat::Table => {
            println!("Deployed TREE token");
            println!("{}", output::format_table(&rows));
        }
    }
    Ok(())
}
