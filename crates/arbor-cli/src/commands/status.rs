// crates/arbor-cli/src/commands/status.rs
//
// `arbor status` and `arbor balance`: read-only views of the token state.

use std::collections::BTreeSet;

use arbor_core::{Address, ArborError};
use serde::Serialize;

use super::{parse_address, Session};
use crate::output::{self, AccountRow, FieldRow, OutputFormat};

#[derive(Debug, Serialize)]
struct StatusReport {
    admin: String,
    governance: String,
    paused: bool,
    total_supply: u128,
    max_supply: u128,
    current_mint_cap: u128,
    remaining_mintable: u128,
    last_mint_block: u64,
    total_staked: u128,
    conserved: bool,
    accounts: Vec<AccountRow>,
}

/// Run the status command.
pub async fn run(session: &Session) -> Result<(), ArborError> {
    let token = session.load_token().await?;

    // Every account that holds a balance, a stake, or a role.
    let mut known: BTreeSet<Address> = BTreeSet::new();
    known.extend(token.ledger().balances().map(|(a, _)| *a));
    known.extend(token.staking().stakes().map(|(a, _)| *a));
    known.extend(token.access().roles().map(|(a, _)| *a));

    let accounts: Vec<AccountRow> = known
        .iter()
        .map(|who| AccountRow {
            address: who.to_string(),
            balance: token.balance_of(who),
            staked: token.staked_of(who),
            minter: token.is_minter(who),
        })
        .collect();

    let report = StatusReport {
        admin: token.admin().to_string(),
        governance: token.governance().to_string(),
        paused: token.is_paused(),
        total_supply: token.total_supply(),
        max_supply: token.params().max_supply,
        current_mint_cap: token.current_mint_cap(),
        remaining_mintable: token.remaining_mintable(),
        last_mint_block: token.last_mint_block(),
        total_staked: token.staking().total_staked(),
        conserved: token.supply_is_conserved(),
        accounts,
    };

    match session.format {
        OutputFormat::Json => println!("{}", output::format_json(&report)),
        OutputFormat::Table => {
            let fields = vec![
                FieldRow::new("admin", &report.admin),
                FieldRow::new("governance", &report.governance),
                FieldRow::new("paused", report.paused),
                FieldRow::new("total_supply", report.total_supply),
                FieldRow::new("max_supply", report.max_supply),
                FieldRow::new("current_mint_cap", report.current_mint_cap),
                FieldRow::new("remaining_mintable", report.remaining_mintable),
                FieldRow::new("last_mint_block", report.last_mint_block),
                FieldRow::new("total_staked", report.total_staked),
            ];
            println!("TREE Token Status");
            println!("{}", output::format_table(&fields));
            if !report.accounts.is_empty() {
                println!();
                println!("{}", output::format_table(&report.accounts));
            }
            if !report.conserved {
                tracing::warn!("Balances and stakes do not sum to total supply");
            }
        }
    }
    Ok(())
}

/// Run the balance command.
pub async fn balance(session: &Session, account: &str, spender: Option<&str>) -> Result<(), ArborError> {
    let token = session.load_token().await?;
    let who = parse_address(account);

    let mut rows = vec![
        FieldRow::new("address", who),
        FieldRow::new("balance", token.balance_of(&who)),
        FieldRow::new("staked", token.staked_of(&who)),
    ];
    if let Some(raw) = spender {
        let spender = parse_address(raw);
        rows.push(FieldRow::new("spender", spender));
        rows.push(FieldRow::new("allowance", token.allowance(&who, &spender)));
    }

    match session.format {
        OutputFormat::Json => println!("{}", output::format_json(&rows)),
        OutputFormat::Table => println!("{}", output::format_table(&rows)),
    }
    Ok(())
}
