// crates/arbor-cli/src/commands/supply.rs
//
// `arbor mint`, `arbor burn`, `arbor update-cap`: supply-changing commands.

use arbor_core::{Amount, ArborError};

use super::{parse_address, Session};
use crate::output;

/// Mint `amount` to `to` at the session's block height.
pub async fn mint(session: &Session, to: &str, amount: Amount) -> Result<(), ArborError> {
    let caller = session.caller()?;
    let recipient = parse_address(to);
    let block = session.block;
    let supply = session
        .execute(|token| {
            token.mint(&caller, recipient, amount, block)?;
            Ok(token.total_supply())
        })
        .await?;
    output::print_op(session.format, "mint", Some(format!("total_supply={}", supply)));
    Ok(())
}

/// Burn `amount` from the caller's balance.
pub async fn burn(session: &Session, amount: Amount) -> Result<(), ArborError> {
    let caller = session.caller()?;
    let supply = session
        .execute(|token| {
            token.burn(&caller, amount)?;
            Ok(token.total_supply())
        })
        .await?;
    output::print_op(session.format, "burn", Some(format!("total_supply={}", supply)));
    Ok(())
}

/// Recompute the decaying mint cap at the session's block height.
pub async fn update_cap(session: &Session) -> Result<(), ArborError> {
    let block = session.block;
    let cap = session
        .execute(|token| Ok(token.update_mint_cap(block)))
        .await?;
    output::print_op(session.format, "update-cap", Some(format!("mint_cap={}", cap)));
    Ok(())
}
