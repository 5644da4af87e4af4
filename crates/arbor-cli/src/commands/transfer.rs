// crates/arbor-cli/src/commands/transfer.rs
//
// `arbor transfer`, `arbor batch-transfer`, `arbor approve`,
// `arbor transfer-from`: balance movements between accounts.

use arbor_core::{Amount, ArborError};
use arbor_token::TransferEntry;

use super::{parse_address, Session};
use crate::output;

pub async fn transfer(session: &Session, to: &str, amount: Amount) -> Result<(), ArborError> {
    let caller = session.caller()?;
    let recipient = parse_address(to);
    session
        .execute(|token| token.transfer(&caller, recipient, amount))
        .await?;
    output::print_op(session.format, "transfer", None);
    Ok(())
}

/// Apply `entries` in order. Entries before a failing one stay applied.
pub async fn batch_transfer(session: &Session, entries: &[String]) -> Result<(), ArborError> {
    let caller = session.caller()?;
    let entries = entries
        .iter()
        .map(|raw| parse_entry(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let count = entries.len();
    session
        .execute(|token| token.batch_transfer(&caller, &entries))
        .await?;
    output::print_op(session.format, "batch-transfer", Some(format!("entries={}", count)));
    Ok(())
}

pub async fn approve(session: &Session, spender: &str, amount: Amount) -> Result<(), ArborError> {
    let caller = session.caller()?;
    let spender = parse_address(spender);
    session
        .execute(|token| token.approve(&caller, spender, amount))
        .await?;
    output::print_op(session.format, "approve", None);
    Ok(())
}

pub async fn transfer_from(
    session: &Session,
    from: &str,
    to: &str,
    amount: Amount,
) -> Result<(), ArborError> {
    let caller = session.caller()?;
    let owner = parse_address(from);
    let recipient = parse_address(to);
    session
        .execute(|token| token.transfer_from(&caller, &owner, recipient, amount))
        .await?;
    output::print_op(session.format, "transfer-from", None);
    Ok(())
}

/// Parse a `<address|label>:<amount>` batch entry.
fn parse_entry(raw: &str) -> Result<TransferEntry, ArborError> {
    let (to, amount) = raw.rsplit_once(':').ok_or_else(|| {
        ArborError::Config(format!("batch entry '{}' must look like <to>:<amount>", raw))
    })?;
    let amount = amount
        .trim()
        .parse::<Amount>()
        .map_err(|e| ArborError::Config(format!("batch entry '{}': {}", raw, e)))?;
    Ok(TransferEntry::new(parse_address(to.trim()), amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::Address;

    #[test]
    fn test_parse_entry_label() {
        let entry = parse_entry("bob:250").unwrap();
        assert_eq!(entry.to, Address::from_label("bob"));
        assert_eq!(entry.amount, 250);
    }

    #[test]
    fn test_parse_entry_hex_address() {
        let carol = Address::from_label("carol");
        let entry = parse_entry(&format!("{}:7", carol)).unwrap();
        assert_eq!(entry.to, carol);
        assert_eq!(entry.amount, 7);
    }

    #[test]
    fn test_parse_entry_rejects_garbage() {
        assert!(parse_entry("bob").is_err());
        assert!(parse_entry("bob:-5").is_err());
        assert!(parse_entry("bob:lots").is_err());
    }
}
