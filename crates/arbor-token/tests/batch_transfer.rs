// crates/arbor-token/tests/batch_transfer.rs
//
// Batch transfer is the one operation that can leave partial effects behind:
// entries run in order against a live balance and a failing entry stops the
// batch without undoing the ones before it.

use arbor_core::{Address, TokenError};
use arbor_token::{TokenParams, TransferEntry, TreeToken};

fn admin() -> Address {
    Address::from_label("admin")
}

fn addr(label: &str) -> Address {
    Address::from_label(label)
}

fn funded(amount: u128) -> TreeToken {
    let mut token = TreeToken::deploy(admin(), TokenParams::default());
    token.mint(&admin(), addr("alice"), amount, 0).unwrap();
    token
}

#[test]
fn failing_third_entry_keeps_first_two() {
    let mut token = funded(1000);
    let entries = [
        TransferEntry::new(addr("bob"), 200),
        TransferEntry::new(addr("carol"), 300),
        TransferEntry::new(Address::NULL, 100),
        TransferEntry::new(addr("dave"), 100),
    ];

    let err = token.batch_transfer(&addr("alice"), &entries).unwrap_err();
    assert_eq!(err, TokenError::InvalidAddress);

    assert_eq!(token.balance_of(&addr("alice")), 500);
    assert_eq!(token.balance_of(&addr("bob")), 200);
    assert_eq!(token.balance_of(&addr("carol")), 300);
    assert_eq!(token.balance_of(&addr("dave")), 0);
    assert!(token.supply_is_conserved());
}

#[test]
fn earlier_entries_drain_funds_for_later_ones() {
    let mut token = funded(500);
    let entries = [
        TransferEntry::new(addr("bob"), 400),
        TransferEntry::new(addr("carol"), 200),
    ];

    let err = token.batch_transfer(&addr("alice"), &entries).unwrap_err();
    assert_eq!(err.code(), 101);
    assert_eq!(token.balance_of(&addr("alice")), 100);
    assert_eq!(token.balance_of(&addr("bob")), 400);
    assert_eq!(token.balance_of(&addr("carol")), 0);
}

#[test]
fn zero_amount_entry_stops_batch() {
    let mut token = funded(500);
    let entries = [
        TransferEntry::new(addr("bob"), 100),
        TransferEntry::new(addr("carol"), 0),
    ];

    let err = token.batch_transfer(&addr("alice"), &entries).unwrap_err();
    assert_eq!(err.code(), 106);
    assert_eq!(token.balance_of(&addr("bob")), 100);
}

#[test]
fn first_entry_failure_changes_nothing() {
    let mut token = funded(500);
    let before = token.clone();
    let entries = [TransferEntry::new(addr("bob"), 501)];
    assert_eq!(
        token.batch_transfer(&addr("alice"), &entries),
        Err(TokenError::InsufficientBalance)
    );
    assert_eq!(token, before);
}

#[test]
fn empty_batch_is_noop() {
    let mut token = funded(500);
    let before = token.clone();
    token.batch_transfer(&addr("alice"), &[]).unwrap();
    assert_eq!(token, before);
}

#[test]
fn paused_batch_applies_nothing() {
    let mut token = funded(500);
    token.set_paused(&admin(), true).unwrap();
    let entries = [TransferEntry::new(addr("bob"), 100)];
    let err = token.batch_transfer(&addr("alice"), &entries).unwrap_err();
    assert_eq!(err.code(), 104);
    assert_eq!(token.balance_of(&addr("bob")), 0);
}

#[test]
fn repeated_recipient_accumulates() {
    let mut token = funded(500);
    let entries = [
        TransferEntry::new(addr("bob"), 100),
        TransferEntry::new(addr("bob"), 150),
    ];
    token.batch_transfer(&addr("alice"), &entries).unwrap();
    assert_eq!(token.balance_of(&addr("bob")), 250);
    assert_eq!(token.balance_of(&addr("alice")), 250);
}
