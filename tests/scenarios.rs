//! End-to-end workflow scenarios against the seeded ledger.
//!
//! One controller is driven through full customer sessions: authentication,
//! account selection, the three transaction operations, and ejection,
//! including the failure paths (wrong PIN, insufficient funds, hardware
//! dispense failure with compensating rollback).

use cashpoint::controller::AtmController;
use cashpoint::hardware::MockHardware;
use cashpoint::journal::TransactionKind;
use cashpoint::ledger::{Ledger, MemoryLedger};
use cashpoint::core::SessionState;

fn atm() -> AtmController<MemoryLedger, MockHardware> {
    AtmController::new(MemoryLedger::seeded(), MockHardware::new())
}

#[test]
fn full_happy_path_session() {
    let mut atm = atm();

    // Scenario A: authenticate and check the balance.
    assert!(atm.insert_card("1234567890"));
    assert!(atm.enter_pin("1234"));

    let accounts = atm.available_accounts();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].number, "1001");
    assert_eq!(accounts[0].name, "Checking");
    assert_eq!(accounts[1].number, "1002");
    assert_eq!(accounts[1].name, "Savings");

    assert!(atm.select_account("1001"));
    assert_eq!(atm.check_balance(), Some(1000));

    // Scenario B: withdraw within the balance.
    assert_eq!(atm.withdraw(100), Ok(Some(900)));

    // Scenario C: over-balance withdrawal fails and changes nothing.
    assert_eq!(atm.withdraw(2000), Ok(None));
    assert_eq!(atm.check_balance(), Some(900));

    // Scenario D: deposit; the mock acceptor takes exactly 100.
    assert_eq!(atm.deposit(100), Some(1000));

    assert!(atm.eject_card());
    assert_eq!(atm.state(), SessionState::Idle);

    // Journal: inquiry, withdrawal ok, withdrawal failed, inquiry, deposit.
    let outcomes: Vec<_> = atm
        .journal()
        .iter()
        .map(|record| (record.kind, record.amount, record.success))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            (TransactionKind::BalanceInquiry, 0, true),
            (TransactionKind::Withdrawal, 100, true),
            (TransactionKind::Withdrawal, 2000, false),
            (TransactionKind::BalanceInquiry, 0, true),
            (TransactionKind::Deposit, 100, true),
        ]
    );
}

#[test]
fn wrong_pin_then_eject() {
    // Scenario E.
    let mut atm = atm();
    assert!(atm.insert_card("1234567890"));

    assert!(!atm.enter_pin("wrong"));
    assert_eq!(atm.state(), SessionState::CardInserted);

    assert!(atm.eject_card());
    assert_eq!(atm.state(), SessionState::Idle);
    assert!(atm.session().current_card().is_none());
}

#[test]
fn pin_entry_without_card_is_rejected() {
    // Scenario F.
    let mut atm = atm();

    assert!(!atm.enter_pin("1234"));
    assert_eq!(atm.state(), SessionState::Idle);
    assert!(atm.session().current_card().is_none());
    assert!(atm.journal().is_empty());
    assert!(atm.history().transitions().is_empty());
}

#[test]
fn dispense_failure_rolls_the_debit_back() {
    let mut hardware = MockHardware::new();
    hardware.jam_dispenser();
    let mut atm = AtmController::new(MemoryLedger::seeded(), hardware);

    atm.insert_card("1234567890");
    atm.enter_pin("1234");
    atm.select_account("1001");
    assert_eq!(atm.check_balance(), Some(1000));

    assert_eq!(atm.withdraw(300), Ok(None));

    // Post-condition balance equals pre-condition balance.
    assert_eq!(atm.check_balance(), Some(1000));
    let withdrawal = &atm.journal().records()[1];
    assert_eq!(withdrawal.kind, TransactionKind::Withdrawal);
    assert_eq!(withdrawal.amount, 300);
    assert!(!withdrawal.success);
}

#[test]
fn second_card_sees_only_its_own_account() {
    let mut atm = atm();

    assert!(atm.insert_card("0987654321"));
    assert!(atm.enter_pin("4321"));

    let accounts = atm.available_accounts();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].number, "2001");

    // Accounts of the other card are not selectable.
    assert!(!atm.select_account("1001"));
    assert!(atm.select_account("2001"));
    assert_eq!(atm.check_balance(), Some(2500));
}

#[test]
fn operations_out_of_order_never_mutate() {
    let mut atm = atm();

    assert_eq!(atm.check_balance(), None);
    assert_eq!(atm.withdraw(100), Ok(None));
    assert_eq!(atm.deposit(100), None);
    assert!(!atm.select_account("1001"));
    assert!(!atm.eject_card());

    assert_eq!(atm.state(), SessionState::Idle);
    assert!(atm.journal().is_empty());

    atm.insert_card("1234567890");
    assert_eq!(atm.check_balance(), None);
    assert!(!atm.select_account("1001"));
    assert_eq!(atm.state(), SessionState::CardInserted);
    assert!(atm.journal().is_empty());
}

#[test]
fn cancellation_mid_transaction_resets_cleanly() {
    let mut atm = atm();
    atm.insert_card("1234567890");
    atm.enter_pin("1234");
    atm.select_account("1001");
    atm.withdraw(100).unwrap();

    assert!(atm.cancel_transaction());
    assert_eq!(atm.state(), SessionState::Idle);

    // A new customer can start over on the same machine, and the ledger
    // kept the earlier debit.
    assert!(atm.insert_card("1234567890"));
    assert!(atm.enter_pin("1234"));
    assert!(atm.select_account("1001"));
    assert_eq!(atm.check_balance(), Some(900));
}

#[test]
fn session_history_traces_the_full_path() {
    let mut atm = atm();
    atm.insert_card("1234567890");
    atm.enter_pin("wrong"); // no transition
    atm.enter_pin("1234");
    atm.select_account("1001");
    atm.eject_card();

    assert_eq!(
        atm.history().get_path(),
        vec![
            SessionState::Idle,
            SessionState::CardInserted,
            SessionState::PinVerified,
            SessionState::AccountSelected,
            SessionState::Idle,
        ]
    );
}

#[test]
fn custom_ledger_loaded_from_json() {
    let json = r#"{
        "1111222233": {
            "pin": "0007",
            "accounts": [
                {"number": "77", "name": "Checking", "balance": 300}
            ]
        }
    }"#;
    let ledger = MemoryLedger::from_json(json).unwrap();
    assert_eq!(ledger.balance("77"), 300);

    let mut atm = AtmController::new(ledger, MockHardware::new());
    assert!(atm.insert_card("1111222233"));
    assert!(atm.enter_pin("0007"));
    assert!(atm.select_account("77"));
    assert_eq!(atm.withdraw(300), Ok(Some(0)));
    assert_eq!(atm.withdraw(1), Ok(None));
}
