//! Walkthrough of a full ATM session.
//!
//! Seeds the in-memory ledger, then drives one customer session end to
//! end: insert card, verify PIN, list and select accounts, check the
//! balance, withdraw, deposit, try an over-balance withdrawal, and eject.
//!
//! Run with: cargo run --example walkthrough

use cashpoint::controller::AtmController;
use cashpoint::hardware::{Hardware, MockHardware};
use cashpoint::ledger::MemoryLedger;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cashpoint=debug".into()),
        )
        .init();

    println!("=== Cashpoint walkthrough ===\n");

    let mut hardware = MockHardware::new();
    hardware.insert_card("1234567890");
    let card = hardware
        .read_card()
        .expect("mock reader was loaded with a card");
    let mut atm = AtmController::new(MemoryLedger::seeded(), hardware);

    println!("1. Inserting card {card}...");
    assert!(atm.insert_card(&card));

    println!("2. Entering PIN...");
    if !atm.enter_pin("1234") {
        println!("   invalid PIN, ejecting");
        atm.eject_card();
        return;
    }

    println!("3. Available accounts:");
    for (i, account) in atm.available_accounts().iter().enumerate() {
        println!("   {}. {} ({})", i + 1, account.name, account.number);
    }

    println!("4. Selecting the checking account...");
    assert!(atm.select_account("1001"));

    println!("5. Checking balance...");
    let balance = atm.check_balance().expect("account is selected");
    println!("   balance: {balance}");

    println!("6. Withdrawing 100...");
    match atm.withdraw(100) {
        Ok(Some(balance)) => println!("   ok, new balance: {balance}"),
        Ok(None) => println!("   withdrawal failed"),
        Err(err) => {
            eprintln!("   FATAL: {err}");
            return;
        }
    }

    println!("7. Depositing (acceptor decides the amount)...");
    match atm.deposit(50) {
        Some(balance) => println!("   ok, new balance: {balance}"),
        None => println!("   deposit failed"),
    }

    println!("8. Trying to withdraw 100000...");
    match atm.withdraw(100_000) {
        Ok(None) => println!("   rejected: insufficient funds"),
        other => println!("   unexpected outcome: {other:?}"),
    }

    println!("9. Ejecting card...");
    assert!(atm.eject_card());

    println!("\nJournal:");
    for record in atm.journal().iter() {
        println!(
            "   {} account={} amount={} success={}",
            record.kind.name(),
            record.account,
            record.amount,
            record.success
        );
    }
}
