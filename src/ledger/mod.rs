//! Bank-side capability contract.
//!
//! The controller never stores account data itself; every read is a fresh
//! call through the [`Ledger`] trait. Production adapters and the
//! in-memory [`MemoryLedger`] are interchangeable implementations of the
//! same contract.

use serde::{Deserialize, Serialize};

mod memory;

pub use memory::{CardProfile, MemoryLedger};

/// A bank account as reported by the ledger.
///
/// Balances are integer minor units, never negative. The controller treats
/// this as a read-only snapshot; the ledger owns the live value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier used in all ledger calls.
    pub number: String,
    /// Display name, e.g. "Checking".
    pub name: String,
    /// Current balance in minor units.
    pub balance: i64,
}

/// Bank back-end capability consumed by the controller.
///
/// All failures are value-returned: `false` or an empty list, never a
/// panic. Debit and credit reject non-positive amounts.
pub trait Ledger {
    /// Check a card/PIN pair. Unknown cards fail verification.
    fn verify_pin(&self, card_number: &str, pin: &str) -> bool;

    /// Accounts reachable with the given card, in the bank's order.
    /// Unknown cards yield an empty list.
    fn accounts(&self, card_number: &str) -> Vec<Account>;

    /// Current balance of an account. Unknown accounts report 0.
    fn balance(&self, account_number: &str) -> i64;

    /// Debit `amount` from the account. Fails if `amount <= 0`, the
    /// account is unknown, or funds are insufficient.
    fn withdraw(&mut self, account_number: &str, amount: i64) -> bool;

    /// Credit `amount` to the account. Fails if `amount <= 0` or the
    /// account is unknown.
    fn deposit(&mut self, account_number: &str, amount: i64) -> bool;
}
