//! In-memory ledger implementation for tests and demos.

use super::{Account, Ledger};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One card's entry in the ledger: its PIN and the accounts it reaches.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardProfile {
    pub pin: String,
    pub accounts: Vec<Account>,
}

/// In-memory [`Ledger`] backed by a card table.
///
/// A `BTreeMap` keeps card iteration deterministic. Construct it empty,
/// from a JSON card table via [`MemoryLedger::from_json`], or pre-seeded
/// with the standard demo data via [`MemoryLedger::seeded`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    cards: BTreeMap<String, CardProfile>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a card table from JSON, e.g.
    /// `{"1234567890": {"pin": "1234", "accounts": [...]}}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let cards: BTreeMap<String, CardProfile> = serde_json::from_str(json)?;
        Ok(Self { cards })
    }

    /// Ledger pre-seeded with the standard demo cards: card `1234567890`
    /// (PIN `1234`, Checking 1000, Savings 5000) and card `0987654321`
    /// (PIN `4321`, Checking 2500).
    pub fn seeded() -> Self {
        let mut ledger = Self::new();
        ledger.add_card(
            "1234567890",
            "1234",
            vec![
                Account {
                    number: "1001".into(),
                    name: "Checking".into(),
                    balance: 1000,
                },
                Account {
                    number: "1002".into(),
                    name: "Savings".into(),
                    balance: 5000,
                },
            ],
        );
        ledger.add_card(
            "0987654321",
            "4321",
            vec![Account {
                number: "2001".into(),
                name: "Checking".into(),
                balance: 2500,
            }],
        );
        ledger
    }

    /// Register a card with its PIN and accounts, replacing any existing
    /// entry for the same card number.
    pub fn add_card(&mut self, card_number: &str, pin: &str, accounts: Vec<Account>) {
        self.cards.insert(
            card_number.to_owned(),
            CardProfile {
                pin: pin.to_owned(),
                accounts,
            },
        );
    }

    fn account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        self.cards
            .values_mut()
            .flat_map(|profile| profile.accounts.iter_mut())
            .find(|account| account.number == account_number)
    }

    fn account(&self, account_number: &str) -> Option<&Account> {
        self.cards
            .values()
            .flat_map(|profile| profile.accounts.iter())
            .find(|account| account.number == account_number)
    }
}

impl Ledger for MemoryLedger {
    fn verify_pin(&self, card_number: &str, pin: &str) -> bool {
        self.cards
            .get(card_number)
            .map(|profile| profile.pin == pin)
            .unwrap_or(false)
    }

    fn accounts(&self, card_number: &str) -> Vec<Account> {
        self.cards
            .get(card_number)
            .map(|profile| profile.accounts.clone())
            .unwrap_or_default()
    }

    fn balance(&self, account_number: &str) -> i64 {
        self.account(account_number)
            .map(|account| account.balance)
            .unwrap_or(0)
    }

    fn withdraw(&mut self, account_number: &str, amount: i64) -> bool {
        if amount <= 0 {
            return false;
        }
        match self.account_mut(account_number) {
            Some(account) if account.balance >= amount => {
                account.balance -= amount;
                true
            }
            _ => false,
        }
    }

    fn deposit(&mut self, account_number: &str, amount: i64) -> bool {
        if amount <= 0 {
            return false;
        }
        match self.account_mut(account_number) {
            Some(account) => {
                account.balance += amount;
                true
            }
            None => false,
        }
    }
}
