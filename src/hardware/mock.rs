//! Scriptable hardware implementation for tests and demos.

use super::Hardware;

/// In-memory [`Hardware`] with injectable failures.
///
/// By default every device operation succeeds and the cash acceptor takes
/// 100 minor units. Tests script the interesting paths: a jammed dispenser
/// for the rollback protocol, a stuck ejector, or an acceptor that takes a
/// different amount than requested.
#[derive(Clone, Debug)]
pub struct MockHardware {
    inserted_card: Option<String>,
    eject_succeeds: bool,
    dispense_succeeds: bool,
    accepted_amount: i64,
}

impl Default for MockHardware {
    fn default() -> Self {
        Self {
            inserted_card: None,
            eject_succeeds: true,
            dispense_succeeds: true,
            accepted_amount: 100,
        }
    }
}

impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card in the reader so `read_card` reports it.
    pub fn insert_card(&mut self, card_number: &str) {
        self.inserted_card = Some(card_number.to_owned());
    }

    /// Make subsequent `eject_card` calls fail.
    pub fn jam_ejector(&mut self) {
        self.eject_succeeds = false;
    }

    /// Make subsequent `dispense_cash` calls fail.
    pub fn jam_dispenser(&mut self) {
        self.dispense_succeeds = false;
    }

    /// Fix the amount the acceptor physically takes.
    pub fn set_accepted_amount(&mut self, amount: i64) {
        self.accepted_amount = amount;
    }
}

impl Hardware for MockHardware {
    fn read_card(&self) -> Option<String> {
        self.inserted_card.clone()
    }

    fn eject_card(&mut self) -> bool {
        if self.eject_succeeds {
            self.inserted_card = None;
            true
        } else {
            false
        }
    }

    fn dispense_cash(&mut self, amount: i64) -> bool {
        self.dispense_succeeds && amount > 0
    }

    fn accept_cash(&mut self) -> i64 {
        self.accepted_amount
    }
}
