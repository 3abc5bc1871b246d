//! Cashpoint: an ATM session state machine.
//!
//! Cashpoint models the control logic of an automated teller machine as a
//! finite workflow: authenticate a card/PIN pair, pick an account, then run
//! balance, withdrawal, and deposit operations against a bank back end
//! while coordinating cash hardware. The delicate part is the two-system
//! coordination: a withdrawal debits the ledger before the dispenser moves,
//! and a failed dispense is rolled back with a compensating credit.
//!
//! # Core Concepts
//!
//! - **Session**: the single mutable record of interaction progress, with
//!   every state change funneled through one transition function
//! - **Capabilities**: the [`ledger::Ledger`] and [`hardware::Hardware`]
//!   traits, with in-memory implementations for tests and demos
//! - **Journal**: an append-only record of every completed operation attempt
//!
//! # Example
//!
//! ```rust
//! use cashpoint::controller::AtmController;
//! use cashpoint::hardware::MockHardware;
//! use cashpoint::ledger::MemoryLedger;
//!
//! let mut atm = AtmController::new(MemoryLedger::seeded(), MockHardware::new());
//!
//! assert!(atm.insert_card("1234567890"));
//! assert!(atm.enter_pin("1234"));
//!
//! let accounts = atm.available_accounts();
//! assert_eq!(accounts[0].name, "Checking");
//!
//! assert!(atm.select_account("1001"));
//! assert_eq!(atm.check_balance(), Some(1000));
//! assert_eq!(atm.withdraw(100), Ok(Some(900)));
//! assert!(atm.eject_card());
//! ```
//!
//! The controller runs one session at a time, synchronously; a deployment
//! with several physical machines owns one controller per machine.

pub mod controller;
pub mod core;
pub mod hardware;
pub mod journal;
pub mod ledger;

// Re-export commonly used types
pub use crate::controller::{AtmController, CompensationError};
pub use crate::core::{Session, SessionState};
pub use crate::hardware::{Hardware, MockHardware};
pub use crate::journal::{TransactionJournal, TransactionKind, TransactionRecord};
pub use crate::ledger::{Account, Ledger, MemoryLedger};
