//! Core session types and logic.
//!
//! This module contains the heart of the ATM state machine:
//! - Session states via [`SessionState`]
//! - The live [`Session`] record and its central transition function
//! - Append-only transition [`SessionHistory`] for audit
//!
//! Transition legality and the card/account field invariants are enforced
//! in exactly one place, [`Session::apply`].

mod history;
mod session;
mod state;

pub use history::{SessionHistory, SessionTransition};
pub use session::{IllegalTransition, Session, SessionEvent};
pub use state::SessionState;
