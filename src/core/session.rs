//! The live ATM session and its transition function.
//!
//! A [`Session`] is the single mutable record of interaction progress:
//! state, inserted card, selected account. All mutation flows through
//! [`Session::apply`], the one place transition legality and the
//! card/account field invariants are enforced.

use super::history::{SessionHistory, SessionTransition};
use super::state::SessionState;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// An event requesting a session state change.
///
/// Events carry only the data the transition stores; operations that do not
/// change session state (balance, withdraw, deposit) have no event.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// A card was inserted; legal only in `Idle`.
    InsertCard(String),
    /// The ledger verified the PIN; legal only in `CardInserted`.
    VerifyPin,
    /// An account was chosen; legal only in `PinVerified`.
    SelectAccount(String),
    /// The card was ejected; legal in any non-`Idle` state.
    EjectCard,
}

impl SessionEvent {
    /// Event name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertCard(_) => "InsertCard",
            Self::VerifyPin => "VerifyPin",
            Self::SelectAccount(_) => "SelectAccount",
            Self::EjectCard => "EjectCard",
        }
    }
}

/// An event was applied in a state where it is not legal.
///
/// This is a control outcome, not a fault: callers translate it into the
/// value-level failure indicator of the operation that raised it.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("event {event} is not legal in state {}", .from.name())]
pub struct IllegalTransition {
    /// The state the session was in when the event arrived.
    pub from: SessionState,
    /// Name of the rejected event.
    pub event: &'static str,
}

/// The single live record of ATM interaction progress.
///
/// Invariants, enforced at every transition boundary:
/// - `current_card` is present iff `state != Idle`
/// - `selected_account` is present iff `state == AccountSelected`
///
/// A session is created in `Idle` and returns to `Idle` (both optional
/// fields cleared) on card ejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
    current_card: Option<String>,
    selected_account: Option<String>,
    history: SessionHistory,
}

impl Session {
    /// Create a fresh session in `Idle` with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current workflow state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Identifier of the inserted card, if any.
    pub fn current_card(&self) -> Option<&str> {
        self.current_card.as_deref()
    }

    /// Identifier of the selected account, if any.
    pub fn selected_account(&self) -> Option<&str> {
        self.selected_account.as_deref()
    }

    /// Audit trace of every transition applied to this session.
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Apply an event, transitioning the session if the event is legal in
    /// the current state.
    ///
    /// On rejection the session is left completely unchanged, including its
    /// history. On success the transition is recorded in the history and
    /// the field invariants hold again.
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), IllegalTransition> {
        let from = self.state;
        let name = event.name();

        match (event, from) {
            (SessionEvent::InsertCard(card), SessionState::Idle) => {
                self.current_card = Some(card);
                self.state = SessionState::CardInserted;
            }
            (SessionEvent::VerifyPin, SessionState::CardInserted)
                if self.current_card.is_some() =>
            {
                self.state = SessionState::PinVerified;
            }
            (SessionEvent::SelectAccount(account), SessionState::PinVerified) => {
                self.selected_account = Some(account);
                self.state = SessionState::AccountSelected;
            }
            (SessionEvent::EjectCard, state) if state != SessionState::Idle => {
                self.current_card = None;
                self.selected_account = None;
                self.state = SessionState::Idle;
            }
            _ => return Err(IllegalTransition { from, event: name }),
        }

        self.history = self.history.record(SessionTransition {
            from,
            to: self.state,
            timestamp: Utc::now(),
        });
        debug_assert!(self.invariants_hold());
        debug!(from = from.name(), to = self.state.name(), event = name, "session transition");
        Ok(())
    }

    /// Check the card/account field invariants against the current state.
    pub fn invariants_hold(&self) -> bool {
        let card_ok = self.current_card.is_some() == self.state.card_expected();
        let account_ok =
            self.selected_account.is_some() == (self.state == SessionState::AccountSelected);
        card_ok && account_ok
    }
}
