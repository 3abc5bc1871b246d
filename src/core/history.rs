//! Session transition history tracking.
//!
//! An append-only audit trace of state transitions applied to a session.
//! Recording is pure: `record` returns a new history and leaves the
//! original untouched.

use super::state::SessionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single session state transition.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{SessionState, SessionTransition};
/// use chrono::Utc;
///
/// let transition = SessionTransition {
///     from: SessionState::Idle,
///     to: SessionState::CardInserted,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, SessionState::CardInserted);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionTransition {
    /// The state being transitioned from
    pub from: SessionState,
    /// The state being transitioned to
    pub to: SessionState,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of session transitions.
///
/// Insertion order is chronological order. Entries are never mutated or
/// removed within a session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    transitions: Vec<SessionTransition>,
}

impl SessionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cashpoint::core::{SessionHistory, SessionState, SessionTransition};
    /// use chrono::Utc;
    ///
    /// let history = SessionHistory::new();
    /// let updated = history.record(SessionTransition {
    ///     from: SessionState::Idle,
    ///     to: SessionState::CardInserted,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(history.transitions().len(), 0); // original unchanged
    /// assert_eq!(updated.transitions().len(), 1);
    /// ```
    pub fn record(&self, transition: SessionTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed: the initial state, then the `to`
    /// state of each transition.
    pub fn get_path(&self) -> Vec<SessionState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }

    /// Total duration from first to last transition, or `None` if the
    /// history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[SessionTransition] {
        &self.transitions
    }
}
