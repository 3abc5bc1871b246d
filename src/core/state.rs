//! Session states of the ATM workflow.
//!
//! A session moves through four states: waiting for a card, card inserted,
//! PIN verified, and account selected. States are immutable values; all
//! mutation happens through [`Session::apply`](super::Session::apply).

use serde::{Deserialize, Serialize};

/// The position of an ATM session in its authentication/transaction workflow.
///
/// Field-level invariants on [`Session`](super::Session) are tied to the
/// state: a card identifier is present iff the state is not `Idle`, and an
/// account identifier is present iff the state is `AccountSelected`.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::SessionState;
///
/// let state = SessionState::Idle;
/// assert_eq!(state.name(), "Idle");
/// assert!(!state.card_expected());
/// assert!(!state.is_authenticated());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// No card inserted; the machine is waiting for a customer.
    #[default]
    Idle,
    /// A card has been read but the PIN has not been verified yet.
    CardInserted,
    /// The PIN was verified; the customer may list and select accounts.
    PinVerified,
    /// An account is selected; balance, withdrawal, and deposit are legal.
    AccountSelected,
}

impl SessionState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::CardInserted => "CardInserted",
            Self::PinVerified => "PinVerified",
            Self::AccountSelected => "AccountSelected",
        }
    }

    /// Whether a card identifier must be present in this state.
    pub fn card_expected(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the PIN has been verified in this state.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::PinVerified | Self::AccountSelected)
    }

    /// Whether transaction operations (balance, withdraw, deposit) are legal.
    pub fn transactions_allowed(&self) -> bool {
        matches!(self, Self::AccountSelected)
    }
}
