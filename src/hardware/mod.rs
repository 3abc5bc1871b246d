//! Physical-device capability contract.
//!
//! Card reader/ejector and cash dispenser/acceptor, behind one trait so
//! real device adapters and the scriptable [`MockHardware`] are
//! interchangeable. Calls are synchronous and blocking; timeout and retry
//! policy belongs to the adapter, not the controller.

mod mock;

pub use mock::MockHardware;

/// ATM hardware capability consumed by the controller.
pub trait Hardware {
    /// Identifier of the card currently in the reader, if any.
    fn read_card(&self) -> Option<String>;

    /// Return the card to the customer. `false` leaves the session as-is.
    fn eject_card(&mut self) -> bool;

    /// Dispense `amount` in cash. `false` triggers the controller's
    /// compensating credit.
    fn dispense_cash(&mut self, amount: i64) -> bool;

    /// Accept inserted cash and report the amount physically taken, which
    /// may differ from whatever the customer asked to deposit.
    fn accept_cash(&mut self) -> i64;
}
