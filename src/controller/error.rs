//! Controller errors.

use thiserror::Error;

/// The compensating credit after a failed cash dispense itself failed.
///
/// At this point the ledger has been debited, no cash left the machine,
/// and the reversal did not land: the two systems are out of sync. There
/// is no in-band recovery path; callers must escalate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("compensating credit of {amount} to account {account} failed after dispense failure; ledger and cash drawer are inconsistent")]
pub struct CompensationError {
    /// Account left debited without a payout.
    pub account: String,
    /// Amount debited and not reversed, in minor units.
    pub amount: i64,
}
