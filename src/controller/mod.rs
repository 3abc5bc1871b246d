//! The ATM controller: session operations over the two capabilities.
//!
//! [`AtmController`] owns the live [`Session`], the transaction journal,
//! and the ledger and hardware back ends, and sequences every operation of
//! the workflow: card insertion, PIN entry, account selection, balance
//! inquiry, withdrawal (with compensating rollback), deposit, and card
//! ejection.
//!
//! All failures are value-returned. An operation invoked in the wrong
//! state reports failure and leaves everything untouched; the only hard
//! error a caller can see is [`CompensationError`], raised when the
//! rollback of a half-finished withdrawal fails too.

use crate::core::{Session, SessionEvent, SessionHistory, SessionState};
use crate::hardware::Hardware;
use crate::journal::{TransactionJournal, TransactionKind, TransactionRecord};
use crate::ledger::{Account, Ledger};
use tracing::{debug, error, warn};

mod error;

pub use error::CompensationError;

/// Session state machine over a ledger and a hardware back end.
///
/// One controller drives one physical machine. The controller is not
/// designed for concurrent access; a deployment with several machines
/// owns one instance per machine.
///
/// # Example
///
/// ```rust
/// use cashpoint::controller::AtmController;
/// use cashpoint::hardware::MockHardware;
/// use cashpoint::ledger::MemoryLedger;
///
/// let mut atm = AtmController::new(MemoryLedger::seeded(), MockHardware::new());
///
/// assert!(atm.insert_card("1234567890"));
/// assert!(atm.enter_pin("1234"));
/// assert!(atm.select_account("1001"));
/// assert_eq!(atm.check_balance(), Some(1000));
/// assert_eq!(atm.withdraw(100), Ok(Some(900)));
/// assert!(atm.eject_card());
/// ```
#[derive(Debug)]
pub struct AtmController<L: Ledger, H: Hardware> {
    ledger: L,
    hardware: H,
    session: Session,
    journal: TransactionJournal,
}

impl<L: Ledger, H: Hardware> AtmController<L, H> {
    /// Create a controller with a fresh idle session and empty journal.
    pub fn new(ledger: L, hardware: H) -> Self {
        Self {
            ledger,
            hardware,
            session: Session::new(),
            journal: TransactionJournal::new(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The live session record.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Journal of completed operation attempts.
    pub fn journal(&self) -> &TransactionJournal {
        &self.journal
    }

    /// Audit trace of session state transitions.
    pub fn history(&self) -> &SessionHistory {
        self.session.history()
    }

    /// Accept a card. Legal only while idle; stores the card identifier.
    pub fn insert_card(&mut self, card_number: &str) -> bool {
        self.session
            .apply(SessionEvent::InsertCard(card_number.to_owned()))
            .is_ok()
    }

    /// Verify the PIN for the inserted card against the ledger.
    ///
    /// A wrong PIN leaves the session in `CardInserted`; the customer may
    /// retry or eject.
    pub fn enter_pin(&mut self, pin: &str) -> bool {
        if self.session.state() != SessionState::CardInserted {
            return false;
        }
        let Some(card) = self.session.current_card() else {
            return false;
        };

        if !self.ledger.verify_pin(card, pin) {
            warn!(card = card, "PIN verification failed");
            return false;
        }
        self.session.apply(SessionEvent::VerifyPin).is_ok()
    }

    /// Accounts reachable with the current card, freshly read from the
    /// ledger. Empty unless the PIN has been verified and no account has
    /// been selected yet.
    pub fn available_accounts(&self) -> Vec<Account> {
        if self.session.state() != SessionState::PinVerified {
            return Vec::new();
        }
        match self.session.current_card() {
            Some(card) => self.ledger.accounts(card),
            None => Vec::new(),
        }
    }

    /// Select one of the card's accounts for transactions.
    ///
    /// Fails if the number is not in the ledger's account list for the
    /// current card.
    pub fn select_account(&mut self, account_number: &str) -> bool {
        if self.session.state() != SessionState::PinVerified {
            return false;
        }
        let known = self
            .available_accounts()
            .iter()
            .any(|account| account.number == account_number);
        if !known {
            warn!(account = account_number, "account not available for card");
            return false;
        }
        self.session
            .apply(SessionEvent::SelectAccount(account_number.to_owned()))
            .is_ok()
    }

    /// Balance of the selected account, freshly read from the ledger.
    ///
    /// Pure read; appends one success record with amount 0.
    pub fn check_balance(&mut self) -> Option<i64> {
        let account = self.selected_account_for_transaction()?;
        let balance = self.ledger.balance(&account);
        self.journal.append(TransactionRecord::new(
            TransactionKind::BalanceInquiry,
            &account,
            0,
            true,
        ));
        Some(balance)
    }

    /// Withdraw `amount` from the selected account.
    ///
    /// The ledger is debited first, then the hardware dispenses. If the
    /// dispense fails the debit is compensated with a credit of the same
    /// amount. `Ok(Some(balance))` on success, `Ok(None)` on any ordinary
    /// failure, and `Err(CompensationError)` only when the compensating
    /// credit itself fails, leaving ledger and cash drawer inconsistent.
    ///
    /// Exactly one journal record per call once past the legality guards;
    /// wrong state or a non-positive amount fails with no side effects.
    pub fn withdraw(&mut self, amount: i64) -> Result<Option<i64>, CompensationError> {
        let Some(account) = self.selected_account_for_transaction() else {
            return Ok(None);
        };
        if amount <= 0 {
            return Ok(None);
        }

        if !self.ledger.withdraw(&account, amount) {
            warn!(account = %account, amount, "ledger refused debit");
            self.journal.append(TransactionRecord::new(
                TransactionKind::Withdrawal,
                &account,
                amount,
                false,
            ));
            return Ok(None);
        }

        if !self.hardware.dispense_cash(amount) {
            // Debit already applied; reverse it before reporting failure.
            let compensated = self.ledger.deposit(&account, amount);
            self.journal.append(TransactionRecord::new(
                TransactionKind::Withdrawal,
                &account,
                amount,
                false,
            ));
            if !compensated {
                error!(
                    account = %account,
                    amount,
                    "compensating credit failed after dispense failure; ledger and cash drawer are inconsistent"
                );
                return Err(CompensationError { account, amount });
            }
            warn!(account = %account, amount, "dispense failed; debit compensated");
            return Ok(None);
        }

        self.journal.append(TransactionRecord::new(
            TransactionKind::Withdrawal,
            &account,
            amount,
            true,
        ));
        // Fresh read rather than local arithmetic; the ledger owns the value.
        let balance = self.ledger.balance(&account);
        debug!(account = %account, amount, balance, "withdrawal complete");
        Ok(Some(balance))
    }

    /// Deposit cash into the selected account.
    ///
    /// The hardware reports the amount it physically accepted, which may
    /// differ from `requested`; the accepted amount is what gets credited
    /// and journaled. Returns the fresh balance on success.
    pub fn deposit(&mut self, requested: i64) -> Option<i64> {
        let account = self.selected_account_for_transaction()?;
        if requested <= 0 {
            return None;
        }

        let accepted = self.hardware.accept_cash();
        if accepted != requested {
            debug!(requested, accepted, "acceptor took a different amount");
        }

        let credited = self.ledger.deposit(&account, accepted);
        self.journal.append(TransactionRecord::new(
            TransactionKind::Deposit,
            &account,
            accepted,
            credited,
        ));
        if !credited {
            warn!(account = %account, accepted, "ledger refused credit");
            return None;
        }

        let balance = self.ledger.balance(&account);
        debug!(account = %account, accepted, balance, "deposit complete");
        Some(balance)
    }

    /// Eject the card and reset the session to idle.
    ///
    /// Legal from any non-idle state. If the hardware fails to eject, the
    /// session is left unchanged and the call reports failure.
    pub fn eject_card(&mut self) -> bool {
        if self.session.state() == SessionState::Idle {
            return false;
        }
        if !self.hardware.eject_card() {
            warn!("hardware failed to eject card; session unchanged");
            return false;
        }
        self.session.apply(SessionEvent::EjectCard).is_ok()
    }

    /// Cancel the current transaction: semantic alias for [`eject_card`].
    ///
    /// [`eject_card`]: AtmController::eject_card
    pub fn cancel_transaction(&mut self) -> bool {
        self.eject_card()
    }

    /// Selected account if transactions are legal right now.
    fn selected_account_for_transaction(&self) -> Option<String> {
        if !self.session.state().transactions_allowed() {
            return None;
        }
        self.session.selected_account().map(str::to_owned)
    }
}
