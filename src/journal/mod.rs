//! Append-only record of completed operation attempts.
//!
//! Every balance inquiry, withdrawal, and deposit that gets past its
//! legality guards appends exactly one [`TransactionRecord`], carrying the
//! final success/failure outcome. Entries are never mutated, removed, or
//! reordered; insertion order is chronological order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of operation a record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    BalanceInquiry,
    Withdrawal,
    Deposit,
}

impl TransactionKind {
    /// Kind name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BalanceInquiry => "balance_inquiry",
            Self::Withdrawal => "withdrawal",
            Self::Deposit => "deposit",
        }
    }
}

/// Immutable description of one completed operation attempt.
///
/// `amount` is 0 for balance inquiries; for deposits it is the amount the
/// hardware physically accepted, not the amount the customer requested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// What was attempted.
    pub kind: TransactionKind,
    /// Account the operation targeted.
    pub account: String,
    /// Amount in minor units (0 for inquiries).
    pub amount: i64,
    /// Final outcome of the attempt.
    pub success: bool,
    /// When the record was appended.
    pub timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    /// Build a record stamped with a fresh id and the current time.
    pub fn new(kind: TransactionKind, account: &str, amount: i64, success: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            account: account.to_owned(),
            amount,
            success,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only, in-memory transaction journal.
///
/// `append` has no failure mode. The journal never trims or rotates within
/// a session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransactionJournal {
    records: Vec<TransactionRecord>,
}

impl TransactionJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Always succeeds.
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// All records in insertion (= chronological) order.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Iterate records in order.
    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no operation attempt has been journaled yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_journal_is_empty() {
        let journal = TransactionJournal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert!(journal.records().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut journal = TransactionJournal::new();
        journal.append(TransactionRecord::new(
            TransactionKind::BalanceInquiry,
            "1001",
            0,
            true,
        ));
        journal.append(TransactionRecord::new(
            TransactionKind::Withdrawal,
            "1001",
            100,
            true,
        ));
        journal.append(TransactionRecord::new(
            TransactionKind::Withdrawal,
            "1001",
            2000,
            false,
        ));

        let kinds: Vec<_> = journal.iter().map(|record| record.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::BalanceInquiry,
                TransactionKind::Withdrawal,
                TransactionKind::Withdrawal,
            ]
        );
        assert_eq!(journal.len(), 3);
        assert!(!journal.records()[2].success);
    }

    #[test]
    fn records_carry_unique_ids() {
        let first = TransactionRecord::new(TransactionKind::Deposit, "1001", 50, true);
        let second = TransactionRecord::new(TransactionKind::Deposit, "1001", 50, true);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&TransactionKind::BalanceInquiry).unwrap();
        assert_eq!(json, "\"balance_inquiry\"");
        assert_eq!(TransactionKind::Withdrawal.name(), "withdrawal");
    }

    #[test]
    fn journal_serializes_correctly() {
        let mut journal = TransactionJournal::new();
        journal.append(TransactionRecord::new(
            TransactionKind::Deposit,
            "1001",
            100,
            true,
        ));

        let json = serde_json::to_string(&journal).unwrap();
        let deserialized: TransactionJournal = serde_json::from_str(&json).unwrap();
        assert_eq!(journal.records(), deserialized.records());
    }
}
