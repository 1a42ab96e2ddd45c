//! Transactions and statement queries.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Transaction kind: credits increase the balance, debits decrease it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// A single statement entry (immutable once appended).
///
/// Timestamps are recorded in the server's local time zone; the day filter
/// in [`on_day`] compares against the local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub description: String,
    pub amount: f64,
    pub created_at: DateTime<Local>,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn credit(description: String, amount: f64, created_at: DateTime<Local>) -> Self {
        Self {
            description,
            amount,
            created_at,
            kind: TransactionKind::Credit,
        }
    }

    pub fn debit(description: String, amount: f64, created_at: DateTime<Local>) -> Self {
        Self {
            description,
            amount,
            created_at,
            kind: TransactionKind::Debit,
        }
    }
}

/// Fold a statement into a balance: left to right in insertion order,
/// starting from `initial`, credits add and debits subtract.
pub fn balance(statement: &[Transaction], initial: f64) -> f64 {
    statement.iter().fold(initial, |total, tx| match tx.kind {
        TransactionKind::Credit => total + tx.amount,
        TransactionKind::Debit => total - tx.amount,
    })
}

/// Transactions whose `created_at` falls on the given local calendar day.
///
/// Comparison is by calendar day, not exact timestamp, so time-of-day never
/// affects inclusion.
pub fn on_day(statement: &[Transaction], day: NaiveDate) -> Vec<Transaction> {
    statement
        .iter()
        .filter(|tx| tx.created_at.date_naive() == day)
        .cloned()
        .collect()
}
