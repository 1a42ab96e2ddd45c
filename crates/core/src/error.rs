//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, conflicts). Transport mapping belongs to the API layer,
/// which renders every variant as a 400 with the `Display` message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value failed validation (e.g. empty name).
    #[error("{0}")]
    Validation(String),

    /// The tax ID did not resolve to a customer.
    #[error("Customer not found")]
    NotFound,

    /// A uniqueness or lifecycle conflict (duplicate tax ID, nonzero
    /// balance on close).
    #[error("{0}")]
    Conflict(String),

    /// Withdrawal amount exceeds the current balance.
    #[error("Insufficient funds")]
    InsufficientFunds,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
