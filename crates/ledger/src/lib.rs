//! Ledger domain module (customers and their transaction statements).
//!
//! This crate contains the business rules for accounts: the balance fold,
//! withdrawal and closing invariants, and day-based statement filtering,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod customer;
pub mod statement;

pub use customer::Customer;
pub use statement::{balance, on_day, Transaction, TransactionKind};
