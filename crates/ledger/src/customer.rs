//! Customer account: identity, mutable name, append-only statement.

use chrono::{DateTime, Local, NaiveDate};

use finledger_core::{CustomerId, DomainError, DomainResult, TaxId};

use crate::statement::{self, Transaction};

/// A customer record: opaque id, tax ID natural key, display name, and an
/// append-only transaction statement in chronological (insertion) order.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    tax_id: TaxId,
    name: String,
    statement: Vec<Transaction>,
}

impl Customer {
    /// Open a new account with an empty statement.
    ///
    /// The name is stored as supplied; only renames are validated.
    pub fn open(tax_id: TaxId, name: String) -> Self {
        Self {
            id: CustomerId::new(),
            tax_id,
            name,
            statement: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statement(&self) -> &[Transaction] {
        &self.statement
    }

    /// Transactions recorded on the given local calendar day.
    pub fn statement_on(&self, day: NaiveDate) -> Vec<Transaction> {
        statement::on_day(&self.statement, day)
    }

    /// Current balance: the fold over the full statement, starting at 0.
    pub fn balance(&self) -> f64 {
        statement::balance(&self.statement, 0.0)
    }

    /// Rename the account. The new name must not be empty or whitespace.
    pub fn rename(&mut self, name: String) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        self.name = name;
        Ok(())
    }

    /// Append a credit transaction.
    ///
    /// The amount is recorded as supplied; a negative deposit reduces the
    /// balance (matching the original service's behavior).
    pub fn deposit(&mut self, description: String, amount: f64, at: DateTime<Local>) {
        self.statement
            .push(Transaction::credit(description, amount, at));
    }

    /// Append a debit transaction, gated on the current balance.
    pub fn withdraw(
        &mut self,
        description: String,
        amount: f64,
        at: DateTime<Local>,
    ) -> DomainResult<()> {
        if self.balance() < amount {
            return Err(DomainError::InsufficientFunds);
        }
        self.statement
            .push(Transaction::debit(description, amount, at));
        Ok(())
    }

    /// Closing invariant: the balance must be exactly zero.
    pub fn ensure_closable(&self) -> DomainResult<()> {
        if self.balance() != 0.0 {
            return Err(DomainError::conflict("Account has balance or debit"));
        }
        Ok(())
    }
}
