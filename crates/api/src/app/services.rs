//! Account operations over the injected store and clock.
//!
//! Every gated operation calls [`AppServices::require_customer`] first: the
//! explicit precondition replacing the original middleware-style lookup.
//! Mutations are read-modify-write (clone out, mutate, upsert back); see the
//! [`CustomerStore`] contract for what that does and does not guarantee under
//! concurrency.

use std::sync::Arc;

use chrono::NaiveDate;

use finledger_core::{DomainResult, TaxId};
use finledger_infra::{Clock, CustomerStore};
use finledger_ledger::{Customer, Transaction};

pub struct AppServices {
    store: Arc<dyn CustomerStore>,
    clock: Arc<dyn Clock>,
}

impl AppServices {
    pub fn new(store: Arc<dyn CustomerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Precondition gate: resolve the header-supplied tax ID to a customer.
    ///
    /// The tax ID is trusted as-is; there is no credential verification.
    pub fn require_customer(&self, tax_id: &TaxId) -> DomainResult<Customer> {
        self.store
            .get(tax_id)
            .ok_or_else(finledger_core::DomainError::not_found)
    }

    pub fn open_account(&self, tax_id: TaxId, name: String) -> DomainResult<()> {
        let customer = Customer::open(tax_id.clone(), name);
        self.store.insert(customer)?;
        tracing::info!(tax_id = %tax_id, "account opened");
        Ok(())
    }

    pub fn rename_account(&self, tax_id: &TaxId, name: String) -> DomainResult<()> {
        let mut customer = self.require_customer(tax_id)?;
        customer.rename(name)?;
        self.store.upsert(customer);
        Ok(())
    }

    pub fn close_account(&self, tax_id: &TaxId) -> DomainResult<()> {
        let customer = self.require_customer(tax_id)?;
        customer.ensure_closable()?;
        self.store.remove(tax_id);
        tracing::info!(tax_id = %tax_id, "account closed");
        Ok(())
    }

    pub fn statement(
        &self,
        tax_id: &TaxId,
        day: Option<NaiveDate>,
    ) -> DomainResult<Vec<Transaction>> {
        let customer = self.require_customer(tax_id)?;
        Ok(match day {
            Some(day) => customer.statement_on(day),
            None => customer.statement().to_vec(),
        })
    }

    pub fn balance(&self, tax_id: &TaxId) -> DomainResult<f64> {
        Ok(self.require_customer(tax_id)?.balance())
    }

    pub fn deposit(&self, tax_id: &TaxId, description: String, amount: f64) -> DomainResult<()> {
        let mut customer = self.require_customer(tax_id)?;
        customer.deposit(description, amount, self.clock.now());
        self.store.upsert(customer);
        Ok(())
    }

    pub fn withdraw(&self, tax_id: &TaxId, description: String, amount: f64) -> DomainResult<()> {
        let mut customer = self.require_customer(tax_id)?;
        if let Err(e) = customer.withdraw(description, amount, self.clock.now()) {
            tracing::warn!(tax_id = %tax_id, "withdrawal rejected: {e}");
            return Err(e);
        }
        self.store.upsert(customer);
        Ok(())
    }
}
