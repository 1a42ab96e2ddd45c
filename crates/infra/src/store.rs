//! Customer storage abstraction and its in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use finledger_core::{DomainError, DomainResult, TaxId};
use finledger_ledger::Customer;

/// Value-oriented customer store keyed by tax ID.
///
/// Callers read a clone, mutate it, and write it back with [`upsert`]
/// (read-modify-write). Each call is atomic, but a read and the following
/// write are not one critical section; racing requests against the same
/// account can lose updates, matching the original service's semantics.
///
/// [`upsert`]: CustomerStore::upsert
pub trait CustomerStore: Send + Sync {
    /// Insert a new customer. Fails with `Conflict` if the tax ID is taken.
    fn insert(&self, customer: Customer) -> DomainResult<()>;

    /// Look up a customer by tax ID.
    fn get(&self, tax_id: &TaxId) -> Option<Customer>;

    /// Write a customer record back, replacing any existing one.
    fn upsert(&self, customer: Customer);

    /// Remove a customer. Returns whether a record was present.
    fn remove(&self, tax_id: &TaxId) -> bool;
}

impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    fn insert(&self, customer: Customer) -> DomainResult<()> {
        (**self).insert(customer)
    }

    fn get(&self, tax_id: &TaxId) -> Option<Customer> {
        (**self).get(tax_id)
    }

    fn upsert(&self, customer: Customer) {
        (**self).upsert(customer)
    }

    fn remove(&self, tax_id: &TaxId) -> bool {
        (**self).remove(tax_id)
    }
}

/// In-memory customer store. Empty at process start, discarded at exit.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<HashMap<TaxId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn insert(&self, customer: Customer) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("store poisoned"))?;
        if map.contains_key(customer.tax_id()) {
            return Err(DomainError::conflict("Customer already exists"));
        }
        map.insert(customer.tax_id().clone(), customer);
        Ok(())
    }

    fn get(&self, tax_id: &TaxId) -> Option<Customer> {
        let map = self.inner.read().ok()?;
        map.get(tax_id).cloned()
    }

    fn upsert(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.tax_id().clone(), customer);
        }
    }

    fn remove(&self, tax_id: &TaxId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(tax_id).is_some(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(tax_id: &str, name: &str) -> Customer {
        Customer::open(TaxId::from(tax_id), name.to_string())
    }

    #[test]
    fn insert_rejects_duplicate_tax_id_without_mutation() {
        let store = InMemoryCustomerStore::new();
        store.insert(customer("123", "Alice")).unwrap();

        let err = store.insert(customer("123", "Mallory")).unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert_eq!(msg, "Customer already exists"),
            other => panic!("expected Conflict, got {other:?}"),
        }

        // The original record is untouched.
        assert_eq!(store.get(&TaxId::from("123")).unwrap().name(), "Alice");
    }

    #[test]
    fn upsert_replaces_and_remove_deletes() {
        let store = InMemoryCustomerStore::new();
        store.insert(customer("123", "Alice")).unwrap();

        let mut found = store.get(&TaxId::from("123")).unwrap();
        found.rename("Alice B.".to_string()).unwrap();
        store.upsert(found);
        assert_eq!(store.get(&TaxId::from("123")).unwrap().name(), "Alice B.");

        assert!(store.remove(&TaxId::from("123")));
        assert!(store.get(&TaxId::from("123")).is_none());
        assert!(!store.remove(&TaxId::from("123")));
    }
}
