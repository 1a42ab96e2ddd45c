use serde::Deserialize;

use finledger_ledger::Customer;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAccountRequest {
    pub tax_id: String,
    pub name: String,
}

/// `name` is optional at the serde level so a missing field surfaces as the
/// domain's "Name is required" 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RenameAccountRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct StatementQuery {
    pub date: Option<String>,
}

// -------------------------
// Response mapping
// -------------------------

/// Public account profile: tax ID and name only. The internal id and the
/// statement are never serialized.
pub fn profile_to_json(customer: &Customer) -> serde_json::Value {
    serde_json::json!({
        "taxId": customer.tax_id(),
        "name": customer.name(),
    })
}
