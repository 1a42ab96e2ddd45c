use axum::http::HeaderMap;

use finledger_core::{DomainError, TaxId};

use crate::app::errors;

/// Header carrying the caller-supplied tax ID (trusted as-is, no
/// credential verification).
pub const TAX_ID_HEADER: &str = "taxid";

/// Resolve the tax ID header, or the wire-level "Customer not found"
/// response when it is missing or not valid ASCII.
pub fn require_tax_id(headers: &HeaderMap) -> Result<TaxId, axum::response::Response> {
    headers
        .get(TAX_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(TaxId::from)
        .ok_or_else(|| errors::domain_error_to_response(DomainError::not_found()))
}
