use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// POST /deposit — append a credit transaction stamped with the current
/// local time. The amount is not validated (a negative deposit reduces the
/// balance).
pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    Json(body): Json<dto::TransactionRequest>,
) -> axum::response::Response {
    let tax_id = match common::require_tax_id(&headers) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match services.deposit(&tax_id, body.description, body.amount) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST /withdraw — append a debit transaction, gated on the balance.
pub async fn withdraw(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    Json(body): Json<dto::TransactionRequest>,
) -> axum::response::Response {
    let tax_id = match common::require_tax_id(&headers) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match services.withdraw(&tax_id, body.description, body.amount) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
