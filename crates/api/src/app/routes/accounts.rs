use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use finledger_core::TaxId;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// POST /accounts — open an account. The tax ID comes from the body here;
/// every other operation reads it from the header.
pub async fn open_account(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::OpenAccountRequest>,
) -> axum::response::Response {
    match services.open_account(TaxId::from(body.tax_id), body.name) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// PATCH /accounts — rename the account.
pub async fn rename_account(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    Json(body): Json<dto::RenameAccountRequest>,
) -> axum::response::Response {
    let tax_id = match common::require_tax_id(&headers) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match services.rename_account(&tax_id, body.name.unwrap_or_default()) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Account updated" })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET /accounts — the public profile: tax ID and name only.
pub async fn account_profile(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    let tax_id = match common::require_tax_id(&headers) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match services.require_customer(&tax_id) {
        Ok(customer) => (StatusCode::OK, Json(dto::profile_to_json(&customer))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// DELETE /accounts — close the account; requires a zero balance.
pub async fn close_account(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    let tax_id = match common::require_tax_id(&headers) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match services.close_account(&tax_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Account closed successfully" })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
