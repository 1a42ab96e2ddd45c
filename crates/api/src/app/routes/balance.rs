use std::sync::Arc;

use axum::{extract::Extension, http::{HeaderMap, StatusCode}, response::IntoResponse, Json};

use crate::app::errors;
use crate::app::routes::common;
use crate::app::services::AppServices;

/// GET /balance — the statement fold as `{balance}`.
pub async fn get_balance(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    let tax_id = match common::require_tax_id(&headers) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match services.balance(&tax_id) {
        Ok(balance) => (
            StatusCode::OK,
            Json(serde_json::json!({ "balance": balance })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
