use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// GET /statements — the full statement, or only the transactions recorded
/// on the queried local calendar day (`?date=YYYY-MM-DD`).
pub async fn list_statement(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    Query(query): Query<dto::StatementQuery>,
) -> axum::response::Response {
    let tax_id = match common::require_tax_id(&headers) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    let day = match query.date.as_deref() {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(day) => Some(day),
            Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "Invalid date"),
        },
        None => None,
    };

    match services.statement(&tax_id, day) {
        Ok(transactions) => (StatusCode::OK, Json(transactions)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
