use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use finledger_core::DomainError;

/// Map a domain error onto the wire contract.
///
/// The transport does not distinguish client-input errors from business-rule
/// violations: every failure is a 400 with a `{message}` body.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.to_string())
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}
