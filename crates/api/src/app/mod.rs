//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the account operations over the injected store + clock
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use finledger_infra::{Clock, CustomerStore};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(store: Arc<dyn CustomerStore>, clock: Arc<dyn Clock>) -> Router {
    let services = Arc::new(services::AppServices::new(store, clock));

    routes::router().layer(Extension(services))
}
