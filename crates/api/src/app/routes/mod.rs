use axum::{
    routing::{get, post},
    Router,
};

pub mod accounts;
pub mod balance;
pub mod common;
pub mod statements;
pub mod system;
pub mod transactions;

/// Router for all endpoints.
///
/// Everything except `/health` and account creation is gated on the `taxid`
/// header resolving to a known customer.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/accounts",
            post(accounts::open_account)
                .patch(accounts::rename_account)
                .get(accounts::account_profile)
                .delete(accounts::close_account),
        )
        .route("/statements", get(statements::list_statement))
        .route("/balance", get(balance::get_balance))
        .route("/deposit", post(transactions::deposit))
        .route("/withdraw", post(transactions::withdraw))
}
