use std::sync::Arc;

use finledger_infra::{InMemoryCustomerStore, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    finledger_api::telemetry::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3333".to_string());

    let store = Arc::new(InMemoryCustomerStore::new());
    let clock = Arc::new(SystemClock);
    let app = finledger_api::app::build_app(store, clock);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
