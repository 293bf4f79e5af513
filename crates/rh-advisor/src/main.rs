//! Roundhouse advisor — suggest-only chat API over the fleet dashboard.
//!
//! Converts free-text admin questions into catalog-validated read-only
//! call recommendations. Never executes side effects against the
//! dashboard; the one outbound call is the read-only snapshot fetch.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use rh_advisor::config::AdvisorConfig;
use rh_advisor::routes::build_router;
use rh_advisor::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rh-advisor starting");

    let config = AdvisorConfig::from_env();
    let state = AppState::from_config(&config);

    // Serve even if the first fetch fails; /api/v1/refresh can retry and
    // suggestions report the snapshot as stale until then.
    match state.refresh().await {
        Ok(records) => tracing::info!(records, "initial snapshot loaded"),
        Err(e) => tracing::warn!(error = %e, "initial snapshot fetch failed"),
    }

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
