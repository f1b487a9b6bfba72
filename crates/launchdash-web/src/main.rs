//! Launch records dashboard server
//!
//! Run with: cargo run -p launchdash-web --bin launchdash

use launchdash_charts::Dashboard;
use launchdash_common::{config::CONFIG_FILE, DashboardConfig};
use launchdash_data::Dataset;
use launchdash_web::{router::build_router, state::AppState};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::load()?;

    let default_filter = if config.server.debug { "launchdash=debug,info" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    info!("Starting launchdash v{}", env!("CARGO_PKG_VERSION"));
    // Logged after init; the filter itself comes from the config
    match DashboardConfig::locate_in(Path::new(".")) {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => debug!("{} not found, using defaults", CONFIG_FILE),
    }

    // Startup errors stop here, before anything listens
    let dataset = Dataset::load(&config.data.path, config.data.sites.as_deref())?;
    let dashboard = Dashboard::new(dataset, &config.layout);

    let app = build_router(AppState::new(dashboard, config.server.debug));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(debug = config.server.debug, "Dashboard listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
