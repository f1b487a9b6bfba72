//! Shared application state for the web server.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use launchdash_charts::Dashboard;

/// Shared state injected into every Axum handler. Never mutated after startup.
pub struct AppState {
    pub dashboard: Dashboard,
    pub started_at: DateTime<Utc>,
    pub debug: bool,
}

impl AppState {
    pub fn new(dashboard: Dashboard, debug: bool) -> Self {
        Self { dashboard, started_at: Utc::now(), debug }
    }
}

pub type SharedState = Arc<AppState>;
