//! Dataset summary and health.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use launchdash_data::{PayloadBounds, SiteSummary};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ApiSummary {
    pub records: usize,
    pub total_successes: usize,
    pub bounds: PayloadBounds,
    pub sites: Vec<SiteSummary>,
}

#[derive(Debug, Serialize)]
pub struct ApiHealth {
    pub status: &'static str,
    pub records: usize,
    pub sites: usize,
    pub debug: bool,
    pub started_at: DateTime<Utc>,
}

/// GET /api/summary - Per-site success ratios and payload bounds
pub async fn api_summary(State(state): State<SharedState>) -> Json<ApiSummary> {
    let dataset = state.dashboard.dataset();
    Json(ApiSummary {
        records: dataset.records.len(),
        total_successes: dataset.total_successes(),
        bounds: dataset.bounds,
        sites: dataset.summaries.values().cloned().collect(),
    })
}

/// GET /api/health
pub async fn api_health(State(state): State<SharedState>) -> Json<ApiHealth> {
    let dataset = state.dashboard.dataset();
    Json(ApiHealth {
        status: "ok",
        records: dataset.records.len(),
        sites: dataset.sites.len(),
        debug: state.debug,
        started_at: state.started_at,
    })
}
