//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::dashboard,
    charts::{api_layout, api_update, api_pie, api_scatter},
    system::{api_summary, api_health},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))

        // Layout and recomputation
        .route("/api/layout",         get(api_layout))
        .route("/api/update",         post(api_update))
        .route("/api/charts/pie",     get(api_pie))
        .route("/api/charts/scatter", get(api_scatter))

        // Dataset
        .route("/api/summary", get(api_summary))
        .route("/api/health",  get(api_health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
