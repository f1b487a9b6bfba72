//! Layout and chart recomputation endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use launchdash_charts::{ChartSpec, ControlId, ControlState, LayoutTree, OutputId, PayloadRange, SiteSelection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SharedState;

// === API Types ===

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub changed: ControlId,
    pub state: ControlState,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// Outputs left out here keep their previous chart
    pub updates: BTreeMap<OutputId, ChartSpec>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PieQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub lo: Option<f64>,
    pub hi: Option<f64>,
}

fn selection(site: Option<String>) -> SiteSelection {
    site.map(SiteSelection::from).unwrap_or_default()
}

// === API Endpoints ===

/// GET /api/layout - Declarative layout tree
pub async fn api_layout(State(state): State<SharedState>) -> Json<LayoutTree> {
    Json(state.dashboard.layout().clone())
}

/// POST /api/update - Recompute every chart bound to the changed control
pub async fn api_update(
    State(state): State<SharedState>,
    Json(req): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    debug!(changed = %req.changed, site = %req.state.site, "control changed");
    let updates = state.dashboard.dispatch(req.changed, &req.state);
    Json(UpdateResponse { updates })
}

/// GET /api/charts/pie - Success pie for one site or all sites
pub async fn api_pie(
    State(state): State<SharedState>,
    Query(query): Query<PieQuery>,
) -> Result<Json<ChartSpec>, ApiError> {
    let spec = state.dashboard.pie(&selection(query.site))?;
    Ok(Json(spec))
}

/// GET /api/charts/scatter - Payload vs. outcome; missing bounds default to the data extent
pub async fn api_scatter(
    State(state): State<SharedState>,
    Query(query): Query<ScatterQuery>,
) -> Result<Json<ChartSpec>, ApiError> {
    let bounds = state.dashboard.dataset().bounds;
    let range = PayloadRange::new(query.lo.unwrap_or(bounds.min), query.hi.unwrap_or(bounds.max));
    let spec = state.dashboard.scatter(&selection(query.site), range)?;
    Ok(Json(spec))
}
