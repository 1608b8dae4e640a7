//! Axum route handlers for the admin dashboard.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::dashboard::model::DashboardViewModel;
use crate::dashboard::transform_dashboard_data;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Overrides the configured recent-activity limit.
    pub limit: Option<usize>,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardViewModel>, AppError> {
    let snapshot = state.source.snapshot().await?;
    let limit = query.limit.unwrap_or(state.config.recent_activity_limit);

    Ok(Json(transform_dashboard_data(
        &snapshot.projects,
        &snapshot.skills,
        limit,
    )))
}
