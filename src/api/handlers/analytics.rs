//! Handlers for analytics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::{LinkSummaryData, LinkTrafficData};
use crate::api::dto::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Traffic figures for every link.
///
/// # Endpoint
///
/// `GET /analytics/summary`
pub async fn global_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LinkTrafficData>>>, AppError> {
    let summary = state.analytics_service.global_summary().await?;

    Ok(Json(ApiResponse::ok(
        summary.into_iter().map(LinkTrafficData::from).collect(),
    )))
}

/// Click count and the last five distinct visitor IPs of one link.
///
/// Expired links are still summarised.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this code.
pub async fn link_summary_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LinkSummaryData>>, AppError> {
    let summary = state.analytics_service.summary_for(&code).await?;

    Ok(Json(ApiResponse::ok(summary.into())))
}
