//! Handler for detailed link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::response::ApiResponse;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a live link with its full click history, newest first.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "url": {
///       "originalUrl": "https://example.com",
///       "shortCode": "ex1",
///       "createdAt": "2026-01-01T00:00:00Z",
///       "clickCount": 1
///     },
///     "statistics": [
///       { "clickedAt": "2026-01-01T00:05:00Z", "ipAddress": "1.2.3.4", "userAgent": "curl/8.0" }
///     ]
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the link is absent or expired.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StatsResponse>>, AppError> {
    let info = state.analytics_service.detailed_info(&code).await?;

    Ok(Json(ApiResponse::ok(info.into())))
}
