//! Handlers for link lookup, listing and deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::{LinkInfoData, LinkRecord};
use crate::api::dto::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns public info about a live link.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the link is absent or expired.
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LinkInfoData>>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    Ok(Json(ApiResponse::ok(link.into())))
}

/// Lists every link, newest first, expired ones included.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LinkRecord>>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(ApiResponse::ok(
        links.into_iter().map(LinkRecord::from).collect(),
    )))
}

/// Hard-deletes a link. Its click history is kept.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this code.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    if !state.link_service.delete_link(&code).await? {
        return Err(AppError::link_not_found(&code));
    }

    Ok(Json(ApiResponse::message("URL deleted successfully")))
}
