//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::response::ApiResponse;
use crate::api::dto::shorten::{CreateLinkRequest, CreatedLinkData};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::timestamp::parse_expires_at;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "alias": "ex1",                     // optional
///   "expiresAt": "2026-12-31T23:59:59Z" // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "originalUrl": "https://example.com",
///     "shortUrl": "http://localhost:3000/ex1",
///     "shortCode": "ex1",
///     "alias": "ex1",
///     "createdAt": "2026-01-01T00:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, an invalid URL, alias or
/// expiration. Returns 409 Conflict if the alias is already in use.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedLinkData>>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let expires_at = payload
        .expires_at
        .as_deref()
        .map(parse_expires_at)
        .transpose()?;

    let link = state
        .link_service
        .create_short_link(payload.original_url, payload.alias, expires_at)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(link.into()))))
}
