//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::extract::{ClientIp, UserAgent};
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the live link (absent or expired → 404)
/// 2. Atomically bump its counter and append a click event
/// 3. Return `301 Moved Permanently` with the stored URL
///
/// # Errors
///
/// Returns 404 Not Found if the link is absent or expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    UserAgent(user_agent): UserAgent,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    state
        .link_service
        .record_click(&code, &ip, &user_agent)
        .await?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, link.original_url)],
    ))
}
