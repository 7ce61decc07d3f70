//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, global_summary_handler, health_handler, link_info_handler,
    link_summary_handler, list_links_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All routes of the service.
///
/// # Endpoints
///
/// - `POST   /shorten`            - Create a short link
/// - `GET    /{code}`             - Redirect and record a click
/// - `GET    /info/{code}`        - Info about a live link
/// - `GET    /api/urls`           - List every link
/// - `DELETE /delete/{code}`      - Hard-delete a link
/// - `GET    /stats/{code}`       - Link with its full click history
/// - `GET    /analytics/summary`  - Traffic figures for every link
/// - `GET    /analytics/{code}`   - Per-link summary
/// - `GET    /health`             - Storage health check
///
/// Static segments win over `{code}`, so a link whose code is `health`
/// cannot be reached through the redirect route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/api/urls", get(list_links_handler))
        .route("/info/{code}", get(link_info_handler))
        .route("/delete/{code}", delete(delete_link_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/analytics/summary", get(global_summary_handler))
        .route("/analytics/{code}", get(link_summary_handler))
        .route("/{code}", get(redirect_handler))
}
