//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// ```json
/// { "originalUrl": "https://example.com", "alias": "ex1", "expiresAt": "2026-12-31" }
/// ```
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateLinkRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Caller-chosen short code. An empty string counts as absent.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 20, message = "Alias must be at most 20 characters"))]
    pub alias: Option<String>,

    /// ISO-8601 expiration; parsed by the handler.
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Data returned for a newly created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLinkData {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl From<Link> for CreatedLinkData {
    fn from(link: Link) -> Self {
        Self {
            alias: link.alias().map(str::to_string),
            id: link.id,
            original_url: link.original_url,
            short_url: link.short_url,
            short_code: link.short_code,
            expires_at: link.expires_at,
            created_at: link.created_at,
        }
    }
}
