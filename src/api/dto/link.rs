//! DTOs for link lookup and listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Public info about a live link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfoData {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl From<Link> for LinkInfoData {
    fn from(link: Link) -> Self {
        Self {
            original_url: link.original_url,
            created_at: link.created_at,
            click_count: link.click_count,
        }
    }
}

/// Full link record as listed by `GET /api/urls`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub alias: Option<String>,
    pub click_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkRecord {
    fn from(link: Link) -> Self {
        Self {
            alias: link.alias().map(str::to_string),
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            short_url: link.short_url,
            click_count: link.click_count,
            expires_at: link.expires_at,
            created_at: link.created_at,
        }
    }
}
