//! DTOs for analytics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{LinkSummary, LinkTraffic};

/// Per-link summary with the most recent distinct visitor IPs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummaryData {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,

    #[serde(rename = "lastFiveIPs")]
    pub last_five_ips: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl From<LinkSummary> for LinkSummaryData {
    fn from(summary: LinkSummary) -> Self {
        Self {
            short_code: summary.short_code,
            original_url: summary.original_url,
            click_count: summary.click_count,
            last_five_ips: summary.last_five_unique_ips,
            created_at: summary.created_at,
        }
    }
}

/// One row of the global summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTrafficData {
    pub short_code: String,
    pub original_url: String,
    pub total_clicks: i64,
    pub unique_visitors: usize,
    pub clicks_last_24h: usize,
    pub created_at: DateTime<Utc>,
}

impl From<LinkTraffic> for LinkTrafficData {
    fn from(traffic: LinkTraffic) -> Self {
        Self {
            short_code: traffic.short_code,
            original_url: traffic.original_url,
            total_clicks: traffic.total_clicks,
            unique_visitors: traffic.unique_visitors,
            clicks_last_24h: traffic.clicks_last_24h,
            created_at: traffic.created_at,
        }
    }
}
