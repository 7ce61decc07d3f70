//! DTOs for detailed link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Click, DetailedInfo, Link};

/// A link with its full click history.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: StatsLink,
    pub statistics: Vec<ClickInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsLink {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

/// A single click, newest first in [`StatsResponse::statistics`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    pub clicked_at: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: String,
}

impl From<Link> for StatsLink {
    fn from(link: Link) -> Self {
        Self {
            original_url: link.original_url,
            short_code: link.short_code,
            created_at: link.created_at,
            click_count: link.click_count,
        }
    }
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            clicked_at: click.clicked_at,
            ip_address: click.ip_address,
            user_agent: click.user_agent,
        }
    }
}

impl From<DetailedInfo> for StatsResponse {
    fn from(info: DetailedInfo) -> Self {
        Self {
            url: info.link.into(),
            statistics: info.statistics.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
