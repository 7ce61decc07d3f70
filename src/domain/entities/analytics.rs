//! Derived analytics views over links and their click history.

use chrono::{DateTime, Utc};

use super::{Click, Link};

/// Per-link summary with the most recent distinct visitor IPs.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSummary {
    pub short_code: String,
    pub original_url: String,
    /// The stored counter, not the ledger length.
    pub click_count: i64,
    /// Distinct IPs from the recent-events window, newest first.
    pub last_five_unique_ips: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// One row of the global traffic summary.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkTraffic {
    pub short_code: String,
    pub original_url: String,
    pub total_clicks: i64,
    pub unique_visitors: usize,
    pub clicks_last_24h: usize,
    pub created_at: DateTime<Utc>,
}

/// A live link together with its full click history, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedInfo {
    pub link: Link,
    pub statistics: Vec<Click>,
}
