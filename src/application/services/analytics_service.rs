//! Analytics derived from the link registry and the click ledger.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::entities::{Click, DetailedInfo, LinkSummary, LinkTraffic};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Number of most recent events scanned for the unique IP list.
pub const RECENT_EVENTS_WINDOW: usize = 20;

/// Maximum number of IPs in a per-link summary.
pub const UNIQUE_IPS_LIMIT: usize = 5;

/// Service for read-only analytics over links and their clicks.
///
/// Nothing here is cached: every call reads the stores and recomputes.
pub struct AnalyticsService<L: LinkRepository + ?Sized, C: ClickRepository + ?Sized> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
}

impl<L: LinkRepository + ?Sized, C: ClickRepository + ?Sized> AnalyticsService<L, C> {
    /// Creates a new analytics service.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Summarises one link: its stored counter and the last distinct visitors.
    ///
    /// Unlike [`Self::detailed_info`], an expired link is still summarised.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn summary_for(&self, code: &str) -> Result<LinkSummary, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })?;

        let recent = self
            .click_repository
            .recent_events_for(code, RECENT_EVENTS_WINDOW)
            .await?;

        Ok(LinkSummary {
            last_five_unique_ips: last_unique_ips(&recent, UNIQUE_IPS_LIMIT),
            short_code: link.short_code,
            original_url: link.original_url,
            click_count: link.click_count,
            created_at: link.created_at,
        })
    }

    /// Traffic figures for every link, in registry listing order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn global_summary(&self) -> Result<Vec<LinkTraffic>, AppError> {
        let links = self.link_repository.list().await?;
        let mut events = self.click_repository.all_events_grouped().await?;
        let since = Utc::now() - Duration::hours(24);

        Ok(links
            .into_iter()
            .map(|link| {
                let clicks = events.remove(&link.short_code).unwrap_or_default();

                LinkTraffic {
                    unique_visitors: count_unique_visitors(&clicks),
                    clicks_last_24h: count_since(&clicks, since),
                    short_code: link.short_code,
                    original_url: link.original_url,
                    total_clicks: link.click_count,
                    created_at: link.created_at,
                }
            })
            .collect())
    }

    /// A live link together with its full click history, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link is absent or expired.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn detailed_info(&self, code: &str) -> Result<DetailedInfo, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .filter(|link| !link.is_expired())
            .ok_or_else(|| AppError::link_not_found(code))?;

        let statistics = self.click_repository.events_for(code).await?;

        Ok(DetailedInfo { link, statistics })
    }
}

/// Collects the first occurrence of each IP from `clicks`, in order, up to
/// `limit` addresses.
///
/// `clicks` is expected newest first, so the result is the most recent
/// distinct visitors.
pub fn last_unique_ips(clicks: &[Click], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();

    clicks
        .iter()
        .filter(|click| seen.insert(click.ip_address.as_str()))
        .take(limit)
        .map(|click| click.ip_address.clone())
        .collect()
}

/// Number of distinct IP addresses among `clicks`.
pub fn count_unique_visitors(clicks: &[Click]) -> usize {
    clicks
        .iter()
        .map(|click| click.ip_address.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Number of clicks at or after `since`.
pub fn count_since(clicks: &[Click], since: DateTime<Utc>) -> usize {
    clicks.iter().filter(|click| click.clicked_at >= since).count()
}
