//! In-memory implementation of the click ledger.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// `DashMap`-backed click ledger, one event vector per short code.
#[derive(Debug)]
pub struct InMemoryClickRepository {
    events: DashMap<String, Vec<Click>>,
    next_id: AtomicI64,
}

impl InMemoryClickRepository {
    pub fn new() -> Self {
        Self {
            events: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Appends an event without awaiting, for callers holding a lock.
    pub(crate) fn push(&self, new_click: NewClick) -> Click {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let click = Click::from_new(id, new_click);

        self.events
            .entry(click.short_code.clone())
            .or_default()
            .push(click.clone());

        click
    }
}

impl Default for InMemoryClickRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest first, ties by descending id.
fn newest_first(mut clicks: Vec<Click>) -> Vec<Click> {
    clicks.sort_by(|a, b| {
        b.clicked_at
            .cmp(&a.clicked_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    clicks
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError> {
        Ok(self.push(new_click))
    }

    async fn events_for(&self, code: &str) -> Result<Vec<Click>, AppError> {
        let clicks = self
            .events
            .get(code)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        Ok(newest_first(clicks))
    }

    async fn recent_events_for(&self, code: &str, limit: usize) -> Result<Vec<Click>, AppError> {
        let mut clicks = self.events_for(code).await?;
        clicks.truncate(limit);
        Ok(clicks)
    }

    async fn all_events_grouped(&self) -> Result<HashMap<String, Vec<Click>>, AppError> {
        Ok(self
            .events
            .iter()
            .map(|entry| (entry.key().clone(), newest_first(entry.value().clone())))
            .collect())
    }
}
