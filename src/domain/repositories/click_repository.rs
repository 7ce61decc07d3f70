//! Repository trait for the append-only click ledger.

use std::collections::HashMap;

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only ledger of click events keyed by short code.
///
/// Events are never updated or deleted, and deleting a link does not touch
/// its events. Every list returned by this trait is ordered newest first by
/// `clicked_at`, with ties broken by descending id.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryClickRepository`] - `DashMap` store
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one immutable click event without touching any link counter.
    ///
    /// Redirects go through
    /// [`LinkRepository::record_click`](super::LinkRepository::record_click).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Returns every event recorded for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn events_for(&self, code: &str) -> Result<Vec<Click>, AppError>;

    /// Returns at most `limit` of the most recent events for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn recent_events_for(&self, code: &str, limit: usize) -> Result<Vec<Click>, AppError>;

    /// Returns all events grouped by short code, including orphaned ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn all_events_grouped(&self) -> Result<HashMap<String, Vec<Click>>, AppError>;
}
