//! Repository trait for link records.

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Store of link records keyed by short code.
///
/// Implementations must make [`create`](LinkRepository::create) an
/// insert-if-absent and [`record_click`](LinkRepository::record_click) a
/// single atomic check, increment and ledger append, so that concurrent callers
/// can neither share a code nor lose a click, and the counter never drifts from
/// the ledger.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - `DashMap` store
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link unless its short code is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same code exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by code regardless of its expiration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists every link, newest-created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Hard-deletes a link. Returns `Ok(true)` if a record was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Counts a click on a link that exists and is not expired at
    /// `new_click.clicked_at`, and appends the event to the click ledger.
    ///
    /// Both effects happen together or not at all. Returns `Ok(None)` when no
    /// live link has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors; nothing is recorded.
    async fn record_click(&self, new_click: NewClick) -> Result<Option<Click>, AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
