//! In-memory implementation of the link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use super::InMemoryClickRepository;
use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// `DashMap`-backed link store.
///
/// Creation goes through the map's entry API. A click is counted and written
/// to the ledger under the link's shard write lock, so the pair is atomic per
/// code.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
    ledger: Arc<InMemoryClickRepository>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    /// Store with a private click ledger.
    pub fn new() -> Self {
        Self::with_ledger(Arc::new(InMemoryClickRepository::new()))
    }

    /// Store that records clicks into `ledger`.
    ///
    /// Pass the same ledger to the analytics side so it sees every click.
    pub fn with_ledger(ledger: Arc<InMemoryClickRepository>) -> Self {
        Self {
            links: DashMap::new(),
            ledger,
            next_id: AtomicI64::new(1),
        }
    }

    /// The ledger clicks are recorded into.
    pub fn ledger(&self) -> Arc<InMemoryClickRepository> {
        self.ledger.clone()
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.short_code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "code": new_link.short_code }),
            )),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let link = Link::from_new(id, new_link);
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(links)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.remove(code).is_some())
    }

    async fn record_click(&self, new_click: NewClick) -> Result<Option<Click>, AppError> {
        match self.links.get_mut(&new_click.short_code) {
            Some(mut link) if !link.is_expired_at(new_click.clicked_at) => {
                let click = self.ledger.push(new_click);
                link.click_count += 1;
                Ok(Some(click))
            }
            _ => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::ClickRepository;
    use chrono::{DateTime, Duration, Utc};

    fn new_link(code: &str, expires_at: Option<DateTime<Utc>>) -> NewLink {
        NewLink {
            original_url: "https://example.com".to_string(),
            short_code: code.to_string(),
            is_alias: false,
            short_url: format!("http://localhost:3000/{code}"),
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_taken_code() {
        let repo = InMemoryLinkRepository::new();

        let first = repo.create(new_link("abc", None)).await.unwrap();
        assert_eq!(first.id, 1);

        let err = repo.create(new_link("abc", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_record_click_skips_expired() {
        let repo = InMemoryLinkRepository::new();
        let now = Utc::now();

        repo.create(new_link("live", None)).await.unwrap();
        repo.create(new_link("old", Some(now - Duration::seconds(1))))
            .await
            .unwrap();

        let click = repo
            .record_click(NewClick::new("live", "1.2.3.4", "ua", now))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(click.ip_address, "1.2.3.4");

        assert!(repo
            .record_click(NewClick::new("old", "1.2.3.4", "ua", now))
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .record_click(NewClick::new("missing", "1.2.3.4", "ua", now))
            .await
            .unwrap()
            .is_none());

        let live = repo.find_by_code("live").await.unwrap().unwrap();
        assert_eq!(live.click_count, 1);

        let ledger = repo.ledger();
        assert_eq!(ledger.events_for("live").await.unwrap().len(), 1);
        assert!(ledger.events_for("old").await.unwrap().is_empty());
        assert!(ledger.events_for("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_click_writes_shared_ledger() {
        let ledger = Arc::new(InMemoryClickRepository::new());
        let repo = InMemoryLinkRepository::with_ledger(ledger.clone());

        repo.create(new_link("abc", None)).await.unwrap();
        repo.record_click(NewClick::new("abc", "ip", "", Utc::now()))
            .await
            .unwrap();

        assert_eq!(ledger.events_for("abc").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deleted_code_is_reusable() {
        let repo = InMemoryLinkRepository::new();

        repo.create(new_link("abc", None)).await.unwrap();
        assert!(repo.delete("abc").await.unwrap());
        assert!(!repo.delete("abc").await.unwrap());

        let again = repo.create(new_link("abc", None)).await.unwrap();
        assert_eq!(again.id, 2);
    }
}
