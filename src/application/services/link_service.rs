//! Link registry: creation, lookup, click recording and deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_alias};
use crate::utils::url_validator::validate_original_url;

/// Tunables for code allocation and short URL construction.
#[derive(Debug, Clone)]
pub struct RegistrySettings {
    /// Prefix of every short URL, e.g. `https://s.example.com`.
    pub base_url: String,
    /// Length of generated codes.
    pub code_length: usize,
    /// How many generated codes are tried before creation gives up.
    pub max_code_attempts: usize,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            max_code_attempts: 10,
        }
    }
}

/// Service owning the link registry.
///
/// Combines code allocation with the link store. Clicks on live links are
/// handed to the store, which counts them and writes the click ledger.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    settings: RegistrySettings,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, settings: RegistrySettings) -> Self {
        Self {
            link_repository,
            settings,
        }
    }

    /// Creates a short link.
    ///
    /// # Code Allocation
    ///
    /// - If `alias` is provided, it is validated and becomes the short code
    /// - Otherwise a random code is generated; on collision another one is
    ///   drawn, up to `max_code_attempts` times
    ///
    /// An empty alias counts as no alias. The URL is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the alias is invalid.
    /// Returns [`AppError::Conflict`] if the alias is already in use.
    /// Returns [`AppError::Internal`] if no free code was found.
    pub async fn create_short_link(
        &self,
        original_url: String,
        alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        validate_original_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let link = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => self.create_aliased(original_url, alias, expires_at).await?,
            None => self.create_generated(original_url, expires_at).await?,
        };

        info!(code = %link.short_code, alias = link.is_alias, "Short link created");

        Ok(link)
    }

    async fn create_aliased(
        &self,
        original_url: String,
        alias: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        validate_alias(&alias)?;

        let new_link = self.new_link(original_url, alias.clone(), true, expires_at);

        match self.link_repository.create(new_link).await {
            Err(AppError::Conflict { .. }) => Err(AppError::alias_in_use(&alias)),
            other => other,
        }
    }

    async fn create_generated(
        &self,
        original_url: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        for attempt in 1..=self.settings.max_code_attempts {
            let code = generate_code(self.settings.code_length)?;
            let new_link = self.new_link(original_url.clone(), code, false, expires_at);

            match self.link_repository.create(new_link).await {
                Err(AppError::Conflict { details, .. }) => {
                    debug!(attempt, %details, "Generated code collided, retrying");
                }
                other => return other,
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({
                "reason": "Too many collisions",
                "attempts": self.settings.max_code_attempts,
            }),
        ))
    }

    fn new_link(
        &self,
        original_url: String,
        short_code: String,
        is_alias: bool,
        expires_at: Option<DateTime<Utc>>,
    ) -> NewLink {
        NewLink {
            short_url: self.short_url_for(&short_code),
            original_url,
            short_code,
            is_alias,
            expires_at,
            created_at: Utc::now(),
        }
    }

    /// Returns the link for `code` unless it is absent or expired.
    ///
    /// Expired links are not removed; they are only hidden.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_live_link(&self, code: &str) -> Result<Option<Link>, AppError> {
        let now = Utc::now();

        Ok(self
            .link_repository
            .find_by_code(code)
            .await?
            .filter(|link| !link.is_expired_at(now)))
    }

    /// Like [`Self::find_live_link`], but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link is absent or expired.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.find_live_link(code)
            .await?
            .ok_or_else(|| AppError::link_not_found(code))
    }

    /// Records one click on a live link.
    ///
    /// Counting and appending the ledger event is one store operation, so
    /// concurrent clicks never lose an update and a failed write leaves
    /// neither the counter nor the ledger changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link is absent or expired.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn record_click(
        &self,
        code: &str,
        ip_address: &str,
        user_agent: &str,
    ) -> Result<Click, AppError> {
        let click = self
            .link_repository
            .record_click(NewClick::new(code, ip_address, user_agent, Utc::now()))
            .await?
            .ok_or_else(|| AppError::link_not_found(code))?;

        debug!(code, ip = ip_address, "Click recorded");

        Ok(click)
    }

    /// Hard-deletes a link, expired or not. Click history is kept.
    ///
    /// Returns `Ok(false)` if no link had this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_link(&self, code: &str) -> Result<bool, AppError> {
        let deleted = self.link_repository.delete(code).await?;

        if deleted {
            info!(code, "Short link deleted");
        }

        Ok(deleted)
    }

    /// Lists every link, newest-created first, including expired ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Checks that the link store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Constructs the canonical short URL for a code.
    pub fn short_url_for(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Duration;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service(link_repo: MockLinkRepository) -> LinkService<MockLinkRepository> {
        LinkService::new(
            Arc::new(link_repo),
            RegistrySettings {
                base_url: "https://s.example.com/".to_string(),
                ..RegistrySettings::default()
            },
        )
    }

    fn stored(new_link: NewLink) -> Result<Link, AppError> {
        Ok(Link::from_new(1, new_link))
    }

    fn test_link(code: &str, expires_at: Option<DateTime<Utc>>) -> Link {
        Link {
            id: 1,
            original_url: "https://example.com".to_string(),
            short_code: code.to_string(),
            is_alias: false,
            short_url: format!("https://s.example.com/{code}"),
            click_count: 0,
            expires_at,
            created_at: Utc::now(),
        }
    }

    fn conflict() -> AppError {
        AppError::conflict("Unique constraint violation", json!({}))
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .withf(|new_link| {
                new_link.short_code.len() == 8
                    && !new_link.is_alias
                    && new_link.short_url == format!("https://s.example.com/{}", new_link.short_code)
            })
            .times(1)
            .returning(stored);

        let service = service(link_repo);

        let link = service
            .create_short_link("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.click_count, 0);
        assert!(link.alias().is_none());
    }

    #[tokio::test]
    async fn test_create_keeps_url_verbatim() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .withf(|new_link| new_link.original_url == "https://EXAMPLE.com:443/Path#frag")
            .times(1)
            .returning(stored);

        let service = service(link_repo);

        let result = service
            .create_short_link("https://EXAMPLE.com:443/Path#frag".to_string(), None, None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_with_alias() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .withf(|new_link| new_link.short_code == "ex1" && new_link.is_alias)
            .times(1)
            .returning(stored);

        let service = service(link_repo);

        let link = service
            .create_short_link(
                "https://example.com".to_string(),
                Some("ex1".to_string()),
                None,
            )
            .await
            .unwrap();

        assert_eq!(link.short_code, "ex1");
        assert_eq!(link.alias(), Some("ex1"));
        assert_eq!(link.short_url, "https://s.example.com/ex1");
    }

    #[tokio::test]
    async fn test_create_with_empty_alias_generates_code() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .withf(|new_link| !new_link.is_alias && new_link.short_code.len() == 8)
            .times(1)
            .returning(stored);

        let service = service(link_repo);

        let result = service
            .create_short_link("https://example.com".to_string(), Some(String::new()), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_alias_in_use() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(conflict()));

        let service = service(link_repo);

        let err = service
            .create_short_link(
                "https://example.com".to_string(),
                Some("taken".to_string()),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "Alias is already in use");
    }

    #[tokio::test]
    async fn test_create_invalid_alias_never_touches_store() {
        let mut link_repo = MockLinkRepository::new();
        link_repo.expect_create().times(0);

        let service = service(link_repo);

        let err = service
            .create_short_link(
                "https://example.com".to_string(),
                Some("bad@alias".to_string()),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_invalid_url() {
        let mut link_repo = MockLinkRepository::new();
        link_repo.expect_create().times(0);

        let service = service(link_repo);

        let result = service
            .create_short_link("not-a-url".to_string(), None, None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_retries_on_collision() {
        let mut link_repo = MockLinkRepository::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        link_repo.expect_create().times(3).returning(move |new_link| {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(conflict())
            } else {
                stored(new_link)
            }
        });

        let service = service(link_repo);

        let result = service
            .create_short_link("https://example.com".to_string(), None, None)
            .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_create_gives_up_after_max_attempts() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_create()
            .times(10)
            .returning(|_| Err(conflict()));

        let service = service(link_repo);

        let err = service
            .create_short_link("https://example.com".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains("unique code"));
    }

    #[tokio::test]
    async fn test_create_stores_expiration() {
        let mut link_repo = MockLinkRepository::new();
        let expires_at = Utc::now() + Duration::days(1);

        link_repo
            .expect_create()
            .withf(move |new_link| new_link.expires_at == Some(expires_at))
            .times(1)
            .returning(stored);

        let service = service(link_repo);

        let link = service
            .create_short_link("https://example.com".to_string(), None, Some(expires_at))
            .await
            .unwrap();

        assert_eq!(link.expires_at, Some(expires_at));
    }

    #[tokio::test]
    async fn test_find_live_link_hides_expired() {
        let mut link_repo = MockLinkRepository::new();
        let expired = test_link("old", Some(Utc::now() - Duration::minutes(5)));

        link_repo
            .expect_find_by_code()
            .withf(|code| code == "old")
            .times(1)
            .returning(move |_| Ok(Some(expired.clone())));

        let service = service(link_repo);

        assert!(service.find_live_link("old").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_link_by_code_not_found() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(link_repo);

        let err = service.get_link_by_code("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_click_appends_event() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_record_click()
            .withf(|new_click| {
                new_click.short_code == "ex1"
                    && new_click.ip_address == "1.2.3.4"
                    && new_click.user_agent == "ua"
            })
            .times(1)
            .returning(|new_click| Ok(Some(Click::from_new(1, new_click))));

        let service = service(link_repo);

        let click = service.record_click("ex1", "1.2.3.4", "ua").await.unwrap();
        assert_eq!(click.short_code, "ex1");
    }

    #[tokio::test]
    async fn test_record_click_on_missing_link() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_record_click()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(link_repo);

        let err = service.record_click("gone", "1.2.3.4", "").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_click_store_failure() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_record_click()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = service(link_repo);

        let err = service.record_click("ex1", "1.2.3.4", "").await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_delete_link() {
        let mut link_repo = MockLinkRepository::new();

        link_repo
            .expect_delete()
            .withf(|code| code == "ex1")
            .times(1)
            .returning(|_| Ok(true));

        let service = service(link_repo);

        assert!(service.delete_link("ex1").await.unwrap());
    }

    #[test]
    fn test_short_url_for_trims_trailing_slash() {
        let service = service(MockLinkRepository::new());
        assert_eq!(service.short_url_for("abc"), "https://s.example.com/abc");
    }
}
