//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService, RegistrySettings};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::infrastructure::memory::{InMemoryClickRepository, InMemoryLinkRepository};

/// Link service over type-erased stores.
pub type DynLinkService = LinkService<dyn LinkRepository>;

/// Analytics service over type-erased stores.
pub type DynAnalyticsService = AnalyticsService<dyn LinkRepository, dyn ClickRepository>;

/// Services shared by all requests.
///
/// Clicks are written through the link store and read back through the click
/// store, so both handles must address the same ledger for a click recorded
/// by [`LinkService`] to be visible to [`AnalyticsService`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    pub analytics_service: Arc<DynAnalyticsService>,
    /// Trust proxy headers when resolving the client IP.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
        settings: RegistrySettings,
        behind_proxy: bool,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone(), settings)),
            analytics_service: Arc::new(AnalyticsService::new(link_repository, click_repository)),
            behind_proxy,
        }
    }

    /// State backed by fresh in-memory stores.
    pub fn in_memory(settings: RegistrySettings, behind_proxy: bool) -> Self {
        let clicks = Arc::new(InMemoryClickRepository::new());
        let links = Arc::new(InMemoryLinkRepository::with_ledger(clicks.clone()));

        Self::new(links, clicks, settings, behind_proxy)
    }
}
