#![allow(dead_code)]

use axum::{Router, extract::ConnectInfo};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

use linktrail::api::routes::routes;
use linktrail::application::services::RegistrySettings;
use linktrail::domain::entities::{Click, Link, NewClick, NewLink};
use linktrail::domain::repositories::{ClickRepository, LinkRepository};
use linktrail::infrastructure::memory::{InMemoryClickRepository, InMemoryLinkRepository};
use linktrail::state::AppState;

pub const BASE_URL: &str = "http://short.test";
pub const PEER_IP: &str = "127.0.0.1";

/// State plus direct handles to the stores behind it.
pub struct TestContext {
    pub state: AppState,
    pub links: Arc<InMemoryLinkRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
}

pub fn test_settings() -> RegistrySettings {
    RegistrySettings {
        base_url: BASE_URL.to_string(),
        ..RegistrySettings::default()
    }
}

pub fn test_context() -> TestContext {
    test_context_with_proxy(false)
}

pub fn test_context_with_proxy(behind_proxy: bool) -> TestContext {
    let clicks = Arc::new(InMemoryClickRepository::new());
    let links = Arc::new(InMemoryLinkRepository::with_ledger(clicks.clone()));

    let state = AppState::new(links.clone(), clicks.clone(), test_settings(), behind_proxy);

    TestContext {
        state,
        links,
        clicks,
    }
}

/// All API routes over `ctx`, with a fixed peer address.
pub fn test_server(ctx: &TestContext) -> TestServer {
    let app: Router = routes()
        .layer(MockConnectInfoLayer)
        .with_state(ctx.state.clone());

    TestServer::new(app).unwrap()
}

/// Inserts a link directly into the store.
pub async fn seed_link(
    ctx: &TestContext,
    code: &str,
    url: &str,
    expires_at: Option<DateTime<Utc>>,
) -> Link {
    seed_link_at(ctx, code, url, expires_at, Utc::now()).await
}

pub async fn seed_link_at(
    ctx: &TestContext,
    code: &str,
    url: &str,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
) -> Link {
    ctx.links
        .create(NewLink {
            original_url: url.to_string(),
            short_code: code.to_string(),
            is_alias: true,
            short_url: format!("{BASE_URL}/{code}"),
            expires_at,
            created_at,
        })
        .await
        .unwrap()
}

/// Appends a click event directly to the ledger, bypassing the counter.
pub async fn seed_click(ctx: &TestContext, code: &str, ip: &str, at: DateTime<Utc>) -> Click {
    ctx.clicks
        .append(NewClick::new(code, ip, "test-agent", at))
        .await
        .unwrap()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{PEER_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
