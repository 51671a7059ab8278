#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum::routing::get;
use axum::Router;
use axum_test::TestServer;
use link_gateway::api::handlers::{health_handler, redirect_handler};
use link_gateway::api::middleware::cache_control;
use link_gateway::application::services::RedirectService;
use link_gateway::domain::allowlist::Allowlist;
use link_gateway::domain::click_event::ClickEvent;
use link_gateway::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;

pub const TEST_DEFAULT_TAG: &str = "test-21";

pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);
    (state_with_sender(Some(tx), false), rx)
}

pub fn create_test_state_without_logging() -> AppState {
    state_with_sender(None, false)
}

pub fn create_test_state_behind_proxy() -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);
    (state_with_sender(Some(tx), true), rx)
}

fn state_with_sender(
    click_sender: Option<mpsc::Sender<ClickEvent>>,
    behind_proxy: bool,
) -> AppState {
    let allowlist = Allowlist::new([
        "www.amazon.in".to_string(),
        "amazon.in".to_string(),
        "amzn.to".to_string(),
    ]);
    let redirect_service = Arc::new(RedirectService::new(
        allowlist,
        TEST_DEFAULT_TAG.to_string(),
    ));

    AppState::new(redirect_service, click_sender, behind_proxy)
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/go", get(redirect_handler))
        .route("/health", get(health_handler))
        .layer(MockConnectInfoLayer)
        .layer(cache_control::layer())
        .with_state(state);

    TestServer::new(app).unwrap()
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
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
