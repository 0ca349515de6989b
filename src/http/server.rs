//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the news and health routes
//! - Wire up middleware (request ID, tracing, inbound timeout, metrics)
//! - Serve on a listener until the shutdown future resolves

use std::future::Future;
use std::time::Duration;

use axum::{http::Request, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{NewsProxyConfig, PaginationConfig};
use crate::http::news::{self, GNEWS_ROUTE, NEWSAPI_ROUTE};
use crate::http::request::{make_span, MakeRequestUuidV4};
use crate::observability::metrics::track_requests;
use crate::upstream::{ForwardError, Forwarder};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Forwarder,
    pub pagination: PaginationConfig,
}

/// HTTP server for the news proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: NewsProxyConfig) -> Result<Self, ForwardError> {
        let state = AppState {
            forwarder: Forwarder::new(&config)?,
            pagination: config.pagination,
        };

        Ok(Self {
            router: Self::build_router(&config, state),
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &NewsProxyConfig, state: AppState) -> Router {
        Router::new()
            .route(NEWSAPI_ROUTE, get(news::newsapi))
            .route(GNEWS_ROUTE, get(news::gnews))
            .route("/health", get(health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.inbound_secs,
            )))
            .layer(middleware::from_fn(track_requests))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<_>| make_span(request)),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness check. Does not touch the upstream providers.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
