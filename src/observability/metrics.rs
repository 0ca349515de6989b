//! Metrics collection and exposition.
//!
//! # Metrics
//! - `news_proxy_requests_total` (counter): inbound requests by route, status
//! - `news_proxy_request_duration_seconds` (histogram): inbound latency by route
//! - `news_proxy_upstream_requests_total` (counter): forwards by provider, outcome
//! - `news_proxy_upstream_duration_seconds` (histogram): upstream latency by provider

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Route label for requests no route matched, keeping label cardinality bounded.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Middleware recording every inbound response, whichever layer produced it.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

    let response = next.run(request).await;
    record_request(route, response.status().as_u16(), start);
    response
}

/// Record one handled inbound request.
pub fn record_request(route: String, status: u16, start: Instant) {
    metrics::counter!(
        "news_proxy_requests_total",
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("news_proxy_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record one outbound call and how it ended.
pub fn record_upstream(provider: &'static str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "news_proxy_upstream_requests_total",
        "provider" => provider,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("news_proxy_upstream_duration_seconds", "provider" => provider)
        .record(start.elapsed().as_secs_f64());
}
