//! Upstream HTTP client with deadlines and error classification.
//!
//! # Responsibilities
//! - Own one pooled `reqwest::Client` shared by all requests
//! - Issue exactly one GET per forward, no retry
//! - Validate 2xx bodies as JSON without re-serializing them
//! - Keep API keys out of logs and error messages

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::IgnoredAny;

use crate::config::{NewsProxyConfig, ProviderConfig, ProvidersConfig};
use crate::observability::metrics;
use crate::upstream::types::{ForwardError, Pagination, Provider, UpstreamBody};
use crate::upstream::url::{build_url, redacted};

/// Forwards pagination hints to the configured news providers.
#[derive(Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    providers: Arc<ProvidersConfig>,
}

impl Forwarder {
    /// Create a forwarder using the timeouts and providers in `config`.
    pub fn new(config: &NewsProxyConfig) -> Result<Self, ForwardError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .user_agent(concat!("news-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ForwardError::Client)?;

        Ok(Self {
            client,
            providers: Arc::new(config.providers.clone()),
        })
    }

    fn settings(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::NewsApi => &self.providers.newsapi,
            Provider::GNews => &self.providers.gnews,
        }
    }

    /// Fetch one page of results from `provider`.
    ///
    /// Non-2xx answers come back as [`ForwardError::Status`] carrying the
    /// upstream body so the caller can relay it.
    pub async fn fetch(
        &self,
        provider: Provider,
        pagination: Pagination,
    ) -> Result<UpstreamBody, ForwardError> {
        let start = Instant::now();
        let result = self.send(provider, pagination).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        metrics::record_upstream(provider.name(), outcome, start);

        match &result {
            Ok(reply) => tracing::info!(
                provider = %provider,
                page = pagination.page,
                page_size = pagination.page_size,
                status = %reply.status,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream request completed"
            ),
            Err(ForwardError::Status { status, .. }) => tracing::warn!(
                provider = %provider,
                status = %status,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream returned error status"
            ),
            Err(e) => tracing::error!(
                provider = %provider,
                error = %e,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream request failed"
            ),
        }

        result
    }

    async fn send(
        &self,
        provider: Provider,
        pagination: Pagination,
    ) -> Result<UpstreamBody, ForwardError> {
        let url = build_url(provider, self.settings(provider), pagination)?;
        tracing::debug!(provider = %provider, url = %redacted(&url), "Forwarding request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ForwardError::from_transport)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(ForwardError::from_transport)?;

        if !status.is_success() {
            return Err(ForwardError::Status { status, body });
        }

        serde_json::from_slice::<IgnoredAny>(&body)?;

        Ok(UpstreamBody { status, body })
    }
}
