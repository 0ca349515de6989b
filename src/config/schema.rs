//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::secret::ApiKey;

/// Root configuration for the news proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NewsProxyConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Pagination defaults and bounds.
    pub pagination: PaginationConfig,

    /// Upstream news providers.
    pub providers: ProvidersConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Timeout configuration for inbound and outbound calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upstream connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total upstream call deadline in seconds.
    pub request_secs: u64,

    /// Deadline for handling one inbound request in seconds.
    pub inbound_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 10,
            inbound_secs: 30,
        }
    }
}

/// Pagination defaults and the clamp applied to client hints.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page: u32,
    pub default_page_size: u32,
    pub max_page: u32,
    /// Both providers cap a single page at 100 articles.
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 3,
            max_page: 1000,
            max_page_size: 100,
        }
    }
}

/// Settings for both upstream providers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub newsapi: ProviderConfig,
    pub gnews: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            newsapi: ProviderConfig {
                base_url: "https://newsapi.org/v2/everything".to_string(),
                api_key: ApiKey::default(),
                query: "artificial intelligence".to_string(),
            },
            gnews: ProviderConfig {
                base_url: "https://gnews.io/api/v4/search".to_string(),
                api_key: ApiKey::default(),
                query: "AI".to_string(),
            },
        }
    }
}

/// A single upstream news-search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Search endpoint, without a query string.
    pub base_url: String,

    /// Credential injected into every outbound request.
    #[serde(default)]
    pub api_key: ApiKey,

    /// Fixed search term sent as `q`.
    pub query: String,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Enable the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Prometheus exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
