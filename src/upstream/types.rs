//! Provider identities, pagination and forwarding errors.

use axum::body::Bytes;
use axum::http::StatusCode;
use thiserror::Error;

/// One of the two proxied news-search APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// newsapi.org `/v2/everything`.
    NewsApi,
    /// gnews.io `/api/v4/search`.
    GNews,
}

impl Provider {
    /// Stable identifier for logs and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            Provider::NewsApi => "newsapi",
            Provider::GNews => "gnews",
        }
    }

    /// Query parameter carrying the page size, both inbound and upstream.
    pub fn page_size_param(self) -> &'static str {
        match self {
            Provider::NewsApi => "pageSize",
            Provider::GNews => "max",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved pagination hints, defaults and clamping already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

/// A successful upstream reply.
///
/// `body` holds the exact bytes the provider sent; it is known to parse as JSON.
#[derive(Debug, Clone)]
pub struct UpstreamBody {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Errors that can occur while forwarding to a provider.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The configured base URL could not be combined into a request URL.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] ::url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The upstream did not answer within the request deadline.
    #[error("upstream timed out")]
    Timeout(#[source] reqwest::Error),

    /// Connection or transfer failure.
    #[error("upstream request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned {status}")]
    Status { status: StatusCode, body: Bytes },

    /// The upstream answered 2xx but the body was not JSON.
    #[error("upstream returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ForwardError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ForwardError::InvalidUrl(_) => "invalid_url",
            ForwardError::Client(_) => "client",
            ForwardError::Timeout(_) => "timeout",
            ForwardError::Network(_) => "network",
            ForwardError::Status { .. } => "status",
            ForwardError::Decode(_) => "decode",
        }
    }

    /// Classify a transport error. The URL is stripped because it carries the API key.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            ForwardError::Timeout(err)
        } else {
            ForwardError::Network(err)
        }
    }
}
