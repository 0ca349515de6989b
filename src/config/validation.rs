//! Configuration validation.
//!
//! Returns all validation errors, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{NewsProxyConfig, ProviderConfig};

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("timeouts.inbound_secs ({inbound}) must exceed connect_secs + request_secs ({outbound})")]
    InboundTimeoutTooShort { inbound: u64, outbound: u64 },

    #[error("{field} ({value}) must lie within 1..={max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Check a configuration before it is accepted into the system.
pub fn validate_config(config: &NewsProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(
        &mut errors,
        "listener.bind_address",
        &config.listener.bind_address,
    );
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    let timeouts = &config.timeouts;
    for (field, value) in [
        ("timeouts.connect_secs", timeouts.connect_secs),
        ("timeouts.request_secs", timeouts.request_secs),
        ("timeouts.inbound_secs", timeouts.inbound_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::Zero { field });
        }
    }
    // The upstream deadline fires before the inbound one.
    let outbound = timeouts.connect_secs.saturating_add(timeouts.request_secs);
    if timeouts.inbound_secs <= outbound {
        errors.push(ValidationError::InboundTimeoutTooShort {
            inbound: timeouts.inbound_secs,
            outbound,
        });
    }

    let pagination = &config.pagination;
    if pagination.max_page == 0 {
        errors.push(ValidationError::Zero {
            field: "pagination.max_page",
        });
    } else {
        check_range(
            &mut errors,
            "pagination.default_page",
            pagination.default_page,
            pagination.max_page,
        );
    }
    if pagination.max_page_size == 0 {
        errors.push(ValidationError::Zero {
            field: "pagination.max_page_size",
        });
    } else {
        check_range(
            &mut errors,
            "pagination.default_page_size",
            pagination.default_page_size,
            pagination.max_page_size,
        );
    }

    check_provider(
        &mut errors,
        [
            "providers.newsapi.base_url",
            "providers.newsapi.api_key",
            "providers.newsapi.query",
        ],
        &config.providers.newsapi,
    );
    check_provider(
        &mut errors,
        [
            "providers.gnews.base_url",
            "providers.gnews.api_key",
            "providers.gnews.query",
        ],
        &config.providers.gnews,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_range(errors: &mut Vec<ValidationError>, field: &'static str, value: u32, max: u32) {
    if value == 0 || value > max {
        errors.push(ValidationError::OutOfRange { field, value, max });
    }
}

fn check_provider(
    errors: &mut Vec<ValidationError>,
    [url_field, key_field, query_field]: [&'static str; 3],
    provider: &ProviderConfig,
) {
    match Url::parse(&provider.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidUrl {
            field: url_field,
            value: provider.base_url.clone(),
        }),
    }
    if provider.api_key.is_empty() {
        errors.push(ValidationError::Empty { field: key_field });
    }
    if provider.query.trim().is_empty() {
        errors.push(ValidationError::Empty { field: query_field });
    }
}
