//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::NewsProxyConfig;
use crate::config::secret::ApiKey;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the NewsAPI key.
pub const NEWSAPI_KEY_ENV: &str = "NEWSAPI_KEY";
/// Environment variable holding the GNews token.
pub const GNEWS_KEY_ENV: &str = "GNEWS_KEY";
/// Environment variable overriding the listener bind address.
pub const BIND_ENV: &str = "NEWS_PROXY_BIND";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, override from the process environment, and validate configuration.
///
/// Without a path the built-in defaults are used, so keys must come from
/// `NEWSAPI_KEY` and `GNEWS_KEY`.
pub fn load_config(path: Option<&Path>) -> Result<NewsProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => NewsProxyConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a TOML document into a config without validating it.
pub fn parse_config(content: &str) -> Result<NewsProxyConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Overlay values found through `lookup` onto `config`.
///
/// Blank values are ignored so an exported-but-empty variable does not wipe a
/// key set in the file.
pub fn apply_env_overrides<F>(config: &mut NewsProxyConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(key) = lookup(NEWSAPI_KEY_ENV) {
        config.providers.newsapi.api_key = ApiKey::new(key);
    }
    if let Some(key) = lookup(GNEWS_KEY_ENV) {
        config.providers.gnews.api_key = ApiKey::new(key);
    }
    if let Some(bind) = lookup(BIND_ENV) {
        config.listener.bind_address = bind;
    }
}
