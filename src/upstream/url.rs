//! Outbound URL construction.
//!
//! Values are percent-encoded with `%20` for spaces, matching the providers'
//! documented examples; form encoding (`+`) is deliberately not used.

use url::Url;

use crate::config::ProviderConfig;
use crate::upstream::types::{ForwardError, Pagination, Provider};

/// Build the request URL for `provider`, embedding its search term, the
/// pagination hints and the API key.
pub fn build_url(
    provider: Provider,
    settings: &ProviderConfig,
    pagination: Pagination,
) -> Result<Url, ForwardError> {
    let page = pagination.page.to_string();
    let page_size = pagination.page_size.to_string();
    let key = settings.api_key.expose();

    let pairs: Vec<(&str, &str)> = match provider {
        Provider::NewsApi => vec![
            ("q", settings.query.as_str()),
            ("pageSize", page_size.as_str()),
            ("page", page.as_str()),
            ("sortBy", "publishedAt"),
            ("apiKey", key),
        ],
        Provider::GNews => vec![
            ("q", settings.query.as_str()),
            ("lang", "en"),
            ("max", page_size.as_str()),
            ("page", page.as_str()),
            ("token", key),
        ],
    };

    let query = pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let mut url = Url::parse(&settings.base_url)?;
    url.set_query(Some(&query));
    Ok(url)
}

/// Render `url` for logging with credential parameters masked.
pub fn redacted(url: &Url) -> String {
    let mut base = url.clone();
    base.set_query(None);
    let query = url
        .query()
        .unwrap_or_default()
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name @ ("apiKey" | "token"), _)) => format!("{name}=<redacted>"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}?{query}")
}
