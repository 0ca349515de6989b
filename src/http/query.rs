//! Pagination query parameters.
//!
//! Hints arrive as text. Missing or blank values take the configured default,
//! `0` becomes `1`, and anything above the configured maximum is clamped.
//! Text that is not a non-negative integer is rejected before any upstream call.
//! When a parameter repeats, the first occurrence wins.

use thiserror::Error;

use crate::config::PaginationConfig;
use crate::upstream::Pagination;

/// Raw query pairs, in the order the client sent them.
pub type QueryPairs = Vec<(String, String)>;

/// First value of `name`. Later repeats are ignored.
pub fn first_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// A pagination hint that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for `{parameter}`: expected a positive integer, got {value:?}")]
pub struct QueryError {
    pub parameter: &'static str,
    pub value: String,
}

/// Resolve both hints against `bounds`.
pub fn resolve_pagination(
    page: Option<&str>,
    page_size: Option<&str>,
    page_size_param: &'static str,
    bounds: &PaginationConfig,
) -> Result<Pagination, QueryError> {
    Ok(Pagination {
        page: resolve("page", page, bounds.default_page, bounds.max_page)?,
        page_size: resolve(
            page_size_param,
            page_size,
            bounds.default_page_size,
            bounds.max_page_size,
        )?,
    })
}

fn resolve(
    parameter: &'static str,
    raw: Option<&str>,
    default: u32,
    max: u32,
) -> Result<u32, QueryError> {
    let text = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(text) => text,
    };

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError {
            parameter,
            value: text.to_string(),
        });
    }

    // All digits: only overflow can fail, and that clamps anyway.
    let value = text.parse::<u64>().unwrap_or(u64::MAX);
    Ok(value.clamp(1, u64::from(max.max(1))) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PaginationConfig {
        PaginationConfig::default()
    }

    #[test]
    fn test_defaults_when_absent() {
        let p = resolve_pagination(None, None, "pageSize", &bounds()).unwrap();
        assert_eq!(p, Pagination { page: 1, page_size: 3 });

        let p = resolve_pagination(Some(""), Some("  "), "max", &bounds()).unwrap();
        assert_eq!(p, Pagination { page: 1, page_size: 3 });
    }

    #[test]
    fn test_values_pass_through_within_bounds() {
        let p = resolve_pagination(Some("2"), Some("5"), "pageSize", &bounds()).unwrap();
        assert_eq!(p, Pagination { page: 2, page_size: 5 });
    }

    #[test]
    fn test_zero_and_oversized_values_are_clamped() {
        let p = resolve_pagination(Some("0"), Some("250"), "max", &bounds()).unwrap();
        assert_eq!(p, Pagination { page: 1, page_size: 100 });

        let p = resolve_pagination(Some("99999999999999999999999"), None, "max", &bounds())
            .unwrap();
        assert_eq!(p.page, 1000);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let pairs: QueryPairs = vec![
            ("page".into(), "3".into()),
            ("max".into(), "7".into()),
            ("page".into(), "9".into()),
        ];

        assert_eq!(first_value(&pairs, "page"), Some("3"));
        assert_eq!(first_value(&pairs, "max"), Some("7"));
        assert_eq!(first_value(&pairs, "pageSize"), None);
    }

    #[test]
    fn test_non_numeric_is_rejected_with_parameter_name() {
        let err = resolve_pagination(Some("1"), Some("-4"), "max", &bounds()).unwrap_err();
        assert_eq!(
            err,
            QueryError {
                parameter: "max",
                value: "-4".into()
            }
        );

        let err = resolve_pagination(Some("two"), None, "pageSize", &bounds()).unwrap_err();
        assert_eq!(err.parameter, "page");
    }
}
