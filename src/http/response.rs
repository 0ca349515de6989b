//! Response construction.
//!
//! # Responsibilities
//! - Relay upstream JSON bytes unchanged
//! - Map local and upstream failures to status codes with JSON error bodies
//!
//! # Status mapping
//! - Upstream non-2xx → same status, upstream body if it is JSON
//! - Upstream timeout → 504 Gateway Timeout
//! - Network failure, malformed upstream JSON → 502 Bad Gateway
//! - Bad pagination hint → 400 Bad Request
//! - Unusable upstream configuration → 500 Internal Server Error

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::IgnoredAny;
use serde_json::json;
use thiserror::Error;

use crate::http::query::QueryError;
use crate::upstream::{ForwardError, UpstreamBody};

/// Everything a news route can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Upstream(#[from] ForwardError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Query(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string(), "parameter": e.parameter })),
            )
                .into_response(),
            ApiError::Upstream(ForwardError::Status { status, body }) => {
                if serde_json::from_slice::<IgnoredAny>(&body).is_ok() {
                    json_bytes(status, body)
                } else {
                    (
                        status,
                        Json(json!({
                            "error": "upstream returned an error",
                            "status": status.as_u16(),
                        })),
                    )
                        .into_response()
                }
            }
            ApiError::Upstream(e) => {
                let status = match &e {
                    ForwardError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                    ForwardError::Network(_) | ForwardError::Decode(_) => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, Json(json!({ "error": e.to_string() }))).into_response()
            }
        }
    }
}

/// Relay a successful upstream reply byte for byte.
pub fn relay(reply: UpstreamBody) -> Response {
    json_bytes(reply.status, reply.body)
}

fn json_bytes(status: StatusCode, body: Bytes) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
