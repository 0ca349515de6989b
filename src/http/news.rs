//! News route handlers.
//!
//! Each route resolves its pagination hints, makes one forward through the
//! shared [`Forwarder`](crate::upstream::Forwarder), and relays the outcome.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::http::query::{first_value, resolve_pagination, QueryPairs};
use crate::http::response::{relay, ApiError};
use crate::http::server::AppState;
use crate::upstream::Provider;

pub const NEWSAPI_ROUTE: &str = "/api/newsapi";
pub const GNEWS_ROUTE: &str = "/api/gnews";

/// `GET /api/newsapi?page=&pageSize=`
pub async fn newsapi(State(state): State<AppState>, Query(pairs): Query<QueryPairs>) -> Response {
    handle(&state, Provider::NewsApi, &pairs).await
}

/// `GET /api/gnews?page=&max=`
pub async fn gnews(State(state): State<AppState>, Query(pairs): Query<QueryPairs>) -> Response {
    handle(&state, Provider::GNews, &pairs).await
}

async fn handle(state: &AppState, provider: Provider, pairs: &[(String, String)]) -> Response {
    match forward(state, provider, pairs).await {
        Ok(response) => response,
        Err(e) => {
            if let ApiError::Query(ref q) = e {
                tracing::warn!(
                    provider = %provider,
                    parameter = q.parameter,
                    value = %q.value,
                    "Rejected pagination hint"
                );
            }
            e.into_response()
        }
    }
}

async fn forward(
    state: &AppState,
    provider: Provider,
    pairs: &[(String, String)],
) -> Result<Response, ApiError> {
    let page_size_param = provider.page_size_param();
    let pagination = resolve_pagination(
        first_value(pairs, "page"),
        first_value(pairs, page_size_param),
        page_size_param,
        &state.pagination,
    )?;
    let reply = state.forwarder.fetch(provider, pagination).await?;
    Ok(relay(reply))
}
