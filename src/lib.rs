//! News search proxy library.
//!
//! Exposes `GET /api/newsapi` and `GET /api/gnews`, forwarding pagination
//! hints to the matching provider with a server-held API key and relaying
//! the provider's JSON unchanged.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::NewsProxyConfig;
pub use http::HttpServer;
pub use upstream::{Forwarder, Provider};
