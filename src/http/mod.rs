//! HTTP front end.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, middleware stack)
//!     → request.rs (request ID assigned and propagated)
//!     → query.rs (pagination parsed, defaulted, clamped)
//!     → news.rs (route → provider → forwarder)
//!     → response.rs (relay upstream JSON or map the failure)
//!     → Send to client
//! ```

pub mod news;
pub mod query;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
