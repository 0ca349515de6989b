//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! resolved Pagination (from the http layer)
//!     → url.rs (provider template + query + API key)
//!     → client.rs (single GET with connect/request deadlines)
//!     → UpstreamBody (validated JSON bytes) or ForwardError
//! ```
//!
//! # Security Constraints
//! - API keys only come from configuration, never from the caller
//! - Never log the full outbound URL; it carries the key
//! - No retries: one inbound request produces at most one outbound call

pub mod client;
pub mod types;
pub mod url;

pub use client::Forwarder;
pub use types::{ForwardError, Pagination, Provider, UpstreamBody};
