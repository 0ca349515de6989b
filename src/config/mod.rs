//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize, environment overrides)
//!     → validation.rs (semantic checks)
//!     → NewsProxyConfig (validated, immutable)
//!     → shared via Arc with the forwarder and handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; API keys never change at runtime
//! - All fields have defaults so the proxy starts with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod secret;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, NewsProxyConfig, ObservabilityConfig, PaginationConfig,
    ProviderConfig, ProvidersConfig, TimeoutConfig,
};
pub use secret::ApiKey;
pub use validation::{validate_config, ValidationError};
