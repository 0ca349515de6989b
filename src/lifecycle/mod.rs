//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → shutdown_signal resolves
//!     → server stops accepting → in-flight requests drain → exit
//! ```

pub mod signals;

pub use signals::shutdown_signal;
