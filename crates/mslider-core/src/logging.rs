#![forbid(unsafe_code)]

//! Structured logging hooks.
//!
//! With the `tracing` feature the slider crates open `debug_span!`s around
//! constraint resolution, drag steps and key handling; the macros are
//! re-exported here (and at the crate root) so downstream crates share one
//! import path. Without the feature nothing is compiled in.
//!
//! The `tracing-json` feature adds [`init_json_logging`], a one-call JSON
//! subscriber for production hosts. `RUST_LOG` takes precedence over the
//! default filter passed in.

/// Target used by every span and event the slider crates emit.
pub const LOG_TARGET: &str = "mslider";

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging(default_filter: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
