#![forbid(unsafe_code)]

//! Core: value math, input events, configuration and logging for
//! multi-knob range sliders.
//!
//! # Role in multislider
//! `mslider-core` is the leaf crate. It owns the numeric helpers every other
//! crate builds on, the decoded input events a host feeds into a slider
//! group, the declarative configuration and its error taxonomy, and the
//! cancellable deadline used for transit windows.
//!
//! # Primary responsibilities
//! - **value_math**: clamp, ratio <-> value, step quantization, RTL flip.
//! - **bounds**: range and spacing bounds shared by a group.
//! - **config**: `SliderConfig` with validation and serde support.
//! - **event**: canonical key/track/tap/focus events.
//! - **debounce**: host-driven one-shot deadlines.
//!
//! # How it fits in the system
//! `mslider-layout` resolves knob spacing on top of these types and
//! `mslider-widgets` turns events into resolved, rendered knob positions.

pub mod bounds;
pub mod config;
pub mod debounce;
pub mod error;
pub mod event;
pub mod logging;
pub mod value_math;

pub use bounds::{DiffBounds, RangeBounds};
pub use config::{KnobSpec, SliderConfig};
pub use error::ConfigError;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
