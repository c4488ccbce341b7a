#![forbid(unsafe_code)]

//! Spacing resolution for multi-knob sliders.
//!
//! A slider group stores its knob values as one ordered `[f64]`. The
//! [`ConstraintEngine`] resolves a single proposal against that slice and
//! reports every knob it had to move in a [`Resolution`]. Knobs refer to each
//! other only by index, so a cascade is a walk over the slice rather than a
//! chain of handle-to-handle messages.
//!
//! # Example
//!
//! ```
//! use mslider_core::RangeBounds;
//! use mslider_layout::ConstraintEngine;
//!
//! let engine = ConstraintEngine::new(RangeBounds::new(0.0, 100.0).unwrap(), 20.0);
//! let mut values = [10.0, 50.0, 90.0];
//! let resolution = engine.resolve(&mut values, 1, 25.0);
//!
//! assert_eq!(values, [5.0, 25.0, 90.0]);
//! assert_eq!(resolution.len(), 2);
//! ```

pub mod cascade;

pub use cascade::{ConstraintEngine, Resolution, nearest_knob};
pub use mslider_core::bounds::{DiffBounds, RangeBounds};
