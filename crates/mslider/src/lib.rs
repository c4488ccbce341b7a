#![forbid(unsafe_code)]

//! Multi-knob range slider facade.
//!
//! This crate re-exports the public surface of the `mslider-*` crates and
//! adds a couple of conveniences for loading a group from JSON.
//!
//! # Example
//!
//! ```
//! use mslider::prelude::*;
//!
//! let mut group = mslider::group_from_json(
//!     r#"{ "valueDiffMin": 20, "values": [{ "value": 10 }, { "value": 50 }, { "value": 90 }] }"#,
//! )?;
//! let mut view = RecordingView::new(100.0);
//!
//! group.set_value(1, 25.0, &mut view)?;
//! assert_eq!(group.values(), vec![5.0, 25.0, 90.0]);
//! # Ok::<(), mslider::Error>(())
//! ```

mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use mslider_core::bounds::{DiffBounds, RangeBounds};
pub use mslider_core::config::{DEFAULT_TRANS_DURATION_MS, KnobSpec, SliderConfig};
pub use mslider_core::error::ConfigError;
pub use mslider_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, TrackEvent, TrackPhase};
#[cfg(feature = "tracing-json")]
pub use mslider_core::logging::init_json_logging;

// --- Layout re-exports -----------------------------------------------------

pub use mslider_layout::{ConstraintEngine, Resolution, nearest_knob};

// --- Widget re-exports -----------------------------------------------------

pub use mslider_widgets::{
    DisplayFn, FocusState, KeyActionMap, Knob, KnobAction, KnobFlags, KnobPhase, KnobPlacement,
    RecordingView, SliderGroup, SliderNotification, SliderView,
};

pub use web_time::{Duration, Instant};

/// Parse a camelCase JSON configuration without validating it.
pub fn config_from_json(json: &str) -> Result<SliderConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Parse, validate and build a slider group from JSON.
pub fn group_from_json(json: &str) -> Result<SliderGroup> {
    let config = config_from_json(json)?;
    Ok(SliderGroup::new(&config)?)
}

pub mod prelude {
    pub use crate::{
        ConfigError, Error, Event, KeyCode, KeyEvent, KnobSpec, RecordingView, Result,
        SliderConfig, SliderGroup, SliderNotification, SliderView, TrackEvent,
    };

    pub use crate::{core, layout, widgets};
}

pub use mslider_core as core;
pub use mslider_layout as layout;
pub use mslider_widgets as widgets;
