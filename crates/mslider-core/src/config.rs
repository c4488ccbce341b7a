#![forbid(unsafe_code)]

//! Slider group configuration.
//!
//! [`SliderConfig`] mirrors the public attributes of the widget: range, step,
//! spacing, pin behaviour, the disabled flag, the transit window and the
//! initial knob sequence. It deserializes from camelCase JSON so hosts can
//! ship it alongside their markup.
//!
//! # Effective values
//!
//! Knob values live on the grid `min + k * step`. Two settings are therefore
//! widened onto that grid before the constraint engine sees them:
//!
//! - the top of the range becomes [`stepped_max`](crate::value_math::stepped_max);
//! - `value_diff_min` is rounded *up* to a whole number of steps, so spacing
//!   computed by clamping against a neighbour stays on the grid.
//!
//! # Example
//!
//! ```
//! use mslider_core::config::SliderConfig;
//!
//! let config = SliderConfig::new()
//!     .range(0.0, 200.0)
//!     .step(10.0)
//!     .value_diff_min(15.0)
//!     .knob(40.0, "#e91e63")
//!     .knob(120.0, "#3f51b5");
//!
//! config.validate().unwrap();
//! assert_eq!(config.effective_diff_min(), 20.0);
//! ```

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::bounds::{self, DiffBounds, RangeBounds};
use crate::error::ConfigError;
use crate::value_math;

/// Default transit window after a wholesale value replacement.
pub const DEFAULT_TRANS_DURATION_MS: u64 = 250;

/// One entry of the initial knob sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnobSpec {
    pub value: f64,
    #[serde(default)]
    pub color: String,
}

impl KnobSpec {
    /// Create a knob entry.
    #[must_use]
    pub fn new(value: f64, color: impl Into<String>) -> Self {
        Self {
            value,
            color: color.into(),
        }
    }
}

/// Declarative configuration of a slider group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    /// Lower end of the track.
    pub min: f64,
    /// Upper end of the track.
    pub max: f64,
    /// Grid spacing of knob values.
    pub step: f64,
    /// Minimal separation between adjacent knobs (`0` disables).
    pub value_diff_min: f64,
    /// Maximal separation between adjacent knobs (`<= 0` means unbounded).
    pub value_diff_max: f64,
    /// Show every pin permanently; implies `pin`.
    pub always_show_pin: bool,
    /// Show a value pin while a knob is expanded.
    pub pin: bool,
    /// Render tick marks at every step.
    pub snaps: bool,
    /// Block all interactive input.
    pub disabled: bool,
    /// Transit window in milliseconds.
    pub trans_duration_ms: u64,
    /// Initial knob sequence, in ascending value order.
    pub values: Vec<KnobSpec>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value_diff_min: 0.0,
            value_diff_max: 0.0,
            always_show_pin: false,
            pin: false,
            snaps: false,
            disabled: false,
            trans_duration_ms: DEFAULT_TRANS_DURATION_MS,
            values: Vec::new(),
        }
    }
}

impl SliderConfig {
    /// Create a configuration with default settings and no knobs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn value_diff_min(mut self, diff: f64) -> Self {
        self.value_diff_min = diff;
        self
    }

    #[must_use]
    pub fn value_diff_max(mut self, diff: f64) -> Self {
        self.value_diff_max = diff;
        self
    }

    #[must_use]
    pub fn always_show_pin(mut self, on: bool) -> Self {
        self.always_show_pin = on;
        self
    }

    #[must_use]
    pub fn pin(mut self, on: bool) -> Self {
        self.pin = on;
        self
    }

    #[must_use]
    pub fn snaps(mut self, on: bool) -> Self {
        self.snaps = on;
        self
    }

    #[must_use]
    pub fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    #[must_use]
    pub fn trans_duration(mut self, duration: Duration) -> Self {
        self.trans_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Append a knob to the initial sequence.
    #[must_use]
    pub fn knob(mut self, value: f64, color: impl Into<String>) -> Self {
        self.values.push(KnobSpec::new(value, color));
        self
    }

    /// Replace the initial sequence.
    #[must_use]
    pub fn values(mut self, values: impl IntoIterator<Item = KnobSpec>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    /// Transit window as a duration.
    #[must_use]
    pub fn trans_duration_value(&self) -> Duration {
        Duration::from_millis(self.trans_duration_ms)
    }

    /// Configured range, before grid alignment.
    pub fn range_bounds(&self) -> Result<RangeBounds, ConfigError> {
        RangeBounds::new(self.min, self.max)
    }

    /// Configured spacing bounds.
    pub fn diff_bounds(&self) -> Result<DiffBounds, ConfigError> {
        DiffBounds::from_settings(self.value_diff_min, self.value_diff_max)
    }

    /// Spacing enforced by the cascade: `value_diff_min` rounded up to the
    /// step grid.
    #[must_use]
    pub fn effective_diff_min(&self) -> f64 {
        value_math::step_ceil(self.value_diff_min.max(0.0), self.step)
    }

    /// Reject configurations that cannot produce a consistent knob set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = self.range_bounds()?;
        validate_step(self.step)?;
        self.diff_bounds()?;
        validate_values(&self.values, self.effective_diff_min(), range.stepped(self.step))
    }
}

/// Reject a non-finite or non-positive step.
pub fn validate_step(step: f64) -> Result<(), ConfigError> {
    bounds::ensure_finite("step", step)?;
    if step <= 0.0 {
        return Err(ConfigError::NonPositiveStep { step });
    }
    Ok(())
}

/// Reject an empty, non-finite or descending knob sequence, or one whose
/// length cannot honour `diff_min` inside `range`.
pub fn validate_values(
    values: &[KnobSpec],
    diff_min: f64,
    range: RangeBounds,
) -> Result<(), ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::NoKnobs);
    }
    for (index, spec) in values.iter().enumerate() {
        bounds::ensure_finite("value", spec.value)?;
        if index > 0 {
            let previous = values[index - 1].value;
            if spec.value < previous {
                return Err(ConfigError::UnorderedValues {
                    index,
                    previous,
                    value: spec.value,
                });
            }
        }
    }
    bounds::ensure_diff_min_achievable(diff_min, values.len(), range)
}
