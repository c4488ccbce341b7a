#![forbid(unsafe_code)]

//! Configuration errors.
//!
//! Interactive input never fails: out-of-range proposals are clamped and
//! unsatisfiable spacing at a boundary degrades silently. The only errors a
//! slider reports are configuration errors, raised before any state is
//! touched.

use std::fmt;

/// A rejected slider configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric setting was NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// `max` must be strictly greater than `min`.
    EmptyRange { min: f64, max: f64 },
    /// `step` must be strictly positive.
    NonPositiveStep { step: f64 },
    /// The minimum knob separation cannot be negative.
    NegativeDiffMin { diff_min: f64 },
    /// `knobs - 1` gaps of `diff_min` do not fit inside the range.
    DiffMinUnachievable {
        diff_min: f64,
        knobs: usize,
        span: f64,
    },
    /// A group needs at least one knob.
    NoKnobs,
    /// Initial values must be non-decreasing.
    UnorderedValues {
        index: usize,
        previous: f64,
        value: f64,
    },
    /// A configuration call addressed a knob that does not exist.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => write!(f, "{field} must be finite (got {value})"),
            Self::EmptyRange { min, max } => {
                write!(f, "invalid range: max {max} must be greater than min {min}")
            }
            Self::NonPositiveStep { step } => write!(f, "invalid step {step} (must be > 0)"),
            Self::NegativeDiffMin { diff_min } => {
                write!(f, "invalid value_diff_min {diff_min} (must be >= 0)")
            }
            Self::DiffMinUnachievable {
                diff_min,
                knobs,
                span,
            } => write!(
                f,
                "value_diff_min {diff_min} cannot separate {knobs} knobs inside a range of {span}"
            ),
            Self::NoKnobs => write!(f, "a slider group needs at least one knob"),
            Self::UnorderedValues {
                index,
                previous,
                value,
            } => write!(
                f,
                "knob {index} value {value} is below the previous knob value {previous}"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "knob index {index} out of range for {len} knobs")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
