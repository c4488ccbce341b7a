#![forbid(unsafe_code)]

//! Range and spacing bounds shared by every knob of a group.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::value_math::{self, STEP_EPSILON};

/// Closed value range `[min, max]` of a slider track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
}

impl RangeBounds {
    /// Create a validated range.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        ensure_finite("min", min)?;
        ensure_finite("max", max)?;
        if max <= min {
            return Err(ConfigError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Width of the range.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value into the range.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value_math::clamp(value, self.min, self.max)
    }

    /// Whether `value` lies inside the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The same range with `max` pulled down onto the step grid.
    #[must_use]
    pub fn stepped(&self, step: f64) -> Self {
        Self {
            min: self.min,
            max: value_math::stepped_max(self.min, self.max, step),
        }
    }
}

/// Allowed separation between value-adjacent knobs.
///
/// `diff_max` is `None` when unbounded. It is carried for hosts that display
/// it; the cascade only ever enforces `diff_min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffBounds {
    pub diff_min: f64,
    pub diff_max: Option<f64>,
}

impl DiffBounds {
    /// Build bounds from raw settings.
    ///
    /// A non-positive `diff_max` disables the ceiling.
    pub fn from_settings(diff_min: f64, diff_max: f64) -> Result<Self, ConfigError> {
        ensure_finite("value_diff_min", diff_min)?;
        ensure_finite("value_diff_max", diff_max)?;
        if diff_min < 0.0 {
            return Err(ConfigError::NegativeDiffMin { diff_min });
        }
        Ok(Self {
            diff_min,
            diff_max: (diff_max > 0.0).then_some(diff_max),
        })
    }

    /// Unconstrained spacing.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            diff_min: 0.0,
            diff_max: None,
        }
    }
}

impl Default for DiffBounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Check that `knobs` knobs separated by `diff_min` fit inside `range`.
pub fn ensure_diff_min_achievable(
    diff_min: f64,
    knobs: usize,
    range: RangeBounds,
) -> Result<(), ConfigError> {
    let gaps = knobs.saturating_sub(1) as f64;
    let needed = gaps * diff_min;
    if needed > range.span() * (1.0 + STEP_EPSILON) {
        return Err(ConfigError::DiffMinUnachievable {
            diff_min,
            knobs,
            span: range.span(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_empty_and_inverted() {
        assert!(matches!(
            RangeBounds::new(5.0, 5.0),
            Err(ConfigError::EmptyRange { .. })
        ));
        assert!(matches!(
            RangeBounds::new(5.0, 1.0),
            Err(ConfigError::EmptyRange { .. })
        ));
        assert!(matches!(
            RangeBounds::new(f64::NAN, 1.0),
            Err(ConfigError::NonFinite { field: "min", .. })
        ));
    }

    #[test]
    fn stepped_range_pulls_max_onto_grid() {
        let range = RangeBounds::new(0.0, 100.0).unwrap();
        assert_eq!(range.stepped(3.0).max, 99.0);
        assert_eq!(range.stepped(5.0), range);
    }

    #[test]
    fn non_positive_diff_max_is_unbounded() {
        let diff = DiffBounds::from_settings(5.0, 0.0).unwrap();
        assert_eq!(diff.diff_max, None);
        let diff = DiffBounds::from_settings(5.0, -1.0).unwrap();
        assert_eq!(diff.diff_max, None);
        let diff = DiffBounds::from_settings(5.0, 40.0).unwrap();
        assert_eq!(diff.diff_max, Some(40.0));
    }

    #[test]
    fn negative_diff_min_rejected() {
        assert_eq!(
            DiffBounds::from_settings(-1.0, 0.0),
            Err(ConfigError::NegativeDiffMin { diff_min: -1.0 })
        );
    }

    #[test]
    fn achievability_counts_gaps() {
        let range = RangeBounds::new(0.0, 100.0).unwrap();
        assert!(ensure_diff_min_achievable(50.0, 3, range).is_ok());
        assert!(ensure_diff_min_achievable(51.0, 3, range).is_err());
        assert!(ensure_diff_min_achievable(1000.0, 1, range).is_ok());
        assert!(ensure_diff_min_achievable(1000.0, 0, range).is_ok());
    }
}
