#![forbid(unsafe_code)]

//! Knob spacing resolution.
//!
//! [`ConstraintEngine::resolve`] takes one proposed value for one knob and
//! produces a consistent assignment for the whole sequence, pushing
//! neighbours out of the way when they sit closer than `diff_min`.
//!
//! # Algorithm
//!
//! For a proposal `p` at index `i`:
//!
//! 1. If the left neighbour is closer than `diff_min` and still above `min`,
//!    it is resolved toward `clamp(p - diff_min)`. That neighbour may in turn
//!    push *its* left neighbour, and so on.
//! 2. The same happens to the right, toward `clamp(p + diff_min)`, while the
//!    neighbour is still below `max`.
//! 3. With the neighbours settled, `p` is clamped into
//!    `[min, max] ∩ [left + diff_min, right - diff_min]`.
//! 4. The clamped value is committed to `i`.
//!
//! A cascade only travels away from the knob that started it: a knob pushed
//! leftward never pushes back to its right. On a sequence that already
//! honours `diff_min` this is exactly the symmetric recursion; on one that
//! does not, it is what guarantees termination.
//!
//! # Invariants
//!
//! 1. Every committed value lies in `[min, max]`.
//! 2. The sequence stays non-decreasing.
//! 3. At most `values.len()` knobs are touched, each exactly once.
//! 4. A proposal equal to the current value of a spacing-consistent sequence
//!    touches only its own index and changes nothing.
//!
//! # Failure Modes
//!
//! - A neighbour pinned at `min`/`max` stops the cascade; the trigger is then
//!   clamped against that neighbour's frozen value and may end up closer than
//!   `diff_min`. Bounds take priority over spacing.
//! - When the spacing window `[left + d, right - d]` is empty (a sequence that
//!   was already too tight), the result falls back to `[left, right]` so that
//!   ordering and range still hold.
//! - Spacing and boundary comparisons allow a slack of
//!   `STEP_EPSILON * max(span, diff_min)`. On fractional grids such as `0.1`
//!   a gap of `diff_min` minus a few ulps counts as satisfied and pushes
//!   nothing.
//!
//! The engine never quantizes. Callers snap the proposal to the step grid
//! first and configure `diff_min` and `max` on that grid, so every clamp
//! result stays aligned.

use std::collections::BTreeMap;

use mslider_core::bounds::RangeBounds;
#[cfg(feature = "tracing")]
use mslider_core::logging::LOG_TARGET;
use mslider_core::value_math;
use serde::{Deserialize, Serialize};

/// Which way a cascade is travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Spacing resolver for one group of knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintEngine {
    bounds: RangeBounds,
    diff_min: f64,
}

impl ConstraintEngine {
    /// Create an engine for the given (grid-aligned) range and spacing.
    #[must_use]
    pub fn new(bounds: RangeBounds, diff_min: f64) -> Self {
        Self {
            bounds,
            diff_min: diff_min.max(0.0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> RangeBounds {
        self.bounds
    }

    #[inline]
    #[must_use]
    pub const fn diff_min(&self) -> f64 {
        self.diff_min
    }

    /// Resolve `proposed` for `index`, writing every touched knob into
    /// `values`.
    ///
    /// An `index` past the end resolves to an empty [`Resolution`].
    pub fn resolve(&self, values: &mut [f64], index: usize, proposed: f64) -> Resolution {
        let mut resolution = Resolution::new(index);
        if index >= values.len() {
            return resolution;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            target: LOG_TARGET,
            "cascade.resolve",
            index,
            proposed,
            diff_min = self.diff_min,
            knobs = values.len()
        )
        .entered();

        self.resolve_at(values, index, proposed, None, &mut resolution);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: LOG_TARGET,
            resolved = values[index],
            touched = resolution.len(),
            "cascade resolved"
        );

        resolution
    }

    /// Recursive step. `travel` is `None` for the trigger and the cascade
    /// direction for pushed neighbours.
    fn resolve_at(
        &self,
        values: &mut [f64],
        index: usize,
        proposed: f64,
        travel: Option<Side>,
        out: &mut Resolution,
    ) {
        let d = self.diff_min;
        let slack = self.slack();

        if travel != Some(Side::Right) && index > 0 {
            let left = values[index - 1];
            if proposed - left < d - slack && left > self.bounds.min + slack {
                let target = self.bounds.clamp(proposed - d);
                self.resolve_at(values, index - 1, target, Some(Side::Left), out);
            }
        }

        if travel != Some(Side::Left) && index + 1 < values.len() {
            let right = values[index + 1];
            if right - proposed < d - slack && right < self.bounds.max - slack {
                let target = self.bounds.clamp(proposed + d);
                self.resolve_at(values, index + 1, target, Some(Side::Right), out);
            }
        }

        let left = index.checked_sub(1).map(|i| values[i]);
        let right = values.get(index + 1).copied();
        let value = self.valid_value(proposed, left, right);
        values[index] = value;
        out.commit(index, value);
    }

    /// Clamp `value` against the range and the spacing to its neighbours.
    ///
    /// Spacing to the right neighbour is applied last, then ordering and
    /// range are enforced on top of it.
    #[must_use]
    pub fn valid_value(&self, value: f64, left: Option<f64>, right: Option<f64>) -> f64 {
        let slack = self.slack();
        let mut v = self.bounds.clamp(value);
        if let Some(left) = left
            && v < left + self.diff_min - slack
        {
            v = left + self.diff_min;
        }
        if let Some(right) = right
            && v > right - self.diff_min + slack
        {
            v = right - self.diff_min;
        }
        let lo = left.map_or(self.bounds.min, |l| l.max(self.bounds.min));
        let hi = right.map_or(self.bounds.max, |r| r.min(self.bounds.max));
        value_math::clamp(v, lo, hi)
    }

    /// Tolerance for spacing and boundary comparisons.
    #[inline]
    fn slack(&self) -> f64 {
        value_math::STEP_EPSILON * self.bounds.span().max(self.diff_min)
    }

    /// Normalize a whole ordered sequence in place.
    ///
    /// An upward pass lifts each value to at least `min` and `diff_min` above
    /// its left neighbour; a downward pass then caps each value at `max` and
    /// `diff_min` below its right neighbour. When `(n - 1) * diff_min` fits
    /// in the range the result honours spacing everywhere. Returns the indices
    /// that changed, ascending.
    pub fn settle(&self, values: &mut [f64]) -> Vec<usize> {
        let before = values.to_vec();
        let d = self.diff_min;

        let mut floor = self.bounds.min;
        for v in values.iter_mut() {
            *v = v.max(floor);
            floor = *v + d;
        }
        let mut ceiling = self.bounds.max;
        for v in values.iter_mut().rev() {
            *v = v.min(ceiling);
            ceiling = *v - d;
        }

        before
            .iter()
            .zip(values.iter())
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Outcome of one [`ConstraintEngine::resolve`] call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    trigger: usize,
    touched: BTreeMap<usize, f64>,
    commit_order: Vec<usize>,
}

impl Resolution {
    fn new(trigger: usize) -> Self {
        Self {
            trigger,
            touched: BTreeMap::new(),
            commit_order: Vec::new(),
        }
    }

    fn commit(&mut self, index: usize, value: f64) {
        self.touched.insert(index, value);
        self.commit_order.push(index);
    }

    /// Index whose proposal started the cascade.
    #[inline]
    #[must_use]
    pub const fn trigger(&self) -> usize {
        self.trigger
    }

    /// Final value of the trigger, if it was resolved.
    #[must_use]
    pub fn trigger_value(&self) -> Option<f64> {
        self.value(self.trigger)
    }

    /// Final value for `index`, if touched.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.touched.get(&index).copied()
    }

    /// Touched `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.touched.iter().map(|(&i, &v)| (i, v))
    }

    /// Touched indices in the order they were committed.
    #[must_use]
    pub fn commit_order(&self) -> &[usize] {
        &self.commit_order
    }

    /// Number of touched knobs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.touched.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// Touched knobs whose value differs from `before`, ascending.
    pub fn changed<'a>(&'a self, before: &'a [f64]) -> impl Iterator<Item = (usize, f64)> + 'a {
        self.iter()
            .filter(move |&(i, v)| before.get(i).is_none_or(|&old| old != v))
    }
}

/// Pick the knob a tap at `target` should move.
///
/// The closest knob wins. When several knobs share that position (stacked
/// knobs) the one on the side of travel is chosen: the highest for a tap
/// above them, the lowest for a tap below.
#[must_use]
pub fn nearest_knob(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        let distance = (v - target).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    let (mut index, _) = best?;
    if target > values[index] {
        while index + 1 < values.len() && values[index + 1] == values[index] {
            index += 1;
        }
    }
    Some(index)
}
