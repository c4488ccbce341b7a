#![forbid(unsafe_code)]

//! Per-knob state and drag tracking.
//!
//! # State Machine
//!
//! ```text
//! Idle --begin_drag--> Dragging --end_drag--> Transiting --poll(deadline)--> Idle
//!                         ^                        |
//!                         +------begin_drag--------+   (cancels the window)
//! ```
//!
//! While dragging, the knob keeps two values: the committed `value` and the
//! live `immediate_value` that follows the pointer. `end_drag` commits the
//! live value. Outside a drag both are equal.
//!
//! # Invariants
//!
//! - `ratio` is always `ratio_of(value)` for the group range it was last
//!   committed against.
//! - `DRAGGING` is set iff a [`DragTracker`] is present.
//! - `TRANSITING` is set iff the transit debouncer is armed.

use bitflags::bitflags;
use mslider_core::bounds::RangeBounds;
use mslider_core::debounce::Debouncer;
use mslider_core::value_math;
use web_time::{Duration, Instant};

bitflags! {
    /// Interaction and animation flags owned by one knob.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KnobFlags: u8 {
        /// Pointer is dragging the knob.
        const DRAGGING   = 0b0001;
        /// Knob is enlarged and shows its pin.
        const EXPANDED   = 0b0010;
        /// Knob is animating toward a new position.
        const TRANSITING = 0b0100;
        /// Interactive input is blocked (group disabled).
        const BLOCKED    = 0b1000;
    }
}

/// Coarse lifecycle phase derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnobPhase {
    #[default]
    Idle,
    Dragging,
    Transiting,
}

/// Pixel geometry captured when a drag starts.
///
/// All offsets are relative to the start of the track in value direction
/// (already mirrored for RTL).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    /// Track width in pixels.
    pub width: f64,
    /// Knob position at drag start, derived from its ratio.
    pub start_x: f64,
    /// Where the knob was drawn at drag start; the anchor translations are
    /// measured from.
    pub knob_start_x: f64,
    /// Knob ratio at drag start.
    pub start_ratio: f64,
    /// Most negative delta that keeps the knob on the track.
    pub min_dx: f64,
    /// Most positive delta that keeps the knob on the track.
    pub max_dx: f64,
    /// Current (clamped) position.
    pub x: f64,
}

impl DragTracker {
    /// Capture drag geometry for a knob at `ratio` on a track `width` wide.
    ///
    /// `knob_offset` is the drawn position reported by the view; `None`
    /// anchors at the ratio position.
    #[must_use]
    pub fn new(width: f64, ratio: f64, knob_offset: Option<f64>) -> Self {
        let start_x = ratio * width / 100.0;
        Self {
            width,
            start_x,
            knob_start_x: knob_offset.unwrap_or(start_x),
            start_ratio: ratio,
            min_dx: -start_x,
            max_dx: width - start_x,
            x: start_x,
        }
    }

    /// Apply a total pointer delta and return the new ratio along the track.
    ///
    /// `dx` is in visual pixels; `is_rtl` mirrors it onto the value axis.
    pub fn track(&mut self, dx: f64, is_rtl: bool) -> f64 {
        let dx = value_math::clamp(
            value_math::apply_direction(dx, is_rtl),
            self.min_dx,
            self.max_dx,
        );
        self.x = self.start_x + dx;
        if self.width > 0.0 {
            self.x / self.width * 100.0
        } else {
            self.start_ratio
        }
    }

    /// Ratio of the drawn anchor.
    #[must_use]
    pub fn anchor_ratio(&self) -> f64 {
        if self.width > 0.0 {
            self.knob_start_x / self.width * 100.0
        } else {
            self.start_ratio
        }
    }

    /// Pixel translation of a knob now at `ratio` relative to its drawn
    /// anchor.
    #[must_use]
    pub fn translate_x(&self, ratio: f64) -> f64 {
        ratio * self.width / 100.0 - self.knob_start_x
    }
}

/// One handle on the slider track.
#[derive(Debug, Clone)]
pub struct Knob {
    value: f64,
    immediate_value: f64,
    ratio: f64,
    color: String,
    flags: KnobFlags,
    drag: Option<DragTracker>,
    transit: Debouncer,
}

impl Knob {
    /// Create an idle knob committed at `value`.
    #[must_use]
    pub fn new(value: f64, color: impl Into<String>, range: RangeBounds, transit: Duration) -> Self {
        Self {
            value,
            immediate_value: value,
            ratio: value_math::ratio_of(value, range.min, range.max),
            color: color.into(),
            flags: KnobFlags::empty(),
            drag: None,
            transit: Debouncer::new(transit),
        }
    }

    /// Committed value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Live value; differs from [`value`](Self::value) only during a drag.
    #[inline]
    #[must_use]
    pub fn immediate_value(&self) -> f64 {
        self.immediate_value
    }

    /// Committed value as a percentage of the range.
    #[inline]
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Presentation colour, passed through to the view untouched.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    #[must_use]
    pub fn flags(&self) -> KnobFlags {
        self.flags
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.flags.contains(KnobFlags::DRAGGING)
    }

    #[inline]
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.flags.contains(KnobFlags::EXPANDED)
    }

    #[inline]
    #[must_use]
    pub fn is_transiting(&self) -> bool {
        self.flags.contains(KnobFlags::TRANSITING)
    }

    #[inline]
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.flags.contains(KnobFlags::BLOCKED)
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> KnobPhase {
        if self.is_dragging() {
            KnobPhase::Dragging
        } else if self.is_transiting() {
            KnobPhase::Transiting
        } else {
            KnobPhase::Idle
        }
    }

    /// Active drag geometry, if dragging.
    #[must_use]
    pub fn drag(&self) -> Option<&DragTracker> {
        self.drag.as_ref()
    }

    /// Commit `value` and mirror it into the live value.
    pub(crate) fn commit(&mut self, value: f64, range: RangeBounds) {
        self.value = value;
        self.immediate_value = value;
        self.ratio = value_math::ratio_of(value, range.min, range.max);
    }

    /// Update the live value only.
    pub(crate) fn set_immediate(&mut self, value: f64) {
        self.immediate_value = value;
    }

    /// Start tracking a drag on a track `width` pixels wide.
    ///
    /// Cancels a pending transit window.
    pub(crate) fn begin_drag(&mut self, width: f64, knob_offset: Option<f64>, range: RangeBounds) {
        self.cancel_transit();
        let ratio = value_math::ratio_of(self.immediate_value, range.min, range.max);
        self.drag = Some(DragTracker::new(width, ratio, knob_offset));
        self.flags.insert(KnobFlags::DRAGGING);
    }

    /// Map a total pointer delta onto an unresolved value (not quantized).
    ///
    /// Returns `None` when not dragging.
    pub(crate) fn drag_value(&mut self, dx: f64, is_rtl: bool, range: RangeBounds) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        let ratio = drag.track(dx, is_rtl);
        Some(value_math::value_at_ratio(ratio, range.min, range.max))
    }

    /// Stop dragging and return the live value to commit.
    pub(crate) fn end_drag(&mut self) -> Option<f64> {
        self.drag.take()?;
        self.flags.remove(KnobFlags::DRAGGING);
        Some(self.immediate_value)
    }

    /// Open the transit window at `now`.
    pub(crate) fn start_transit(&mut self, now: Instant) {
        self.transit.arm(now);
        self.flags.insert(KnobFlags::TRANSITING);
    }

    pub(crate) fn cancel_transit(&mut self) {
        self.transit.cancel();
        self.flags.remove(KnobFlags::TRANSITING);
    }

    /// Close the transit window if it expired. Returns `true` on the
    /// transition to idle.
    pub(crate) fn poll_transit(&mut self, now: Instant) -> bool {
        if self.transit.poll(now) {
            self.flags.remove(KnobFlags::TRANSITING);
            true
        } else {
            false
        }
    }

    pub(crate) fn set_transit_duration(&mut self, duration: Duration) {
        self.transit.set_duration(duration);
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.flags.set(KnobFlags::EXPANDED, expanded);
    }

    pub(crate) fn set_blocked(&mut self, blocked: bool) {
        self.flags.set(KnobFlags::BLOCKED, blocked);
    }
}
