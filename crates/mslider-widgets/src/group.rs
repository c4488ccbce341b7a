#![forbid(unsafe_code)]

//! A group of knobs sharing one track.
//!
//! [`SliderGroup`] owns the knob sequence and every group-wide setting. Each
//! entry point turns its input into one proposal for one knob, hands the
//! live values to the [`ConstraintEngine`], and writes the resolution back
//! into the knobs before telling the view anything.
//!
//! # Invariants
//!
//! With an achievable `value_diff_min`, after every operation:
//!
//! 1. Every committed value lies in `[min, stepped_max]`.
//! 2. Committed values are non-decreasing by index.
//! 3. Adjacent knobs are at least the effective `value_diff_min` apart unless
//!    a knob pinned at a range boundary prevents it.
//! 4. Every value sits on `min + k * step`.
//!
//! # Notifications
//!
//! - `ValueChanged` fires once per knob whose committed value actually
//!   changed, in ascending index order.
//! - `ImmediateValueChanged` fires for the dragged knob when its live value
//!   changes; knobs pushed by a drag commit directly.
//! - `KnobPressed` fires when a drag starts, `LongPressed` on a long press.
//!
//! # Failure Modes
//!
//! - Interactive entry points (drag, tap, keys, press) are no-ops while
//!   disabled, for an unknown index, or with a zero-width track. They return
//!   `false` instead of failing.
//! - Configuration entry points return [`ConfigError`] and leave the group
//!   untouched on error.

use std::fmt;

use mslider_core::bounds::{self, DiffBounds, RangeBounds};
use mslider_core::config::{self, KnobSpec, SliderConfig};
use mslider_core::error::ConfigError;
use mslider_core::event::{Event, KeyEvent, TrackEvent, TrackPhase};
#[cfg(feature = "tracing")]
use mslider_core::logging::LOG_TARGET;
use mslider_core::value_math;
use mslider_layout::{ConstraintEngine, nearest_knob};
use web_time::{Duration, Instant};

use crate::focus::{FocusState, KeyActionMap, KnobAction};
use crate::knob::Knob;
use crate::view::{KnobPlacement, SliderNotification, SliderView};

/// Formats a value for a pin label.
pub type DisplayFn = Box<dyn Fn(f64) -> String + Send + Sync>;

fn default_display(value: f64) -> String {
    value.to_string()
}

/// A multi-knob range slider.
pub struct SliderGroup {
    knobs: Vec<Knob>,
    range: RangeBounds,
    step: f64,
    diff: DiffBounds,
    always_show_pin: bool,
    pin: bool,
    snaps: bool,
    disabled: bool,
    trans_duration: Duration,
    focus: FocusState,
    keymap: KeyActionMap,
    display: DisplayFn,
    render_pending: bool,
}

impl fmt::Debug for SliderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderGroup")
            .field("knobs", &self.knobs)
            .field("range", &self.range)
            .field("step", &self.step)
            .field("diff", &self.diff)
            .field("always_show_pin", &self.always_show_pin)
            .field("pin", &self.pin)
            .field("snaps", &self.snaps)
            .field("disabled", &self.disabled)
            .field("trans_duration", &self.trans_duration)
            .field("focus", &self.focus)
            .field("render_pending", &self.render_pending)
            .finish_non_exhaustive()
    }
}

impl SliderGroup {
    /// Build a group from a validated configuration.
    ///
    /// Initial values are snapped to the step grid and spread to honour the
    /// effective `value_diff_min`. A full render is scheduled for the first
    /// [`on_frame`](Self::on_frame).
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut group = Self {
            knobs: Vec::new(),
            range: config.range_bounds()?,
            step: config.step,
            diff: config.diff_bounds()?,
            always_show_pin: config.always_show_pin,
            pin: config.pin || config.always_show_pin,
            snaps: config.snaps,
            disabled: config.disabled,
            trans_duration: config.trans_duration_value(),
            focus: FocusState::default(),
            keymap: KeyActionMap::new(),
            display: Box::new(default_display),
            render_pending: true,
        };
        group.replace_knobs(&config.values);
        Ok(group)
    }

    /// Replace the pin label formatter.
    #[must_use]
    pub fn with_display(mut self, display: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.display = Box::new(display);
        self
    }

    /// Replace the key mapping.
    #[must_use]
    pub fn with_keymap(mut self, keymap: KeyActionMap) -> Self {
        self.keymap = keymap;
        self
    }

    // --- Queries ---------------------------------------------------------

    /// All knobs in index order.
    #[must_use]
    pub fn knobs(&self) -> &[Knob] {
        &self.knobs
    }

    #[must_use]
    pub fn knob(&self, index: usize) -> Option<&Knob> {
        self.knobs.get(index)
    }

    /// Committed values in index order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.knobs.iter().map(Knob::value).collect()
    }

    /// Committed values with their colours, in the shape
    /// [`set_values`](Self::set_values) accepts.
    #[must_use]
    pub fn snapshot(&self) -> Vec<KnobSpec> {
        self.knobs
            .iter()
            .map(|knob| KnobSpec::new(knob.value(), knob.color()))
            .collect()
    }

    /// The knob holding keyboard focus.
    #[must_use]
    pub fn focused_knob(&self) -> Option<(usize, &Knob)> {
        let index = self.focus.focused()?;
        self.knobs.get(index).map(|knob| (index, knob))
    }

    #[must_use]
    pub fn range(&self) -> RangeBounds {
        self.range
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Configured spacing; `diff_max` is `None` when unbounded.
    #[must_use]
    pub fn value_diff_bounds(&self) -> DiffBounds {
        self.diff
    }

    /// Spacing the cascade enforces: `diff_min` rounded up to the step grid.
    #[must_use]
    pub fn effective_diff_min(&self) -> f64 {
        value_math::step_ceil(self.diff.diff_min, self.step)
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn pin(&self) -> bool {
        self.pin
    }

    #[must_use]
    pub fn always_show_pin(&self) -> bool {
        self.always_show_pin
    }

    #[must_use]
    pub fn snaps(&self) -> bool {
        self.snaps
    }

    #[must_use]
    pub fn trans_duration(&self) -> Duration {
        self.trans_duration
    }

    /// Whether a full render waits for the next frame.
    #[must_use]
    pub fn render_pending(&self) -> bool {
        self.render_pending
    }

    /// Pin text for knob `index`, when its pin is visible.
    ///
    /// A pin shows while the knob is expanded or dragged, and only when pins
    /// are enabled. It tracks the live value.
    #[must_use]
    pub fn pin_label(&self, index: usize) -> Option<String> {
        let knob = self.knobs.get(index)?;
        (self.pin && (knob.is_expanded() || knob.is_dragging()))
            .then(|| (self.display)(knob.immediate_value()))
    }

    // --- Configuration ---------------------------------------------------

    /// Replace the knob sequence wholesale.
    ///
    /// Values are snapped and spread like the initial configuration, every
    /// knob enters its transit window at `now`, and a full render is
    /// scheduled. No value notifications are sent.
    pub fn set_values(&mut self, values: &[KnobSpec], now: Instant) -> Result<(), ConfigError> {
        config::validate_values(values, self.effective_diff_min(), self.stepped_range())?;
        self.replace_knobs(values);
        for knob in &mut self.knobs {
            knob.start_transit(now);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: LOG_TARGET, knobs = self.knobs.len(), "slider values replaced");

        Ok(())
    }

    /// Change the step and re-snap every knob onto the new grid.
    pub fn set_step(&mut self, step: f64, view: &mut dyn SliderView) -> Result<(), ConfigError> {
        config::validate_step(step)?;
        let diff_min = value_math::step_ceil(self.diff.diff_min, step);
        bounds::ensure_diff_min_achievable(diff_min, self.knobs.len(), self.range.stepped(step))?;
        self.step = step;
        self.renormalize(view);
        Ok(())
    }

    /// Change the minimum spacing and spread knobs that now sit too close.
    pub fn set_value_diff_min(
        &mut self,
        diff_min: f64,
        view: &mut dyn SliderView,
    ) -> Result<(), ConfigError> {
        let diff = DiffBounds::from_settings(diff_min, self.diff.diff_max.unwrap_or(0.0))?;
        bounds::ensure_diff_min_achievable(
            value_math::step_ceil(diff.diff_min, self.step),
            self.knobs.len(),
            self.stepped_range(),
        )?;
        self.diff = diff;
        self.renormalize(view);
        Ok(())
    }

    /// Change the maximum spacing. A non-positive value means unbounded.
    ///
    /// Stored and reported only; no operation enforces it.
    pub fn set_value_diff_max(&mut self, diff_max: f64) -> Result<(), ConfigError> {
        self.diff = DiffBounds::from_settings(self.diff.diff_min, diff_max)?;
        Ok(())
    }

    /// Block or unblock every interactive entry point.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        for knob in &mut self.knobs {
            knob.set_blocked(disabled);
        }
    }

    /// Keep every pin visible, or return to press-driven pins.
    pub fn set_always_show_pin(&mut self, on: bool) {
        self.always_show_pin = on;
        if on {
            self.pin = true;
        }
        for knob in &mut self.knobs {
            if on {
                knob.set_expanded(true);
            } else if !knob.is_dragging() {
                knob.set_expanded(false);
            }
        }
    }

    pub fn set_pin(&mut self, pin: bool) {
        self.pin = pin || self.always_show_pin;
    }

    pub fn set_snaps(&mut self, snaps: bool) {
        self.snaps = snaps;
    }

    pub fn set_trans_duration(&mut self, duration: Duration) {
        self.trans_duration = duration;
        for knob in &mut self.knobs {
            knob.set_transit_duration(duration);
        }
    }

    pub fn set_display(&mut self, display: impl Fn(f64) -> String + Send + Sync + 'static) {
        self.display = Box::new(display);
    }

    // --- Programmatic value changes --------------------------------------

    /// Propose `value` for knob `index`, cascading as needed.
    ///
    /// Returns whether any committed value changed.
    pub fn set_value(
        &mut self,
        index: usize,
        value: f64,
        view: &mut dyn SliderView,
    ) -> Result<bool, ConfigError> {
        self.check_index(index)?;
        if !value.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "value",
                value,
            });
        }
        let proposed = self.quantize(value);
        Ok(self.propose(index, proposed, view))
    }

    /// Move knob `index` one step up.
    pub fn increment(&mut self, index: usize, view: &mut dyn SliderView) -> Result<bool, ConfigError> {
        self.check_index(index)?;
        Ok(self.apply_action(index, KnobAction::Increment, view))
    }

    /// Move knob `index` one step down.
    pub fn decrement(&mut self, index: usize, view: &mut dyn SliderView) -> Result<bool, ConfigError> {
        self.check_index(index)?;
        Ok(self.apply_action(index, KnobAction::Decrement, view))
    }

    // --- Interaction -----------------------------------------------------

    /// Dispatch one input event. Returns whether the event was consumed.
    pub fn handle_event(&mut self, event: &Event, view: &mut dyn SliderView, now: Instant) -> bool {
        match *event {
            Event::Key(ref key) => self.handle_key(key, view),
            Event::Track(track) => self.handle_track(track, view, now),
            Event::Tap { index, x } => self.tap(index, x, view),
            Event::TrackTap { x } => self.tap_track(x, view),
            Event::Press { index } => self.press(index),
            Event::LongPress { index } => self.long_press(index, view),
            Event::Focus { index, gained } => {
                if gained {
                    self.focus(index)
                } else {
                    self.focus.blur(index)
                }
            }
        }
    }

    fn handle_track(&mut self, track: TrackEvent, view: &mut dyn SliderView, now: Instant) -> bool {
        match track.phase {
            TrackPhase::Start => self.drag_start(track.index, view),
            TrackPhase::Move => self.drag_move(track.index, track.dx, view),
            TrackPhase::End => self.drag_end(track.index, view, now),
        }
    }

    /// Give keyboard focus to knob `index`.
    pub fn focus(&mut self, index: usize) -> bool {
        if index >= self.knobs.len() {
            return false;
        }
        self.focus.focus(index);
        true
    }

    /// Apply a key to the focused knob.
    pub fn handle_key(&mut self, key: &KeyEvent, view: &mut dyn SliderView) -> bool {
        if self.disabled {
            return false;
        }
        let Some(index) = self.focus.focused() else {
            return false;
        };
        let Some(action) = self.keymap.map(key, view.is_rtl()) else {
            return false;
        };

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!(target: LOG_TARGET, "slider.key", index, action = ?action).entered();

        self.apply_action(index, action, view);
        true
    }

    /// Pointer pressed on knob `index`: expand it and take focus.
    pub fn press(&mut self, index: usize) -> bool {
        if self.disabled || index >= self.knobs.len() {
            return false;
        }
        self.knobs[index].set_expanded(true);
        self.focus.focus(index);
        true
    }

    /// Forward a long press on knob `index`.
    pub fn long_press(&mut self, index: usize, view: &mut dyn SliderView) -> bool {
        if self.disabled || index >= self.knobs.len() {
            return false;
        }
        view.notify(SliderNotification::LongPressed { index });
        true
    }

    /// Start dragging knob `index`.
    pub fn drag_start(&mut self, index: usize, view: &mut dyn SliderView) -> bool {
        if self.disabled || index >= self.knobs.len() {
            return false;
        }
        let width = view.track_width();
        let offset = view.knob_offset(index);
        self.knobs[index].begin_drag(width, offset, self.range);

        #[cfg(feature = "tracing")]
        tracing::debug!(target: LOG_TARGET, index, width, "slider drag start");

        view.notify(SliderNotification::KnobPressed { index });
        true
    }

    /// Move knob `index` by the total visual delta `dx` since drag start.
    ///
    /// Starts the drag implicitly if needed. Neighbours pushed out of the
    /// way commit immediately; the dragged knob only updates its live value.
    pub fn drag_move(&mut self, index: usize, dx: f64, view: &mut dyn SliderView) -> bool {
        if self.disabled || index >= self.knobs.len() {
            return false;
        }
        if !self.knobs[index].is_dragging() && !self.drag_start(index, view) {
            return false;
        }

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!(target: LOG_TARGET, "slider.drag_move", index, dx).entered();

        let is_rtl = view.is_rtl();
        let Some(raw) = self.knobs[index].drag_value(dx, is_rtl, self.range) else {
            return false;
        };
        let proposed = self.quantize(raw);

        let mut values = self.live_values();
        let resolution = self.engine().resolve(&mut values, index, proposed);
        let mut changed = false;
        for (i, value) in resolution.iter() {
            let value = self.quantize(value);
            if i == index {
                let knob = &mut self.knobs[index];
                if knob.immediate_value() != value {
                    knob.set_immediate(value);
                    view.notify(SliderNotification::ImmediateValueChanged { index, value });
                    changed = true;
                }
            } else if self.commit(i, value, view) {
                changed = true;
            }
        }
        self.render_knob(index, view);
        changed
    }

    /// Finish dragging knob `index` and commit its live value.
    pub fn drag_end(&mut self, index: usize, view: &mut dyn SliderView, now: Instant) -> bool {
        let Some(knob) = self.knobs.get_mut(index) else {
            return false;
        };
        let Some(live) = knob.end_drag() else {
            return false;
        };
        knob.start_transit(now);
        if !self.always_show_pin {
            knob.set_expanded(false);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: LOG_TARGET, index, value = live, "slider drag end");

        let changed = self.propose(index, live, view);
        self.render_knob(index, view);
        changed
    }

    /// Tap on knob `index`'s bar at track-relative pixel `x`.
    pub fn tap(&mut self, index: usize, x: f64, view: &mut dyn SliderView) -> bool {
        if self.disabled || index >= self.knobs.len() {
            return false;
        }
        let Some(value) = self.value_at_pixel(x, view) else {
            return false;
        };
        self.propose(index, self.quantize(value), view);
        true
    }

    /// Tap on the shared track at pixel `x`; the nearest knob moves there.
    pub fn tap_track(&mut self, x: f64, view: &mut dyn SliderView) -> bool {
        if self.disabled {
            return false;
        }
        let Some(target) = self.value_at_pixel(x, view) else {
            return false;
        };
        let Some(index) = nearest_knob(&self.live_values(), target) else {
            return false;
        };
        self.propose(index, self.quantize(target), view);
        true
    }

    // --- Frame and timers ------------------------------------------------

    /// Close expired transit windows. Returns whether any knob went idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut any = false;
        for knob in &mut self.knobs {
            any |= knob.poll_transit(now);
        }
        any
    }

    /// Flush a scheduled full render. Returns whether anything was drawn.
    pub fn on_frame(&mut self, view: &mut dyn SliderView) -> bool {
        if !self.render_pending {
            return false;
        }
        self.render_pending = false;
        for index in 0..self.knobs.len() {
            view.set_knob_color(index, self.knobs[index].color());
            self.render_knob(index, view);
        }
        true
    }

    /// Schedule a full render for the next frame.
    pub fn request_render(&mut self) {
        self.render_pending = true;
    }

    // --- Internals -------------------------------------------------------

    fn check_index(&self, index: usize) -> Result<(), ConfigError> {
        if index < self.knobs.len() {
            Ok(())
        } else {
            Err(ConfigError::IndexOutOfRange {
                index,
                len: self.knobs.len(),
            })
        }
    }

    fn stepped_range(&self) -> RangeBounds {
        self.range.stepped(self.step)
    }

    fn engine(&self) -> ConstraintEngine {
        ConstraintEngine::new(self.stepped_range(), self.effective_diff_min())
    }

    fn quantize(&self, value: f64) -> f64 {
        value_math::quantize(value, self.range.min, self.range.max, self.step)
    }

    fn live_values(&self) -> Vec<f64> {
        self.knobs.iter().map(Knob::immediate_value).collect()
    }

    /// Map a visual pixel on the track to an unsnapped value.
    fn value_at_pixel(&self, x: f64, view: &dyn SliderView) -> Option<f64> {
        let width = view.track_width();
        if width <= 0.0 || !x.is_finite() {
            return None;
        }
        let x = if view.is_rtl() { width - x } else { x };
        let ratio = value_math::clamp(x / width * 100.0, 0.0, 100.0);
        Some(value_math::value_at_ratio(ratio, self.range.min, self.range.max))
    }

    fn apply_action(&mut self, index: usize, action: KnobAction, view: &mut dyn SliderView) -> bool {
        let current = self.knobs[index].immediate_value();
        let proposed = match action {
            KnobAction::Increment => current + self.step,
            KnobAction::Decrement => current - self.step,
            KnobAction::ToMin => self.range.min,
            KnobAction::ToMax => self.range.max,
        };
        let proposed = self.quantize(proposed);
        self.propose(index, proposed, view)
    }

    /// Resolve and commit a snapped proposal for knob `index`.
    ///
    /// Resolved values are snapped again so every committed value is the
    /// exact grid point `min + k * step`, keeping equality checks stable.
    fn propose(&mut self, index: usize, proposed: f64, view: &mut dyn SliderView) -> bool {
        let mut values = self.live_values();
        let resolution = self.engine().resolve(&mut values, index, proposed);
        let mut changed = false;
        for (i, value) in resolution.iter() {
            changed |= self.commit(i, self.quantize(value), view);
        }
        if self.always_show_pin {
            self.knobs[index].set_expanded(true);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: LOG_TARGET,
            index,
            proposed,
            resolved = self.knobs[index].value(),
            touched = resolution.len(),
            changed,
            "slider value proposed"
        );

        changed
    }

    /// Commit `value` to knob `index`, notifying and re-rendering on change.
    fn commit(&mut self, index: usize, value: f64, view: &mut dyn SliderView) -> bool {
        let knob = &mut self.knobs[index];
        let committed = knob.value();
        let live = knob.immediate_value();
        knob.commit(value, self.range);
        if committed != value {
            view.notify(SliderNotification::ValueChanged { index, value });
        }
        if committed != value || live != value {
            self.render_knob(index, view);
        }
        committed != value
    }

    fn render_knob(&self, index: usize, view: &mut dyn SliderView) {
        let knob = &self.knobs[index];
        let placement = match knob.drag() {
            Some(drag) => {
                let ratio = value_math::ratio_of(knob.immediate_value(), self.range.min, self.range.max);
                KnobPlacement {
                    ratio: drag.anchor_ratio(),
                    translate_x: drag.translate_x(ratio),
                }
            }
            None => KnobPlacement::at(knob.ratio()),
        };
        view.render_knob(index, placement);
    }

    /// Snap, spread and re-commit every knob after a grid or spacing change.
    fn renormalize(&mut self, view: &mut dyn SliderView) {
        let mut values: Vec<f64> = self.knobs.iter().map(|k| self.quantize(k.value())).collect();
        self.engine().settle(&mut values);
        for (index, value) in values.into_iter().enumerate() {
            self.commit(index, self.quantize(value), view);
        }
    }

    fn replace_knobs(&mut self, values: &[KnobSpec]) {
        let mut snapped: Vec<f64> = values.iter().map(|spec| self.quantize(spec.value)).collect();
        self.engine().settle(&mut snapped);
        self.knobs = values
            .iter()
            .zip(snapped)
            .map(|(spec, value)| {
                let value = self.quantize(value);
                let mut knob = Knob::new(value, spec.color.clone(), self.range, self.trans_duration);
                knob.set_expanded(self.always_show_pin);
                knob.set_blocked(self.disabled);
                knob
            })
            .collect();
        self.focus.retain_below(self.knobs.len());
        self.render_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;
    use mslider_core::event::KeyCode;

    fn group(values: &[f64], diff_min: f64) -> SliderGroup {
        let config = SliderConfig::new()
            .value_diff_min(diff_min)
            .values(values.iter().map(|&v| KnobSpec::new(v, "")));
        SliderGroup::new(&config).unwrap()
    }

    #[test]
    fn new_spreads_initial_values() {
        let g = group(&[50.0, 50.0], 10.0);
        assert_eq!(g.values(), vec![50.0, 60.0]);
        assert!(g.render_pending());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = SliderConfig::new().step(0.0).knob(1.0, "");
        assert_eq!(
            SliderGroup::new(&config).unwrap_err(),
            ConfigError::NonPositiveStep { step: 0.0 }
        );
    }

    #[test]
    fn commit_notifies_only_changed_knobs() {
        let mut g = group(&[10.0, 50.0, 90.0], 20.0);
        let mut view = RecordingView::new(100.0);
        assert!(g.set_value(1, 25.0, &mut view).unwrap());
        assert_eq!(view.value_changes(), vec![(0, 5.0), (1, 25.0)]);
    }

    #[test]
    fn set_value_validates_index_and_value() {
        let mut g = group(&[10.0], 0.0);
        let mut view = RecordingView::new(100.0);
        assert_eq!(
            g.set_value(3, 1.0, &mut view),
            Err(ConfigError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert!(matches!(
            g.set_value(0, f64::NAN, &mut view),
            Err(ConfigError::NonFinite { field: "value", .. })
        ));
    }

    #[test]
    fn keys_need_focus() {
        let mut g = group(&[10.0], 0.0);
        let mut view = RecordingView::new(100.0);
        assert!(!g.handle_key(&KeyEvent::new(KeyCode::Right), &mut view));
        assert!(g.focus(0));
        assert!(g.handle_key(&KeyEvent::new(KeyCode::Right), &mut view));
        assert_eq!(g.values(), vec![11.0]);
    }

    #[test]
    fn pin_label_follows_expansion() {
        let config = SliderConfig::new().pin(true).knob(42.0, "");
        let mut g = SliderGroup::new(&config)
            .unwrap()
            .with_display(|v| format!("${v}"));
        assert_eq!(g.pin_label(0), None);
        assert!(g.press(0));
        assert_eq!(g.pin_label(0).as_deref(), Some("$42"));
        assert_eq!(g.pin_label(5), None);
    }

    #[test]
    fn debug_skips_display_fn() {
        let g = group(&[1.0], 0.0);
        let text = format!("{g:?}");
        assert!(text.starts_with("SliderGroup"));
        assert!(text.contains(".."));
    }
}
