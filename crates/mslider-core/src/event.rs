#![forbid(unsafe_code)]

//! Canonical input events for a slider group.
//!
//! The host owns gesture recognition (press, track, long press) and hands the
//! group already-decoded events. Pointer coordinates are track-relative
//! pixels as `f64`; the group never reads raw device input.
//!
//! # Design Notes
//!
//! - A track sequence is well-formed as `Start → zero or more Move → End`.
//!   A `Move` without a prior `Start` starts the drag implicitly.
//! - `dx` on a track event is the *total* horizontal delta since the press,
//!   in visual (not direction-corrected) pixels.
//! - `KeyEventKind` defaults to `Press` when not available from the host.

/// Canonical input event addressed to a slider group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A keyboard event for the focused knob.
    Key(KeyEvent),

    /// A pointer track (drag) gesture on one knob.
    Track(TrackEvent),

    /// A tap on the bar of a specific knob at track-relative `x`.
    Tap {
        /// Knob that owns the tapped bar.
        index: usize,
        /// Track-relative pixel position.
        x: f64,
    },

    /// A tap on the shared track, dispatched to the nearest knob.
    TrackTap {
        /// Track-relative pixel position.
        x: f64,
    },

    /// Pointer pressed on a knob (before any movement).
    Press {
        /// Pressed knob.
        index: usize,
    },

    /// Pointer held stationary on a knob past the host's threshold.
    LongPress {
        /// Pressed knob.
        index: usize,
    },

    /// A knob gained or lost focus.
    ///
    /// `gained = false` only clears focus if `index` is the focused knob.
    Focus {
        /// Knob whose focus changed.
        index: usize,
        /// `true` = focus gained, `false` = focus lost.
        gained: bool,
    },
}

/// Phase of a track gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackPhase {
    /// Pointer went down and started moving.
    Start,
    /// Pointer moved while held.
    Move,
    /// Pointer released.
    End,
}

/// A drag gesture step on one knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackEvent {
    /// Knob being dragged.
    pub index: usize,
    /// Gesture phase.
    pub phase: TrackPhase,
    /// Total horizontal delta since the gesture started, in pixels.
    pub dx: f64,
}

impl TrackEvent {
    /// Create a track-start event.
    #[must_use]
    pub const fn start(index: usize) -> Self {
        Self {
            index,
            phase: TrackPhase::Start,
            dx: 0.0,
        }
    }

    /// Create a track-move event with the total delta since start.
    #[must_use]
    pub const fn moved(index: usize, dx: f64) -> Self {
        Self {
            index,
            phase: TrackPhase::Move,
            dx,
        }
    }

    /// Create a track-end event.
    #[must_use]
    pub const fn end(index: usize) -> Self {
        Self {
            index,
            phase: TrackPhase::End,
            dx: 0.0,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event of Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this event should drive the slider (press or auto-repeat).
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Key codes a slider reacts to.
///
/// Everything else arrives as [`KeyCode::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Page Up key.
    PageUp,

    /// Page Down key.
    PageDown,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Any other key.
    Other,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_defaults_to_press() {
        let key = KeyEvent::new(KeyCode::Left);
        assert_eq!(key.kind, KeyEventKind::Press);
        assert!(key.is_actionable());
    }

    #[test]
    fn release_is_not_actionable() {
        let key = KeyEvent::new(KeyCode::Up).with_kind(KeyEventKind::Release);
        assert!(!key.is_actionable());
        let repeat = KeyEvent::new(KeyCode::Up).with_kind(KeyEventKind::Repeat);
        assert!(repeat.is_actionable());
    }

    #[test]
    fn track_constructors() {
        assert_eq!(TrackEvent::start(2).phase, TrackPhase::Start);
        let mv = TrackEvent::moved(1, -14.5);
        assert_eq!(mv.phase, TrackPhase::Move);
        assert_eq!(mv.dx, -14.5);
        assert_eq!(TrackEvent::end(0).dx, 0.0);
    }
}
