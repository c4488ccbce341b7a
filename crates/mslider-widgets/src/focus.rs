#![forbid(unsafe_code)]

//! Keyboard focus and key-to-action mapping.
//!
//! One knob of a group at most holds keyboard focus. [`KeyActionMap`] turns
//! a [`KeyEvent`] into a [`KnobAction`] for that knob, honouring the layout
//! direction for the horizontal arrows.
//!
//! | Key                  | LTR         | RTL         |
//! |----------------------|-------------|-------------|
//! | `Left`               | Decrement   | Increment   |
//! | `Right`              | Increment   | Decrement   |
//! | `Down` / `PageDown`  | Decrement   | Decrement   |
//! | `Up` / `PageUp`      | Increment   | Increment   |
//! | `Home`               | ToMin       | ToMin       |
//! | `End`                | ToMax       | ToMax       |
//!
//! Release events and any other key map to `None` so the host can route
//! them elsewhere.

use mslider_core::event::{KeyCode, KeyEvent};

/// What a key asks the focused knob to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnobAction {
    /// Move one step up.
    Increment,
    /// Move one step down.
    Decrement,
    /// Jump to the bottom of the range.
    ToMin,
    /// Jump to the top of the range.
    ToMax,
}

/// Stateless key mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyActionMap {
    /// Treat `Home`/`End` as single steps instead of range jumps.
    pub home_end_step: bool,
}

impl KeyActionMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            home_end_step: false,
        }
    }

    /// Resolve `event` for a knob laid out in the given direction.
    #[must_use]
    pub fn map(&self, event: &KeyEvent, is_rtl: bool) -> Option<KnobAction> {
        if !event.is_actionable() {
            return None;
        }
        let (forward, backward) = if is_rtl {
            (KnobAction::Decrement, KnobAction::Increment)
        } else {
            (KnobAction::Increment, KnobAction::Decrement)
        };
        match event.code {
            KeyCode::Right => Some(forward),
            KeyCode::Left => Some(backward),
            KeyCode::Up | KeyCode::PageUp => Some(KnobAction::Increment),
            KeyCode::Down | KeyCode::PageDown => Some(KnobAction::Decrement),
            KeyCode::Home if self.home_end_step => Some(KnobAction::Decrement),
            KeyCode::End if self.home_end_step => Some(KnobAction::Increment),
            KeyCode::Home => Some(KnobAction::ToMin),
            KeyCode::End => Some(KnobAction::ToMax),
            KeyCode::Other => None,
        }
    }
}

/// Which knob, if any, owns keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: Option<usize>,
}

impl FocusState {
    #[inline]
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focus(&mut self, index: usize) {
        self.focused = Some(index);
    }

    /// Drop focus if `index` holds it. Returns whether focus was dropped.
    pub fn blur(&mut self, index: usize) -> bool {
        if self.focused == Some(index) {
            self.focused = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    /// Forget focus on an index that no longer exists.
    pub fn retain_below(&mut self, len: usize) {
        if self.focused.is_some_and(|i| i >= len) {
            self.focused = None;
        }
    }
}
