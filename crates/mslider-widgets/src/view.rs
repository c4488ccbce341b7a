#![forbid(unsafe_code)]

//! The presentation seam of a slider group.
//!
//! A [`SliderGroup`](crate::SliderGroup) never draws. It answers geometry
//! questions through [`SliderView`], pushes knob placements back through it,
//! and reports value changes as [`SliderNotification`]s. The view is passed
//! to every mutating call as a separate `&mut` borrow, so a view cannot
//! re-enter the group while a cascade is in flight.
//!
//! [`RecordingView`] is an in-memory implementation for headless hosts and
//! tests.

/// Where to draw one knob.
///
/// `ratio` is the anchor in percent of the track (value direction). During a
/// drag the anchor stays at the drag start and `translate_x` carries the
/// pixel offset from it; otherwise `translate_x` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobPlacement {
    pub ratio: f64,
    pub translate_x: f64,
}

impl KnobPlacement {
    /// A resting placement at `ratio`.
    #[must_use]
    pub const fn at(ratio: f64) -> Self {
        Self {
            ratio,
            translate_x: 0.0,
        }
    }
}

/// Outbound event from a slider group.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderNotification {
    /// A committed value changed.
    ValueChanged { index: usize, value: f64 },
    /// The live value of a dragged knob changed.
    ImmediateValueChanged { index: usize, value: f64 },
    /// A knob was pressed.
    KnobPressed { index: usize },
    /// A knob was held past the long-press threshold.
    LongPressed { index: usize },
}

impl SliderNotification {
    /// Index of the knob the notification is about.
    #[must_use]
    pub const fn index(&self) -> usize {
        match *self {
            Self::ValueChanged { index, .. }
            | Self::ImmediateValueChanged { index, .. }
            | Self::KnobPressed { index }
            | Self::LongPressed { index } => index,
        }
    }
}

/// Host-side rendering and event sink.
pub trait SliderView {
    /// Track width in pixels. Zero or less disables pointer mapping.
    fn track_width(&self) -> f64;

    /// Pixel offset at which knob `index` is currently drawn.
    ///
    /// `None` lets the group derive it from the knob ratio.
    fn knob_offset(&self, _index: usize) -> Option<f64> {
        None
    }

    /// Whether the track runs right-to-left.
    fn is_rtl(&self) -> bool {
        false
    }

    /// Position knob `index`.
    fn render_knob(&mut self, index: usize, placement: KnobPlacement);

    /// Apply knob `index`'s colour.
    fn set_knob_color(&mut self, index: usize, color: &str);

    /// Receive a notification.
    fn notify(&mut self, notification: SliderNotification);
}

/// A [`SliderView`] that records everything it is told.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub width: f64,
    pub rtl: bool,
    pub placements: Vec<(usize, KnobPlacement)>,
    pub colors: Vec<(usize, String)>,
    pub notifications: Vec<SliderNotification>,
}

impl RecordingView {
    /// A left-to-right view with the given track width.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Committed value changes, in notification order.
    #[must_use]
    pub fn value_changes(&self) -> Vec<(usize, f64)> {
        self.notifications
            .iter()
            .filter_map(|n| match *n {
                SliderNotification::ValueChanged { index, value } => Some((index, value)),
                _ => None,
            })
            .collect()
    }

    /// Live value changes, in notification order.
    #[must_use]
    pub fn immediate_changes(&self) -> Vec<(usize, f64)> {
        self.notifications
            .iter()
            .filter_map(|n| match *n {
                SliderNotification::ImmediateValueChanged { index, value } => Some((index, value)),
                _ => None,
            })
            .collect()
    }

    /// Most recent placement of knob `index`.
    #[must_use]
    pub fn last_placement(&self, index: usize) -> Option<KnobPlacement> {
        self.placements
            .iter()
            .rev()
            .find(|(i, _)| *i == index)
            .map(|(_, p)| *p)
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.placements.clear();
        self.colors.clear();
        self.notifications.clear();
    }
}

impl SliderView for RecordingView {
    fn track_width(&self) -> f64 {
        self.width
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn render_knob(&mut self, index: usize, placement: KnobPlacement) {
        self.placements.push((index, placement));
    }

    fn set_knob_color(&mut self, index: usize, color: &str) {
        self.colors.push((index, color.to_owned()));
    }

    fn notify(&mut self, notification: SliderNotification) {
        self.notifications.push(notification);
    }
}
