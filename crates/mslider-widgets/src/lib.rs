#![forbid(unsafe_code)]

//! Knob state, input handling and the view seam for multi-knob sliders.
//!
//! A [`SliderGroup`] owns a sequence of [`Knob`]s. Hosts feed it decoded
//! [`Event`](mslider_core::event::Event)s and a [`SliderView`]; the group
//! resolves spacing through `mslider-layout`, updates its knobs, then pushes
//! placements and [`SliderNotification`]s back out through the view.
//!
//! # Example
//!
//! ```
//! use mslider_core::SliderConfig;
//! use mslider_widgets::{RecordingView, SliderGroup};
//!
//! let config = SliderConfig::new()
//!     .range(0.0, 200.0)
//!     .step(10.0)
//!     .knob(20.0, "#e91e63")
//!     .knob(150.0, "#3f51b5");
//! let mut group = SliderGroup::new(&config).unwrap();
//! let mut view = RecordingView::new(100.0);
//!
//! // A tap at 40% of the track lands on 80.
//! assert!(group.tap(0, 40.0, &mut view));
//! assert_eq!(group.values(), vec![80.0, 150.0]);
//! assert_eq!(view.value_changes(), vec![(0, 80.0)]);
//! ```

pub mod focus;
pub mod group;
pub mod knob;
pub mod view;

pub use focus::{FocusState, KeyActionMap, KnobAction};
pub use group::{DisplayFn, SliderGroup};
pub use knob::{DragTracker, Knob, KnobFlags, KnobPhase};
pub use view::{KnobPlacement, RecordingView, SliderNotification, SliderView};
