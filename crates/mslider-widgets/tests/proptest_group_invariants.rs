//! Property-based invariant tests for a slider group under arbitrary input.
//!
//! A group is built from a random configuration and fed a random stream of
//! drags, taps, keys and programmatic updates. After every event the live
//! values must satisfy:
//!
//! 1. Range containment in `[min, stepped_max]`
//! 2. Non-decreasing order
//! 3. Step alignment on `min + k * step`
//! 4. Spacing of at least the effective `value_diff_min`
//!
//! Once every drag has ended the committed values equal the live ones, and
//! every `ValueChanged` notification matches the final state of its knob.
//! Re-proposing a knob's committed value is then a no-op, including on
//! fractional grids such as `0.1` and `0.3`.

use mslider_core::config::{KnobSpec, SliderConfig};
use mslider_core::event::{Event, KeyCode, KeyEvent, TrackEvent};
use mslider_core::value_math::{is_step_aligned, stepped_max};
use mslider_widgets::{RecordingView, SliderGroup, SliderNotification};
use proptest::prelude::*;
use web_time::{Duration, Instant};

const EPS: f64 = 1e-9;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Setup {
    min: f64,
    max: f64,
    step: f64,
    diff_min: f64,
    values: Vec<f64>,
    width: f64,
    rtl: bool,
}

fn setup_strategy() -> impl Strategy<Value = Setup> {
    (
        -100i32..100,
        200i32..400,
        prop_oneof![
            Just(0.1),
            Just(0.3),
            Just(0.5),
            Just(1.0),
            Just(2.5),
            Just(5.0),
            Just(10.0)
        ],
        0.0f64..30.0,
        prop::collection::vec(0.0f64..1.0, 1..6),
        prop_oneof![Just(0.0), Just(120.0), Just(480.0)],
        any::<bool>(),
    )
        .prop_map(|(min, span, step, diff_min, fractions, width, rtl)| {
            let min = f64::from(min);
            let max = min + f64::from(span);
            let mut values: Vec<f64> = fractions.iter().map(|f| min + f * (max - min)).collect();
            values.sort_by(f64::total_cmp);
            Setup {
                min,
                max,
                step,
                diff_min,
                values,
                width,
                rtl,
            }
        })
}

#[derive(Debug, Clone)]
enum Op {
    SetValue(usize, f64),
    Tap(usize, f64),
    TrackTap(f64),
    DragStart(usize),
    DragMove(usize, f64),
    DragEnd(usize),
    Focus(usize),
    Key(KeyCode),
    Tick(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let key = prop_oneof![
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::PageUp),
        Just(KeyCode::PageDown),
        Just(KeyCode::Home),
        Just(KeyCode::End),
    ];
    prop_oneof![
        (0usize..6, -600.0f64..600.0).prop_map(|(i, v)| Op::SetValue(i, v)),
        (0usize..6, -50.0f64..550.0).prop_map(|(i, x)| Op::Tap(i, x)),
        (-50.0f64..550.0).prop_map(Op::TrackTap),
        (0usize..6).prop_map(Op::DragStart),
        (0usize..6, -600.0f64..600.0).prop_map(|(i, dx)| Op::DragMove(i, dx)),
        (0usize..6).prop_map(Op::DragEnd),
        (0usize..6).prop_map(Op::Focus),
        key.prop_map(Op::Key),
        (0u64..400).prop_map(Op::Tick),
    ]
}

fn build(setup: &Setup) -> SliderGroup {
    let config = SliderConfig::new()
        .range(setup.min, setup.max)
        .step(setup.step)
        .value_diff_min(setup.diff_min)
        .values(setup.values.iter().map(|&v| KnobSpec::new(v, "")));
    SliderGroup::new(&config).expect("generated configs are achievable")
}

fn apply(group: &mut SliderGroup, view: &mut RecordingView, op: &Op, now: &mut Instant) {
    let n = group.knobs().len();
    match *op {
        Op::SetValue(i, v) => {
            let _ = group.set_value(i % n, v, view);
        }
        Op::Tap(i, x) => {
            group.tap(i % n, x, view);
        }
        Op::TrackTap(x) => {
            group.tap_track(x, view);
        }
        Op::DragStart(i) => {
            group.handle_event(&Event::Track(TrackEvent::start(i % n)), view, *now);
        }
        Op::DragMove(i, dx) => {
            group.handle_event(&Event::Track(TrackEvent::moved(i % n, dx)), view, *now);
        }
        Op::DragEnd(i) => {
            group.handle_event(&Event::Track(TrackEvent::end(i % n)), view, *now);
        }
        Op::Focus(i) => {
            group.focus(i % n);
        }
        Op::Key(code) => {
            group.handle_event(&Event::Key(KeyEvent::new(code)), view, *now);
        }
        Op::Tick(ms) => {
            *now += Duration::from_millis(ms);
            group.tick(*now);
        }
    }
}

fn assert_invariants(setup: &Setup, group: &SliderGroup) -> Result<(), TestCaseError> {
    let top = stepped_max(setup.min, setup.max, setup.step);
    let diff_min = group.effective_diff_min();
    let live: Vec<f64> = group.knobs().iter().map(|k| k.immediate_value()).collect();

    for (i, &v) in live.iter().enumerate() {
        prop_assert!(v >= setup.min - EPS && v <= top + EPS, "live[{i}]={v} outside range");
        prop_assert!(is_step_aligned(v, setup.min, setup.step), "live[{i}]={v} off grid");
    }
    for (i, pair) in live.windows(2).enumerate() {
        prop_assert!(pair[0] <= pair[1] + EPS, "crossing at {i}: {live:?}");
        prop_assert!(
            pair[1] - pair[0] + EPS >= diff_min,
            "spacing {} < {diff_min} at {i}: {live:?}",
            pair[1] - pair[0]
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_under_arbitrary_input(
        setup in setup_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut group = build(&setup);
        let mut view = RecordingView::new(setup.width).rtl(setup.rtl);
        let mut now = Instant::now();
        assert_invariants(&setup, &group)?;

        for op in &ops {
            apply(&mut group, &mut view, op, &mut now);
            assert_invariants(&setup, &group)?;
        }

        for i in 0..group.knobs().len() {
            group.drag_end(i, &mut view, now);
        }
        assert_invariants(&setup, &group)?;
        for knob in group.knobs() {
            prop_assert_eq!(knob.value(), knob.immediate_value());
            prop_assert!(!knob.is_dragging());
        }
    }

    #[test]
    fn last_value_notification_matches_committed_state(
        setup in setup_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut group = build(&setup);
        let mut view = RecordingView::new(setup.width).rtl(setup.rtl);
        let mut now = Instant::now();
        let initial = group.values();

        for op in &ops {
            apply(&mut group, &mut view, op, &mut now);
        }
        for i in 0..group.knobs().len() {
            group.drag_end(i, &mut view, now);
        }

        let values = group.values();
        for (i, &value) in values.iter().enumerate() {
            let last = view
                .notifications
                .iter()
                .rev()
                .find_map(|n| match *n {
                    SliderNotification::ValueChanged { index, value } if index == i => Some(value),
                    _ => None,
                })
                .unwrap_or(initial[i]);
            prop_assert_eq!(last, value, "knob {}", i);
        }
    }

    #[test]
    fn re_proposing_committed_values_is_silent(
        setup in setup_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut group = build(&setup);
        let mut view = RecordingView::new(setup.width).rtl(setup.rtl);
        let mut now = Instant::now();
        for op in &ops {
            apply(&mut group, &mut view, op, &mut now);
        }
        for i in 0..group.knobs().len() {
            group.drag_end(i, &mut view, now);
        }

        let settled = group.values();
        view.clear();
        for (i, &value) in settled.iter().enumerate() {
            prop_assert!(!group.set_value(i, value, &mut view).expect("index in range"));
        }
        prop_assert_eq!(group.values(), settled);
        prop_assert!(view.value_changes().is_empty(), "{:?}", view.notifications);
    }

    #[test]
    fn disabled_group_ignores_interaction(
        setup in setup_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut group = build(&setup);
        group.set_disabled(true);
        let mut view = RecordingView::new(setup.width).rtl(setup.rtl);
        let mut now = Instant::now();
        let before = group.values();

        for op in ops.iter().filter(|op| !matches!(op, Op::SetValue(..))) {
            apply(&mut group, &mut view, op, &mut now);
        }
        prop_assert_eq!(group.values(), before);
        prop_assert!(view.notifications.is_empty());
    }
}
