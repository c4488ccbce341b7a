#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mslider_core::config::{KnobSpec, SliderConfig};
use mslider_core::event::{Event, KeyCode, KeyEvent, TrackEvent};
use mslider_widgets::{RecordingView, SliderGroup};
use web_time::{Duration, Instant};

#[derive(Debug, Arbitrary)]
struct Input {
    step: u8,
    diff_min: u8,
    values: Vec<u8>,
    width: u16,
    rtl: bool,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    SetValue(u8, i16),
    Tap(u8, i16),
    TrackTap(i16),
    DragStart(u8),
    DragMove(u8, i16),
    DragEnd(u8),
    Press(u8),
    Key(u8),
    Disable(bool),
    Tick(u16),
    Frame,
}

const KEYS: [KeyCode; 8] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::PageUp,
    KeyCode::PageDown,
    KeyCode::Home,
    KeyCode::End,
];

fuzz_target!(|input: Input| {
    let step = f64::from(input.step % 10 + 1);
    let mut values: Vec<f64> = input.values.iter().take(12).map(|&v| f64::from(v)).collect();
    values.sort_by(f64::total_cmp);
    let config = SliderConfig::new()
        .range(0.0, 255.0)
        .step(step)
        .value_diff_min(f64::from(input.diff_min % 40))
        .values(values.into_iter().map(|v| KnobSpec::new(v, "")));
    // Unachievable or empty configurations are rejected up front.
    let Ok(mut group) = SliderGroup::new(&config) else {
        return;
    };
    let mut view = RecordingView::new(f64::from(input.width)).rtl(input.rtl);
    let mut now = Instant::now();
    let n = group.knobs().len();

    for op in input.ops.iter().take(256) {
        match *op {
            Op::SetValue(i, v) => {
                let _ = group.set_value(usize::from(i) % n, f64::from(v), &mut view);
            }
            Op::Tap(i, x) => {
                group.tap(usize::from(i) % n, f64::from(x), &mut view);
            }
            Op::TrackTap(x) => {
                group.tap_track(f64::from(x), &mut view);
            }
            Op::DragStart(i) => {
                let event = Event::Track(TrackEvent::start(usize::from(i) % n));
                group.handle_event(&event, &mut view, now);
            }
            Op::DragMove(i, dx) => {
                let event = Event::Track(TrackEvent::moved(usize::from(i) % n, f64::from(dx)));
                group.handle_event(&event, &mut view, now);
            }
            Op::DragEnd(i) => {
                let event = Event::Track(TrackEvent::end(usize::from(i) % n));
                group.handle_event(&event, &mut view, now);
            }
            Op::Press(i) => {
                group.handle_event(&Event::Press { index: usize::from(i) % n }, &mut view, now);
            }
            Op::Key(k) => {
                let event = Event::Key(KeyEvent::new(KEYS[usize::from(k) % KEYS.len()]));
                group.handle_event(&event, &mut view, now);
            }
            Op::Disable(on) => group.set_disabled(on),
            Op::Tick(ms) => {
                now += Duration::from_millis(u64::from(ms));
                group.tick(now);
            }
            Op::Frame => {
                group.on_frame(&mut view);
            }
        }

        let diff_min = group.effective_diff_min();
        let live: Vec<f64> = group.knobs().iter().map(|k| k.immediate_value()).collect();
        for pair in live.windows(2) {
            assert!(pair[0] <= pair[1], "crossing: {live:?}");
            assert!(pair[1] - pair[0] >= diff_min, "spacing {diff_min}: {live:?}");
        }
        for &v in &live {
            assert!((0.0..=255.0).contains(&v), "out of range: {live:?}");
            assert_eq!(v % step, 0.0, "off grid (step {step}): {live:?}");
        }
    }
});
