#![no_main]

use libfuzzer_sys::fuzz_target;
use mslider_core::value_math::quantize;
use mslider_layout::{ConstraintEngine, RangeBounds};

fuzz_target!(|data: &[u8]| {
    // Header: knob count (1..=16), diff_min in whole steps (0..=7).
    if data.len() < 2 {
        return;
    }
    let knobs = usize::from(data[0] % 16) + 1;
    let diff_min = f64::from(data[1] % 8);
    let max = 255.0;
    if (knobs - 1) as f64 * diff_min > max {
        return;
    }
    let engine = ConstraintEngine::new(RangeBounds::new(0.0, max).expect("fixed range"), diff_min);

    // Start from a spread sequence, then replay (index, value) byte pairs.
    let mut values: Vec<f64> = (0..knobs).map(|i| i as f64 * diff_min).collect();
    engine.settle(&mut values);

    for pair in data[2..].chunks_exact(2) {
        let index = usize::from(pair[0]) % knobs;
        let proposed = quantize(f64::from(pair[1]), 0.0, max, 1.0);
        let resolution = engine.resolve(&mut values, index, proposed);

        assert!(resolution.len() <= knobs, "touched more knobs than exist");
        assert_eq!(resolution.commit_order().len(), resolution.len(), "knob touched twice");
        for (i, &v) in values.iter().enumerate() {
            assert!((0.0..=max).contains(&v), "value[{i}]={v} out of range");
            assert_eq!(v, v.round(), "value[{i}]={v} off grid");
        }
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1], "crossing: {values:?}");
            assert!(pair[1] - pair[0] >= diff_min, "spacing: {values:?}");
        }
    }
});
