//! Property-based tests for the slider value math.
//!
//! 1. `quantize` lands on the step grid and inside the range
//! 2. `quantize` is idempotent
//! 3. `ratio_of` / `value_at_ratio` are inverse on the range
//! 4. `stepped_max` never exceeds `max` and is within one step of it
//! 5. `step_ceil` is a grid multiple no smaller than its input

use mslider_core::value_math::{
    clamp, is_step_aligned, quantize, ratio_of, step_ceil, stepped_max, value_at_ratio,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn range_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1000i32..1000, 1i32..2000).prop_map(|(min, span)| (f64::from(min), f64::from(min + span)))
}

fn step_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.25), Just(0.5), Just(1.0), Just(2.0), Just(5.0), Just(10.0)]
}

proptest! {
    #[test]
    fn quantize_lands_on_grid_inside_range(
        (min, max) in range_strategy(),
        step in step_strategy(),
        raw in -5000.0f64..5000.0,
    ) {
        let q = quantize(raw, min, max, step);
        prop_assert!(q >= min && q <= max, "q={q} outside [{min}, {max}]");
        prop_assert!(is_step_aligned(q, min, step), "q={q} off grid (min={min}, step={step})");
    }

    #[test]
    fn quantize_is_idempotent(
        (min, max) in range_strategy(),
        step in step_strategy(),
        raw in -5000.0f64..5000.0,
    ) {
        let once = quantize(raw, min, max, step);
        prop_assert_eq!(quantize(once, min, max, step), once);
    }

    #[test]
    fn ratio_and_value_are_inverse(
        (min, max) in range_strategy(),
        ratio in 0.0f64..=100.0,
    ) {
        let value = value_at_ratio(ratio, min, max);
        let back = ratio_of(value, min, max);
        prop_assert!((back - ratio).abs() < 1e-9, "ratio {ratio} -> {value} -> {back}");
        prop_assert!((clamp(value, min, max) - value).abs() < 1e-9);
    }

    #[test]
    fn stepped_max_is_within_one_step(
        (min, max) in range_strategy(),
        step in step_strategy(),
    ) {
        let top = stepped_max(min, max, step);
        prop_assert!(top <= max);
        prop_assert!(max - top < step);
        prop_assert!(is_step_aligned(top, min, step));
    }

    #[test]
    fn step_ceil_is_grid_multiple_at_least_input(
        diff in 0.0f64..500.0,
        step in step_strategy(),
    ) {
        let ceil = step_ceil(diff, step);
        prop_assert!(ceil + 1e-9 >= diff);
        prop_assert!(ceil - diff < step + 1e-9);
        prop_assert!(is_step_aligned(ceil, 0.0, step));
    }
}
