//! Property tests for filter invariants

use appfilter_core::{RangeChangeFilter, RangeCheck, RangeFilter};
use proptest::prelude::*;

// Keeps the change `a - b` inside i32 for any two generated readings
const LIMIT: i32 = 1 << 20;

fn reading() -> impl Strategy<Value = i32> {
    -LIMIT..=LIMIT
}

proptest! {
    #[test]
    fn bounds_are_ordered(a in reading(), b in reading()) {
        let filter = RangeFilter::new(a, b);
        prop_assert_eq!(filter.minimum(), a.min(b));
        prop_assert_eq!(filter.maximum(), a.max(b));

        let filter = RangeChangeFilter::new(a, b, 0);
        prop_assert!(filter.minimum() <= filter.maximum());
    }

    #[test]
    fn limit_clamps_and_is_idempotent(a in reading(), b in reading(), v in reading()) {
        let mut filter = RangeFilter::new(a, b);
        let (min, max) = (filter.minimum(), filter.maximum());

        let limited = filter.limit(v);
        prop_assert_eq!(limited, v.clamp(min, max));
        prop_assert_eq!(filter.limit(limited), limited);
    }

    #[test]
    fn bounds_are_valid(a in reading(), b in reading()) {
        let mut filter = RangeFilter::new(a, b);
        let (min, max) = (filter.minimum(), filter.maximum());

        prop_assert!(filter.is_valid_for(min));
        prop_assert_eq!(filter.limit(min), min);
        prop_assert!(filter.is_valid_for(max));
        prop_assert_eq!(filter.limit(max), max);
    }

    #[test]
    fn valid_is_complement_of_invalid(a in reading(), b in reading(), v in reading()) {
        let mut filter = RangeFilter::new(a, b);
        let invalid = filter.is_invalid_for(v);
        prop_assert_eq!(filter.is_valid(), !invalid);
        prop_assert_eq!(invalid, filter.is_low() || filter.is_high());
    }

    #[test]
    fn difference_within_span(a in reading(), b in reading(), d in reading()) {
        let filter = RangeChangeFilter::new(a, b, d);
        let span = filter.maximum() - filter.minimum();
        prop_assert!(filter.difference() >= 0);
        prop_assert!(filter.difference() <= span);
        prop_assert_eq!(filter.difference(), d.abs().min(span));
    }

    #[test]
    fn difference_survives_bound_changes(
        a in reading(), b in reading(), d in reading(), m in reading(), n in reading()
    ) {
        let mut filter = RangeChangeFilter::new(a, b, d);
        filter.set_minimum(m);
        filter.set_maximum(n);

        prop_assert!(filter.minimum() <= filter.maximum());
        prop_assert!(filter.difference() >= 0);
        prop_assert!(filter.difference() <= filter.maximum() - filter.minimum());
    }

    #[test]
    fn change_tracks_previous_value(v0 in reading(), v1 in reading()) {
        let mut filter = RangeChangeFilter::new(LIMIT, -LIMIT, 0);
        filter.set_value(v0);
        prop_assert_eq!(filter.change(), 0);
        filter.set_value(v1);
        prop_assert_eq!(filter.change(), v1 - v0);
    }

    #[test]
    fn zero_difference_never_jumps(values in prop::collection::vec(reading(), 1..32)) {
        let mut filter = RangeChangeFilter::new(LIMIT, -LIMIT, 0);
        for v in values {
            prop_assert!(!filter.is_jump_for(v));
        }
    }

    #[test]
    fn trend_flags_are_exclusive(values in prop::collection::vec(reading(), 1..32)) {
        let mut filter = RangeChangeFilter::new(LIMIT, -LIMIT, 1000);
        for v in values {
            filter.set_value(v);
            let flags = [filter.is_incr(), filter.is_decr(), filter.is_equal()];
            prop_assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
            prop_assert!(filter.trend().is_some());
        }
    }

    #[test]
    fn difference_bounded_over_full_domain(
        a in any::<i32>(), b in any::<i32>(), d in any::<i32>()
    ) {
        let filter = RangeChangeFilter::new(a, b, d);
        let span = i64::from(filter.maximum()) - i64::from(filter.minimum());
        let expected = i64::from(d).abs().min(span).min(i64::from(i32::MAX));

        prop_assert!(filter.difference() >= 0);
        prop_assert!(i64::from(filter.difference()) <= span);
        prop_assert_eq!(i64::from(filter.difference()), expected);
    }

    #[test]
    fn extreme_differences_stay_in_span(
        a in any::<i32>(),
        b in any::<i32>(),
        d in prop_oneof![Just(i32::MIN), Just(i32::MIN + 1), Just(-1), Just(i32::MAX)]
    ) {
        let mut filter = RangeChangeFilter::new(a, b, d);
        let span = i64::from(filter.maximum()) - i64::from(filter.minimum());
        prop_assert!(filter.difference() >= 0);
        prop_assert!(i64::from(filter.difference()) <= span);

        filter.set_difference(d);
        prop_assert!(filter.difference() >= 0);
        prop_assert!(i64::from(filter.difference()) <= span);
    }

    #[test]
    fn jump_matches_wide_arithmetic(d in any::<i32>(), v in any::<i32>()) {
        let mut filter = RangeChangeFilter::new(i32::MAX, i32::MIN, d);
        filter.set_value(0);
        let jump = filter.is_jump_for(v);

        let difference = i64::from(filter.difference());
        prop_assert_eq!(jump, difference > 0 && i64::from(v).abs() > difference);
    }
}
