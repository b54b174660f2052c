//! Property-based tests for Sequence<T> and the free transformation functions.
//!
//! - **Filter**: output is the order-preserving subsequence of matching elements
//! - **Matching**: `none_match(p) == !any_match(p)`
//! - **Sort**: output is ordered, stable, and a permutation of the input
//! - **FlatMap**: output length is the sum of the inner lengths
//! - **GroupBy**: every element lands in its key's group exactly once

use fluentseq::stream::{Sequence, flat_map, group_by, map};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_filter_is_ordered_subsequence(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let filtered = Sequence::of(values.clone()).filter(|n| n % 3 == 0).into_vec();
        let expected: Vec<i32> = values.iter().copied().filter(|n| n % 3 == 0).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn prop_none_match_is_not_any_match(
        values in prop::collection::vec(any::<i16>(), 0..50),
        threshold in any::<i16>(),
    ) {
        let sequence = Sequence::of(values);
        prop_assert_eq!(
            sequence.none_match(|n| *n > threshold),
            !sequence.any_match(|n| *n > threshold)
        );
    }

    #[test]
    fn prop_sort_is_ordered(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let sorted = Sequence::of(values).sort(|a, b| a < b).into_vec();
        for window in sorted.windows(2) {
            prop_assert!(!(window[1] < window[0]));
        }
    }

    #[test]
    fn prop_sort_matches_std_stable_sort(values in prop::collection::vec((0u8..8, any::<u32>()), 0..200)) {
        let sorted = Sequence::of(values.clone()).sort(|a, b| a.0 < b.0).into_vec();
        let mut expected = values;
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_sort_is_stable(keys in prop::collection::vec(0u8..5, 0..200)) {
        let tagged: Vec<(u8, usize)> = keys.into_iter().enumerate().map(|(index, key)| (key, index)).collect();
        let sorted = Sequence::of(tagged).sort(|a, b| a.0 < b.0).into_vec();
        for window in sorted.windows(2) {
            if window[0].0 == window[1].0 {
                prop_assert!(window[0].1 < window[1].1);
            }
        }
    }

    #[test]
    fn prop_sort_does_not_touch_borrowed_receiver(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Sequence::of(values.clone());
        let _ = sequence.sort_ref(|a, b| a < b);
        prop_assert_eq!(sequence.into_vec(), values);
    }

    #[test]
    fn prop_map_preserves_length(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let mapped = map(&values, |n| n.wrapping_mul(2));
        prop_assert_eq!(mapped.len(), values.len());
    }

    #[test]
    fn prop_flat_map_length_law(inputs in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..10), 0..20)) {
        let expected: usize = inputs.iter().map(Vec::len).sum();
        prop_assert_eq!(flat_map(inputs).len(), expected);
    }

    #[test]
    fn prop_flat_map_preserves_order(inputs in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..10), 0..20)) {
        let expected: Vec<u8> = inputs.concat();
        prop_assert_eq!(flat_map(inputs).into_vec(), expected);
    }

    #[test]
    fn prop_group_by_completeness(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let grouping = group_by(values.clone(), |n| n.rem_euclid(7));
        let total: usize = grouping.values().map(Vec::len).sum();
        prop_assert_eq!(total, values.len());

        for value in &values {
            let group = grouping.get(&value.rem_euclid(7)).unwrap_or_default();
            prop_assert!(group.contains(value));
        }
    }

    #[test]
    fn prop_group_by_preserves_relative_order(values in prop::collection::vec(0u8..20, 0..100)) {
        let grouping = group_by(values.clone(), |n| n % 4);
        for (key, group) in &grouping {
            let expected: Vec<u8> = values.iter().copied().filter(|n| n % 4 == *key).collect();
            prop_assert_eq!(group, &expected);
        }
    }

    #[test]
    fn prop_find_first_matches_slice_head(values in prop::collection::vec(any::<i32>(), 0..10)) {
        let sequence = Sequence::of(values.clone());
        prop_assert_eq!(sequence.find_first().into_option(), values.first());
    }
}
