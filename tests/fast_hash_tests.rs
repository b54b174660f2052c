//! Tests for `group_by` under the fast hash feature flags.
//!
//! `fxhash` and `ahash` swap the hasher behind `Grouping`. Grouping must
//! stay complete and keep input order within each group whichever hasher
//! is active.

#![cfg(any(feature = "fxhash", feature = "ahash"))]

use fluentseq::stream::{Sequence, group_by};
use rstest::rstest;

// =============================================================================
// Completeness
// =============================================================================

#[rstest]
#[case(0, 1)]
#[case(100, 7)]
#[case(10_000, 97)]
fn test_every_element_lands_in_its_key_group(#[case] count: u32, #[case] modulus: u32) {
    let grouping = group_by(0..count, |n| n % modulus);

    assert_eq!(grouping.element_count(), count as usize);
    assert_eq!(grouping.len(), count.min(modulus) as usize);
    for n in 0..count {
        let group = grouping.get(&(n % modulus)).expect("group exists");
        assert!(group.contains(&n), "{n} missing from its group");
    }
    assert!(!grouping.contains_key(&modulus));
}

#[rstest]
fn test_string_keys_large_scale() {
    const COUNT: usize = 1_000;

    let words: Vec<String> = (0..COUNT).map(|i| format!("key_{}", i % 50)).collect();
    let grouping = Sequence::of(words).group_by(Clone::clone);

    assert_eq!(grouping.len(), 50);
    for i in 0..50 {
        let key = format!("key_{i}");
        assert_eq!(grouping.get(&key).map(<[_]>::len), Some(COUNT / 50));
    }
}

// =============================================================================
// Order within groups
// =============================================================================

#[rstest]
fn test_groups_keep_input_order() {
    let grouping = group_by(0..1_000_u32, |n| n % 3);

    for (key, group) in &grouping {
        let expected: Vec<u32> = (0..1_000).filter(|n| n % 3 == *key).collect();
        assert_eq!(group, &expected);
    }
}

#[rstest]
fn test_identical_inputs_group_identically() {
    let input = vec![("b", 2), ("a", 1), ("b", 1), ("c", 3), ("a", 2)];

    let first = group_by(input.clone(), |pair| pair.0);
    let second = group_by(input, |pair| pair.0);

    assert_eq!(first, second);
    assert_eq!(first["b"], [("b", 2), ("b", 1)]);
}
