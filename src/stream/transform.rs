//! Free transformation functions over raw collections.
//!
//! These functions accept anything that can be iterated, which includes
//! borrowed collections: passing `&vec` maps over `&T` and leaves `vec`
//! untouched.
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::stream::{flat_map, map};
//!
//! let people = vec![("Bob", 50), ("Bob", 100), ("Alice", 30)];
//! let names = map(&people, |person| person.0)
//!     .filter(|name| *name != "Bob")
//!     .into_vec();
//! assert_eq!(names, vec!["Alice"]);
//! assert_eq!(people.len(), 3);
//!
//! let flattened = flat_map(vec![vec![1, 2, 3], vec![4, 5, 6]]);
//! assert_eq!(flattened.slice(), &[1, 2, 3, 4, 5, 6]);
//! ```

use std::hash::Hash;

use super::{Grouping, Sequence};

/// Applies `mapper` to every input element, in order.
///
/// The result has the same length as the input.
pub fn map<I, T, F>(inputs: I, mapper: F) -> Sequence<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> T,
{
    inputs.into_iter().map(mapper).collect()
}

/// Applies a fallible `mapper` to every input element, in order.
///
/// # Errors
///
/// Returns the first error produced by `mapper`; elements after it are not
/// visited.
///
/// # Examples
///
/// ```rust
/// use fluentseq::stream::try_map;
///
/// let parsed = try_map(["1", "2"], str::parse::<i32>);
/// assert_eq!(parsed.unwrap().slice(), &[1, 2]);
///
/// assert!(try_map(["1", "two"], str::parse::<i32>).is_err());
/// ```
pub fn try_map<I, T, E, F>(inputs: I, mapper: F) -> Result<Sequence<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<T, E>,
{
    inputs.into_iter().map(mapper).collect()
}

/// Concatenates the inner collections, outer order first, then inner order.
///
/// Empty inner collections contribute nothing, so the result length is the
/// sum of the inner lengths.
pub fn flat_map<I>(inputs: I) -> Sequence<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    inputs.into_iter().flatten().collect()
}

/// Groups the input elements by the key computed with `key_function`.
///
/// Every element lands in exactly one group, and elements sharing a key keep
/// their original relative order.
///
/// # Examples
///
/// ```rust
/// use fluentseq::stream::group_by;
///
/// let grouping = group_by(1..=6, |n| n % 3);
/// assert_eq!(grouping.get(&0), Some(&[3, 6][..]));
/// assert_eq!(grouping.get(&1), Some(&[1, 4][..]));
/// assert_eq!(grouping.element_count(), 6);
/// ```
pub fn group_by<I, K, F>(inputs: I, mut key_function: F) -> Grouping<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let inputs = inputs.into_iter();
    let mut grouping = Grouping::with_capacity(inputs.size_hint().0.min(16));
    for element in inputs {
        let key = key_function(&element);
        grouping.push(key, element);
    }
    trace_event!(groups = grouping.len(), "grouped elements");
    grouping
}
