//! Ordered, finite sequence with chainable transformations.
//!
//! This module provides [`Sequence`], an immutable wrapper around an ordered
//! collection. Every transformation returns a new `Sequence` built in fresh
//! storage; none writes through to storage another value can observe.
//!
//! # Overview
//!
//! | Kind           | Operations |
//! |----------------|------------|
//! | construction   | `of`, `new`, `From<Vec<T>>`, `FromIterator` |
//! | transformation | `filter`, `sort`, `map`, `flat_map`, `try_filter`, `try_map` |
//! | terminal       | `slice`, `into_vec`, `find_first`, `any_match`, `none_match`, `all_match` |
//!
//! Consuming transformations (`filter`, `sort`) reuse the elements they are
//! given. The `*_ref` variants work from a borrowed sequence and clone the
//! elements they keep, leaving the receiver untouched.
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::stream::Sequence;
//!
//! let numbers = Sequence::of(vec![5, 1, 4, 2, 3]);
//! let result = numbers
//!     .filter(|n| *n > 1)
//!     .sort(|a, b| a < b)
//!     .into_vec();
//! assert_eq!(result, vec![2, 3, 4, 5]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use super::grouping::Grouping;
use super::sort::merge_sort;
use crate::control::Maybe;

/// An ordered, finite, immutable sequence of elements.
///
/// Element order is insertion order until [`Sequence::sort`] (or one of its
/// variants) re-orders it.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `of`           | O(1)       |
/// | `filter`       | O(n)       |
/// | `sort`         | O(n log n) |
/// | `any_match`    | O(n)       |
/// | `find_first`   | O(1)       |
/// | `slice`        | O(1)       |
///
/// # Examples
///
/// ```rust
/// use fluentseq::stream::Sequence;
///
/// let sequence: Sequence<i32> = (1..=3).collect();
/// assert_eq!(sequence.slice(), &[1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence<T> {
    /// The backing storage, exclusively owned by this sequence.
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Wraps `elements` without copying them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let sequence = Sequence::of(vec!["a", "b"]);
    /// assert_eq!(sequence.len(), 2);
    ///
    /// let empty: Sequence<i32> = Sequence::of(Vec::new());
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn of(elements: Vec<T>) -> Self {
        Self { elements }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a read-only view of the elements in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let filtered = Sequence::of(vec![1, 2, 3]).filter(|n| *n > 1);
    /// assert_eq!(filtered.slice(), &[2, 3]);
    /// ```
    #[inline]
    pub fn slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the elements for which `predicate` returns `true`.
    ///
    /// Elements are visited in order and the kept ones retain their relative
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let odd = Sequence::of(vec![1, 2, 3, 4, 5]).filter(|n| n % 2 == 1);
    /// assert_eq!(odd.slice(), &[1, 3, 5]);
    /// ```
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    /// Like [`Sequence::filter`], but stops at the first `Err` returned by
    /// `predicate` and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`. The partially built
    /// result is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let parsed = Sequence::of(vec!["1", "20", "3"])
    ///     .try_filter(|text| text.parse::<i32>().map(|n| n > 2));
    /// assert_eq!(parsed.unwrap().slice(), &["20", "3"]);
    ///
    /// let failed = Sequence::of(vec!["1", "x"])
    ///     .try_filter(|text| text.parse::<i32>().map(|n| n > 2));
    /// assert!(failed.is_err());
    /// ```
    pub fn try_filter<P, E>(self, mut predicate: P) -> Result<Self, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        let mut kept = Vec::new();
        for element in self.elements {
            if predicate(&element)? {
                kept.push(element);
            }
        }
        Ok(Self::of(kept))
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Sorts the elements with the strict weak ordering implied by `less`.
    ///
    /// `less(a, b)` must return `true` when `a` strictly precedes `b`. The
    /// sort is stable: elements that neither precede nor follow each other
    /// keep their original relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let people = Sequence::of(vec![("Bob", 100), ("Bob", 50), ("Alice", 30)]);
    /// let by_name = people.sort(|a, b| a.0 < b.0);
    /// assert_eq!(by_name.slice(), &[("Alice", 30), ("Bob", 100), ("Bob", 50)]);
    /// ```
    pub fn sort<F>(self, mut less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        trace_event!(elements = self.len(), "sorting sequence");
        Self::of(merge_sort(self.elements, &mut less))
    }

    /// Sorts with a three-way comparator, stably.
    pub fn sort_by<F>(self, mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort(|a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts by the key extracted with `key`, stably.
    ///
    /// `key` is called twice per comparison, so O(n log n) times in total.
    /// Keys that are expensive to compute are better extracted once with
    /// [`Sequence::map`] before sorting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let words = Sequence::of(vec!["ccc", "a", "bb", "d"]);
    /// assert_eq!(words.sort_by_key(|w| w.len()).slice(), &["a", "d", "bb", "ccc"]);
    /// ```
    pub fn sort_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort(|a, b| key(a) < key(b))
    }

    // =========================================================================
    // Type-changing Transformations
    // =========================================================================

    /// Applies `mapper` to every element, preserving order and length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let lengths = Sequence::of(vec!["a", "bb"]).map(str::len);
    /// assert_eq!(lengths.slice(), &[1, 2]);
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Sequence<U>
    where
        F: FnMut(T) -> U,
    {
        self.elements.into_iter().map(mapper).collect()
    }

    /// Applies a fallible `mapper` to every element.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    pub fn try_map<U, E, F>(self, mapper: F) -> Result<Sequence<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        self.elements.into_iter().map(mapper).collect()
    }

    /// Maps every element to a collection and concatenates the results in
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let repeated = Sequence::of(vec![1, 2, 3]).flat_map(|n| vec![n; n]);
    /// assert_eq!(repeated.slice(), &[1, 2, 2, 3, 3, 3]);
    /// ```
    pub fn flat_map<I, F>(self, mapper: F) -> Sequence<I::Item>
    where
        I: IntoIterator,
        F: FnMut(T) -> I,
    {
        self.elements.into_iter().flat_map(mapper).collect()
    }

    /// Groups the elements by the key extracted with `key`.
    ///
    /// See [`group_by`](super::group_by).
    pub fn group_by<K, F>(self, key: F) -> Grouping<K, T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        super::group_by(self.elements, key)
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// Stops at the first match. An empty sequence yields `false`.
    #[inline]
    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// Returns `true` if no element satisfies `predicate`.
    ///
    /// Stops at the first match. An empty sequence yields `true`. Always
    /// equal to `!self.any_match(predicate)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let numbers = Sequence::of(vec![5, 4, 3, 2, 1]);
    /// assert!(!numbers.none_match(|n| *n == 1));
    /// assert!(numbers.none_match(|n| *n == 6));
    /// ```
    #[inline]
    pub fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first failure. An empty sequence yields `true`.
    #[inline]
    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    /// Counts the elements satisfying `predicate`.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .iter()
            .filter(|element| predicate(element))
            .count()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the first element, or `Absent` for an empty sequence.
    ///
    /// The returned `Maybe` borrows from the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let numbers = Sequence::of(vec![5, 4, 3]);
    /// assert_eq!(*numbers.find_first().get(), 5);
    ///
    /// let none = numbers.filter(|n| *n > 5);
    /// assert!(!none.find_first().is_present());
    /// ```
    #[inline]
    pub fn find_first(&self) -> Maybe<&T> {
        self.elements.first().into()
    }

    /// Returns the first element satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Maybe<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .iter()
            .find(|element| predicate(element))
            .into()
    }

    /// Returns the first element by value, dropping the rest.
    pub fn into_first(self) -> Maybe<T> {
        self.elements.into_iter().next().into()
    }
}

impl<T: Clone> Sequence<T> {
    /// Like [`Sequence::filter`], but leaves `self` untouched and clones the
    /// kept elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// let numbers = Sequence::of(vec![1, 2, 3]);
    /// let large = numbers.filter_ref(|n| *n > 1);
    /// assert_eq!(large.slice(), &[2, 3]);
    /// assert_eq!(numbers.slice(), &[1, 2, 3]);
    /// ```
    pub fn filter_ref<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Like [`Sequence::sort`], but leaves `self` untouched.
    pub fn sort_ref<F>(&self, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.clone().sort(less)
    }
}

impl<T: Ord> Sequence<T> {
    /// Sorts in ascending natural order, stably.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    ///
    /// assert_eq!(Sequence::of(vec![3, 1, 2]).sorted().slice(), &[1, 2, 3]);
    /// ```
    pub fn sorted(self) -> Self {
        self.sort(|a, b| a < b)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::of(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self::of(Vec::from(elements))
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_vec()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.slice()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::of)
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Sequence<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Sequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_of_keeps_insertion_order() {
        let sequence = Sequence::of(vec![3, 1, 2]);
        assert_eq!(sequence.slice(), &[3, 1, 2]);
    }

    #[rstest]
    fn test_of_does_not_reallocate() {
        let elements = vec![1, 2, 3];
        let pointer = elements.as_ptr();
        let sequence = Sequence::of(elements);
        assert_eq!(sequence.slice().as_ptr(), pointer);
    }

    #[rstest]
    fn test_filter_ref_leaves_receiver_untouched() {
        let sequence = Sequence::of(vec![1, 2, 3, 4]);
        let even = sequence.filter_ref(|n| n % 2 == 0);
        assert_eq!(even.slice(), &[2, 4]);
        assert_eq!(sequence.slice(), &[1, 2, 3, 4]);
    }

    #[rstest]
    fn test_sort_ref_leaves_receiver_untouched() {
        let sequence = Sequence::of(vec![2, 3, 1]);
        let sorted = sequence.sort_ref(|a, b| a < b);
        assert_eq!(sorted.slice(), &[1, 2, 3]);
        assert_eq!(sequence.slice(), &[2, 3, 1]);
    }

    #[rstest]
    fn test_sort_by_is_stable() {
        let sequence = Sequence::of(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        let sorted = sequence.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(sorted.slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_into_first() {
        assert_eq!(Sequence::of(vec![7, 8]).into_first(), Maybe::present(7));
        assert_eq!(Sequence::<i32>::new().into_first(), Maybe::absent());
    }

    #[rstest]
    fn test_find_returns_first_match() {
        let sequence = Sequence::of(vec![1, 4, 6, 9]);
        assert_eq!(sequence.find(|n| n % 2 == 0), Maybe::present(&4));
        assert_eq!(sequence.find(|n| *n > 10), Maybe::absent());
    }

    #[rstest]
    fn test_count() {
        let sequence = Sequence::of(vec![1, 2, 3, 4, 5]);
        assert_eq!(sequence.count(|n| *n > 2), 3);
    }

    #[rstest]
    fn test_try_map_stops_at_first_error() {
        let mut visited = Vec::new();
        let result: Result<Sequence<i32>, String> =
            Sequence::of(vec![1, 2, 3]).try_map(|n| {
                visited.push(n);
                if n == 2 { Err(format!("bad {n}")) } else { Ok(n) }
            });
        assert_eq!(result, Err("bad 2".to_string()));
        assert_eq!(visited, vec![1, 2]);
    }

    #[rstest]
    fn test_display_empty_sequence() {
        let sequence: Sequence<i32> = Sequence::new();
        assert_eq!(format!("{sequence}"), "[]");
    }

    #[rstest]
    fn test_display_multiple_elements() {
        let sequence = Sequence::of(vec![1, 2, 3]);
        assert_eq!(format!("{sequence}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_debug_matches_vec() {
        let sequence = Sequence::of(vec!["a", "b"]);
        assert_eq!(format!("{sequence:?}"), format!("{:?}", vec!["a", "b"]));
    }
}
