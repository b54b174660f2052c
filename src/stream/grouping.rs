//! Keyed groups produced by [`group_by`](super::group_by).
//!
//! A [`Grouping`] maps each key to the elements that produced it. Keys are
//! unique and their iteration order is unspecified. Within a group, elements
//! keep the relative order they had in the input.
//!
//! # Hashing
//!
//! The hasher is chosen at compile time:
//!
//! | Feature   | Hasher                      |
//! |-----------|-----------------------------|
//! | `fxhash`  | `rustc_hash::FxBuildHasher` |
//! | `ahash`   | `ahash::RandomState`        |
//! | (none)    | `std` `RandomState`         |
//!
//! `fxhash` wins when both features are enabled.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;
use std::ops::Index;

use super::Sequence;

#[cfg(feature = "fxhash")]
type GroupHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type GroupHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type GroupHasher = std::collections::hash_map::RandomState;

/// A mapping from key to the ordered elements sharing that key.
///
/// # Examples
///
/// ```rust
/// use fluentseq::stream::group_by;
///
/// let people = vec![("Bob", 100), ("Bob", 50), ("Alice", 30)];
/// let grouping = group_by(people, |person| person.0);
///
/// assert_eq!(grouping.len(), 2);
/// assert_eq!(grouping["Bob"], [("Bob", 100), ("Bob", 50)]);
/// assert_eq!(grouping.get("Alice").map(<[_]>::len), Some(1));
/// ```
#[derive(Clone)]
pub struct Grouping<K, T> {
    groups: HashMap<K, Vec<T>, GroupHasher>,
}

impl<K, T> Grouping<K, T> {
    /// Returns the number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the total number of elements across all groups.
    pub fn element_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterates over the keys in unspecified order.
    pub fn keys(&self) -> hash_map::Keys<'_, K, Vec<T>> {
        self.groups.keys()
    }

    /// Iterates over the groups in unspecified order.
    pub fn values(&self) -> hash_map::Values<'_, K, Vec<T>> {
        self.groups.values()
    }

    /// Iterates over `(key, group)` pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, Vec<T>> {
        self.groups.iter()
    }

    /// Returns the underlying map.
    pub fn into_map(self) -> HashMap<K, Vec<T>, GroupHasher> {
        self.groups
    }

    /// Converts every group into a [`Sequence`].
    pub fn into_sequences(self) -> impl Iterator<Item = (K, Sequence<T>)> {
        self.groups
            .into_iter()
            .map(|(key, group)| (key, Sequence::of(group)))
    }
}

impl<K: Eq + Hash, T> Grouping<K, T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            groups: HashMap::with_capacity_and_hasher(capacity, GroupHasher::default()),
        }
    }

    /// Appends `element` to the group for `key`, creating it if needed.
    pub(crate) fn push(&mut self, key: K, element: T) {
        self.groups.entry(key).or_default().push(element);
    }

    /// Returns the group for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Returns `true` if a group exists for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.contains_key(key)
    }
}

impl<K, Q, T> Index<&Q> for Grouping<K, T>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = [T];

    /// # Panics
    ///
    /// Panics if there is no group for `key`.
    #[track_caller]
    fn index(&self, key: &Q) -> &[T] {
        match self.get(key) {
            Some(group) => group,
            None => panic!("no group for the given key"),
        }
    }
}

impl<K: Eq + Hash, T: PartialEq> PartialEq for Grouping<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.groups.len() == other.groups.len()
            && self
                .groups
                .iter()
                .all(|(key, group)| other.groups.get(key) == Some(group))
    }
}

impl<K: Eq + Hash, T: Eq> Eq for Grouping<K, T> {}

impl<K: std::fmt::Debug, T: std::fmt::Debug> std::fmt::Debug for Grouping<K, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_map().entries(self.groups.iter()).finish()
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = hash_map::IntoIter<K, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = (&'a K, &'a Vec<T>);
    type IntoIter = hash_map::Iter<'a, K, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Grouping<String, i32>: Send, Sync, Clone);
