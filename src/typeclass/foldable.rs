//! Foldable type class - folding over data structures.
//!
//! A `Foldable` reduces the values of a container into a single summary
//! value, visiting them in container order.
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::control::Maybe;
//! use fluentseq::stream::Sequence;
//! use fluentseq::typeclass::Foldable;
//!
//! let sum = Sequence::of(vec![1, 2, 3, 4, 5]).fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let absent: Maybe<i32> = Maybe::absent();
//! assert_eq!(absent.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use crate::control::Maybe;
use crate::stream::Sequence;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// - `length`, `to_list`, `find`, `exists`, `for_all`
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    /// use fluentseq::typeclass::Foldable;
    ///
    /// let letters = Sequence::of(vec!["a", "b", "c"]);
    /// let joined = letters.fold_right(String::new(), |element, accumulator| accumulator + element);
    /// assert_eq!(joined, "cba");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Counts the elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, in order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Maybe<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Maybe::Absent, |accumulator, element| {
            if accumulator.is_present() {
                accumulator
            } else if predicate(&element) {
                Maybe::Present(element)
            } else {
                Maybe::Absent
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        Foldable::find(self.clone(), |element| predicate(element)).is_present()
    }

    /// Checks if all elements satisfy the predicate. Empty structures yield
    /// `true`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Sequence<T> Implementation
// =============================================================================

impl<T> Foldable for Sequence<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn to_list(self) -> Vec<T> {
        self.into_vec()
    }

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.any_match(predicate)
    }

    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.all_match(predicate)
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Foldable for Maybe<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Present(value) => function(init, value),
            Self::Absent => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Present(value) => function(value, init),
            Self::Absent => init,
        }
    }

    fn length(&self) -> usize {
        usize::from(self.is_present())
    }
}
