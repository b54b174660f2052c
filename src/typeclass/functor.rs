//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to every value inside a container while
//! keeping the container's shape: a `Sequence` keeps its length and order, a
//! `Maybe` stays present or absent.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::control::Maybe;
//! use fluentseq::stream::Sequence;
//! use fluentseq::typeclass::Functor;
//!
//! let doubled = Sequence::of(vec![1, 2, 3]).fmap(|x| x * 2);
//! assert_eq!(doubled.slice(), &[2, 4, 6]);
//!
//! let length = Maybe::present("four").fmap(str::len);
//! assert_eq!(length, Maybe::present(4));
//! ```

use super::higher::TypeConstructor;
use crate::control::Maybe;
use crate::stream::Sequence;

/// A type class for containers whose values can be mapped.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every contained value, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to references of every contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::stream::Sequence;
    /// use fluentseq::typeclass::Functor;
    ///
    /// let words = Sequence::of(vec!["a".to_string(), "bcd".to_string()]);
    /// let lengths = words.fmap_ref(|word| word.len());
    /// assert_eq!(lengths.slice(), &[1, 3]);
    /// assert_eq!(words.len(), 2);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every contained value with `value`.
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the contained values, keeping the shape.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Sequence<T> Implementation
// =============================================================================

impl<T> Functor for Sequence<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_ref().map(function)
    }
}
