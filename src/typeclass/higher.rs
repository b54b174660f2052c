//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Sequence<_>`
//! directly. [`TypeConstructor`] names the element type (`Inner`) and the
//! same constructor applied to another type (`WithType<B>`), which is enough
//! to write [`Functor`](super::Functor) and [`Foldable`](super::Foldable)
//! once for every container in this crate.
//!
//! # Example
//!
//! ```rust
//! use fluentseq::stream::Sequence;
//! use fluentseq::typeclass::TypeConstructor;
//!
//! fn empty_like<C: TypeConstructor>(_container: &C) -> C::WithType<String>
//! where
//!     C::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers = Sequence::of(vec![1, 2, 3]);
//! let strings: Sequence<String> = empty_like(&numbers);
//! assert!(strings.is_empty());
//! ```

use crate::control::Maybe;
use crate::stream::Sequence;

/// A type constructor applied to the type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Sequence<T> {
    type Inner = T;
    type WithType<B> = Sequence<B>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}
