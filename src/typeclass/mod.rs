//! Type class traits for the crate's containers.
//!
//! - [`TypeConstructor`]: Emulates higher-kinded types with GATs
//! - [`Functor`]: Mapping over container values
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! Both [`Sequence`](crate::stream::Sequence) and
//! [`Maybe`](crate::control::Maybe) implement all three, so code written
//! against the traits can change element types generically:
//!
//! ```rust
//! use fluentseq::control::Maybe;
//! use fluentseq::stream::Sequence;
//! use fluentseq::typeclass::{Foldable, Functor};
//!
//! fn describe<C>(container: C) -> C::WithType<String>
//! where
//!     C: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Sequence::of(vec![1, 2])).slice(), &["#1", "#2"]);
//! assert_eq!(describe(Maybe::present(7)), Maybe::present("#7".to_string()));
//! assert_eq!(describe(Sequence::of(vec![1, 2])).to_list().len(), 2);
//! ```

mod foldable;
mod functor;
mod higher;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
