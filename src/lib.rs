//! # fluentseq
//!
//! Fluent, type-safe transformation pipelines over in-memory sequences.
//!
//! ## Overview
//!
//! - **Sequences**: [`Sequence`](stream::Sequence) with chained `filter`,
//!   `sort`, `map`, `flat_map` and terminal `find_first`, `any_match`,
//!   `none_match`, `slice`
//! - **Free functions**: [`map`](stream::map), [`flat_map`](stream::flat_map),
//!   [`group_by`](stream::group_by) over any iterable collection
//! - **Stable sorting**: a merge sort driven by a `less` predicate
//! - **Absence handling**: [`Maybe`](control::Maybe), a `Present | Absent`
//!   sum type for partial results
//! - **Type Classes**: `Functor` and `Foldable` over the crate's containers
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Type class traits (`Functor`, `Foldable`)
//! - `serde`: `Serialize` / `Deserialize` for `Sequence` and `Maybe`
//! - `fxhash`: Group keys hashed with `rustc-hash`
//! - `ahash`: Group keys hashed with `ahash`
//! - `tracing`: `trace`-level events from sorting and grouping
//! - `full`: `typeclass`, `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use fluentseq::prelude::*;
//!
//! let people = vec![("Bob", 50), ("Bob", 100), ("Alice", 30)];
//!
//! let names = map(&people, |person| person.0)
//!     .filter(|name| *name != "Bob")
//!     .into_vec();
//! assert_eq!(names, vec!["Alice"]);
//!
//! let oldest = Sequence::of(people)
//!     .sort(|a, b| a.1 > b.1)
//!     .into_first();
//! assert_eq!(oldest, Maybe::present(("Bob", 100)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `tracing` event at `trace` level when the `tracing` feature is
/// enabled, and nothing otherwise.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($argument)*);
        }
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fluentseq::prelude::*;
/// ```
pub mod prelude {

    pub use crate::control::*;

    pub use crate::stream::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;

pub mod stream;

#[cfg(feature = "typeclass")]
pub mod typeclass;
