//! Sequence pipelines.
//!
//! This module provides the transformation engine:
//!
//! - [`Sequence`]: An ordered, immutable sequence with chainable operations
//! - [`Grouping`]: Keyed groups of elements
//! - [`merge_sort`]: The stable merge sort behind [`Sequence::sort`]
//! - [`map`], [`try_map`], [`flat_map`], [`group_by`]: Free functions that
//!   change the element type or the container shape
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::stream::{Sequence, group_by, map};
//!
//! let people = vec![("Bob", 100), ("Bob", 50), ("Alice", 30)];
//!
//! let youngest = Sequence::of(people.clone())
//!     .sort(|a, b| a.1 < b.1)
//!     .find_first()
//!     .cloned();
//! assert_eq!(youngest.get(), ("Alice", 30));
//!
//! let names = map(&people, |person| person.0).into_vec();
//! assert_eq!(names, vec!["Bob", "Bob", "Alice"]);
//!
//! let by_name = group_by(people, |person| person.0);
//! assert_eq!(by_name["Bob"].len(), 2);
//! ```

mod grouping;
mod sequence;
mod sort;
mod transform;

pub use grouping::Grouping;
pub use sequence::Sequence;
pub use sort::merge_sort;
pub use transform::{flat_map, group_by, map, try_map};
