//! Control structures for absence handling.
//!
//! - [`Maybe`]: A value that is either present or absent
//! - [`AbsentValueError`]: The error reported when an absent value is requested
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::control::Maybe;
//!
//! fn first_even(numbers: &[i32]) -> Maybe<i32> {
//!     numbers.iter().copied().find(|n| n % 2 == 0).into()
//! }
//!
//! assert_eq!(first_even(&[1, 3, 4, 6]), Maybe::present(4));
//! assert!(first_even(&[1, 3]).is_absent());
//! ```

mod error;
mod maybe;

pub use error::AbsentValueError;
pub use maybe::Maybe;
