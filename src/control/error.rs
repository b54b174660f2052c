//! Error types for absence handling.
//!
//! This module provides the error reported when a value is requested from
//! an absent [`Maybe`](super::Maybe) through one of its fallible accessors.

/// Represents an attempt to extract a value from an absent `Maybe`.
///
/// Returned by [`Maybe::try_get`](super::Maybe::try_get) instead of the
/// panic raised by [`Maybe::get`](super::Maybe::get).
///
/// # Examples
///
/// ```rust
/// use fluentseq::control::AbsentValueError;
///
/// let error = AbsentValueError {
///     method_name: "try_get",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "Maybe::try_get: no value is present"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsentValueError {
    /// The name of the accessor that found no value.
    pub method_name: &'static str,
}

impl AbsentValueError {
    pub(crate) const fn new(method_name: &'static str) -> Self {
        Self { method_name }
    }
}

impl std::fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Maybe::{}: no value is present",
            self.method_name
        )
    }
}

impl std::error::Error for AbsentValueError {}
