//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<T>` type, which is either `Present(T)`
//! or `Absent`. Partial lookups such as
//! [`Sequence::find_first`](crate::stream::Sequence::find_first) return it
//! so that the caller has to acknowledge the empty case before reaching the
//! value.
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::control::Maybe;
//!
//! let present = Maybe::present(42);
//! let absent: Maybe<i32> = Maybe::absent();
//!
//! assert!(present.is_present());
//! assert!(!absent.is_present());
//!
//! assert_eq!(present.map(|x| x * 2).get(), 84);
//! assert_eq!(absent.get_or(0), 0);
//! ```

use std::fmt;

use super::AbsentValueError;

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use fluentseq::control::Maybe;
///
/// let value = Maybe::present("hello");
/// match value {
///     Maybe::Present(text) => assert_eq!(text, "hello"),
///     Maybe::Absent => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value is present.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::control::Maybe;
    ///
    /// assert!(Maybe::present(1).is_present());
    /// assert!(!Maybe::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if no value is present. Use [`Maybe::try_get`] to receive an
    /// error instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).get(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Maybe::get()` on an `Absent` value"),
        }
    }

    /// Returns the contained value, or an [`AbsentValueError`] if there is
    /// none.
    ///
    /// # Errors
    ///
    /// Returns `AbsentValueError` when called on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).try_get(), Ok(5));
    /// assert!(Maybe::<i32>::absent().try_get().is_err());
    /// ```
    #[inline]
    pub fn try_get(self) -> Result<T, AbsentValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AbsentValueError::new("try_get")),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::control::Maybe;
    ///
    /// assert_eq!(Maybe::present("four").map(str::len), Maybe::present(4));
    /// assert_eq!(Maybe::<&str>::absent().map(str::len), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation that may itself produce no value.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise the `Maybe` built by `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => function(),
        }
    }

    /// Runs `action` with the contained value, if any.
    #[inline]
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            action(value);
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T: Clone> Maybe<&T> {
    /// Maps a `Maybe<&T>` to a `Maybe<T>` by cloning the contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::control::Maybe;
    ///
    /// let name = String::from("Alice");
    /// let borrowed = Maybe::present(&name);
    /// assert_eq!(borrowed.cloned(), Maybe::present("Alice".to_string()));
    /// ```
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(Clone::clone)
    }
}

impl<T: Copy> Maybe<&T> {
    /// Maps a `Maybe<&T>` to a `Maybe<T>` by copying the contents.
    #[inline]
    pub fn copied(self) -> Maybe<T> {
        self.map(|value| *value)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes `Present(v)` and `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync);
static_assertions::assert_impl_all!(Maybe<&'static str>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_present_construction() {
        let value = Maybe::present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_absent_construction() {
        let value: Maybe<i32> = Maybe::absent();
        assert!(value.is_absent());
        assert!(!value.is_present());
    }

    #[rstest]
    #[should_panic(expected = "called `Maybe::get()` on an `Absent` value")]
    fn test_get_on_absent_panics() {
        let value: Maybe<i32> = Maybe::absent();
        value.get();
    }

    #[rstest]
    fn test_try_get_reports_method_name() {
        let error = Maybe::<i32>::absent().try_get().unwrap_err();
        assert_eq!(error.method_name, "try_get");
    }

    #[rstest]
    #[case(Some(3), Maybe::Present(3))]
    #[case(None, Maybe::Absent)]
    fn test_option_conversion(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
        let maybe: Maybe<i32> = option.into();
        assert_eq!(maybe, expected);
        let back: Option<i32> = maybe.into();
        assert_eq!(back, option);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Maybe::present(1)), "Present(1)");
        assert_eq!(format!("{:?}", Maybe::<i32>::absent()), "Absent");
    }
}
