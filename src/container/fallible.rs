//! Try type - a computation that either succeeded or failed.
//!
//! `Try<T>` is `Success(T)` or `Failure(Error)`. The failure side is always an
//! explicit [`Error`] value, so failures are data that callers inspect rather
//! than panics that unwind.
//!
//! `Try` has no `map` or `and_then`. Failable steps are composed
//! with the [`chain`](crate::chain) combinators and pattern matching, or by
//! converting into a `Result` and using `?`.
//!
//! # Examples
//!
//! ```rust
//! use cats::container::Try;
//!
//! fn parse(input: &str) -> Try<i32> {
//!     Try::catching(|| input.parse::<i32>())
//! }
//!
//! match parse("42") {
//!     Try::Success(value) => assert_eq!(value, 42),
//!     Try::Failure(error) => panic!("unexpected failure: {error}"),
//! }
//!
//! let failed = parse("forty-two");
//! assert!(failed.is_failure());
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```

use crate::error::{Error, Exceptional};

/// The outcome of a computation that may fail.
///
/// # Examples
///
/// ```rust
/// use cats::container::Try;
///
/// let success: Try<i32> = Try::success(1);
/// assert!(success.is_success());
/// assert_eq!(success.unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a `Try` may be a `Failure`, which should be handled"]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(Error),
}

impl<T> Try<T> {
    /// Creates a successful outcome.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn failure(error: Error) -> Self {
        Self::Failure(error)
    }

    /// Runs `computation` and wraps its error, if any, as an
    /// [`Exceptional`] failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Try;
    ///
    /// let outcome = Try::catching(|| "12".parse::<u8>());
    /// assert_eq!(outcome, Try::success(12));
    ///
    /// let outcome = Try::catching(|| "300".parse::<u8>());
    /// assert_eq!(outcome.into_failure().map(|error| error.code()), Some(0));
    /// ```
    pub fn catching<E, F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        match computation() {
            Ok(value) => Self::Success(value),
            Err(fault) => {
                tracing::debug!(fault = %fault, "computation failed, wrapping fault");
                Self::Failure(Error::Exceptional(Exceptional::new(fault)))
            }
        }
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts into the success value, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Try;
    /// use cats::error::Error;
    ///
    /// assert_eq!(Try::success(3).into_success(), Some(3));
    /// assert_eq!(Try::<i32>::failure(Error::many(Vec::new())).into_success(), None);
    /// ```
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the error, discarding any success value.
    #[inline]
    pub fn into_failure(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Try;
    ///
    /// let outcome = Try::success(String::from("kept"));
    /// assert_eq!(outcome.as_success().map(String::len), Some(4));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the error if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Try;
    /// use cats::error::{Error, MANY_ERRORS_CODE};
    ///
    /// let outcome: Try<i32> = Try::failure(Error::many(Vec::new()));
    /// assert_eq!(outcome.as_failure().map(Error::code), Some(MANY_ERRORS_CODE));
    /// assert_eq!(Try::success(1).as_failure(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_failure(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result` so failures can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the contained [`Error`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Try;
    /// use cats::error::Error;
    ///
    /// fn total(parts: &[&str]) -> Result<u32, Error> {
    ///     let mut sum = 0;
    ///     for part in parts {
    ///         sum += Try::catching(|| part.parse::<u32>()).into_result()?;
    ///     }
    ///     Ok(sum)
    /// }
    ///
    /// assert_eq!(total(&["1", "2"]), Ok(3));
    /// assert!(total(&["1", "two"]).is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. Calling `unwrap` on a failure is a logic
    /// error in the caller.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("cannot unwrap the value of a failure: {error}")
            }
        }
    }

    /// Returns the success value, or `fallback` if this is a `Failure`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// This is the lazy counterpart of [`unwrap_or`](Self::unwrap_or). The
    /// free function [`unwrap_or_else`](crate::unwrap::unwrap_or_else) takes a
    /// fallback value instead of a closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Try;
    ///
    /// let length = Try::catching(|| "x".parse::<usize>())
    ///     .recover_with(|error| error.message().len());
    /// assert_eq!(length, "invalid digit found in string".len());
    /// ```
    #[inline]
    pub fn recover_with<F>(self, recover: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => recover(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<Error>,
{
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e.into())`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Try<T>> for Result<T, Error> {
    #[inline]
    fn from(outcome: Try<T>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(Try<String>: Send, Sync);
