//! Extracting payloads from `Option` and [`Try`].
//!
//! [`unwrap`] and [`unwrap_or_else`] work uniformly over both containers
//! through the [`Unwrap`] trait:
//!
//! - `unwrap` returns the payload and panics when there is none. Reaching that
//!   panic is a bug in the caller, not a recoverable condition.
//! - `unwrap_or_else` returns the payload or the given fallback and never
//!   panics.
//!
//! # Examples
//!
//! ```rust
//! use cats::container::Try;
//! use cats::unwrap::{unwrap, unwrap_or_else};
//!
//! assert_eq!(unwrap(Some(1)), 1);
//! assert_eq!(unwrap(Try::success("done")), "done");
//!
//! assert_eq!(unwrap_or_else(None, 7), 7);
//! let failed: Try<i32> = Try::failure(cats::error::Error::many(Vec::new()));
//! assert_eq!(unwrap_or_else(failed, 7), 7);
//! ```

use crate::container::Try;

/// A container whose payload can be extracted.
pub trait Unwrap {
    /// The payload type.
    type Value;

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics if the container holds no payload.
    fn unwrap_value(self) -> Self::Value;

    /// Returns the payload, or `fallback` if there is none.
    fn unwrap_value_or(self, fallback: Self::Value) -> Self::Value;
}

impl<T> Unwrap for Option<T> {
    type Value = T;

    #[inline]
    #[track_caller]
    fn unwrap_value(self) -> T {
        let Some(value) = self else {
            panic!("cannot unwrap the value of None");
        };
        value
    }

    #[inline]
    fn unwrap_value_or(self, fallback: T) -> T {
        self.unwrap_or(fallback)
    }
}

impl<T> Unwrap for Try<T> {
    type Value = T;

    #[inline]
    #[track_caller]
    fn unwrap_value(self) -> T {
        self.unwrap()
    }

    #[inline]
    fn unwrap_value_or(self, fallback: T) -> T {
        self.unwrap_or(fallback)
    }
}

/// Returns the payload of `container`.
///
/// # Panics
///
/// Panics on `None` with `"cannot unwrap the value of None"` and on a
/// `Failure` with `"cannot unwrap the value of a failure: <message>"`.
///
/// # Examples
///
/// ```rust,should_panic
/// use cats::unwrap::unwrap;
///
/// let nothing: Option<u8> = None;
/// unwrap(nothing);
/// ```
#[inline]
#[track_caller]
pub fn unwrap<C: Unwrap>(container: C) -> C::Value {
    container.unwrap_value()
}

/// Returns the payload of `container`, or `fallback` if there is none.
///
/// The fallback is a value. To compute a replacement from the error of a
/// [`Try`], use [`Try::recover_with`].
#[inline]
pub fn unwrap_or_else<C: Unwrap>(container: C, fallback: C::Value) -> C::Value {
    container.unwrap_value_or(fallback)
}
