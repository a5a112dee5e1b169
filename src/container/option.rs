//! Extensions for the standard `Option<T>`.
//!
//! Rust's `Option` already is the presence/absence container: `Some(value)` or
//! `None`, with exhaustive matching and structural equality. This module adds
//! the operations the rest of the crate builds on.
//!
//! # Binding and default values
//!
//! [`OptionExt::bind_skipping_defaults`] treats a present value that equals
//! `T::default()` as absent. That is **not** a lawful functor map: mapping over
//! `Some(0)` gives `None` instead of `Some(f(0))`. Use it only where a default
//! value really does mean "nothing here". [`OptionExt::bind`] (like
//! [`Option::map`]) always applies the function to a present value.
//!
//! ```rust
//! use cats::container::OptionExt;
//!
//! let count: Option<u32> = Some(0);
//! assert_eq!(count.bind_skipping_defaults(|n| n + 1), None);
//! assert_eq!(count.bind(|n| n + 1), Some(1));
//! ```

/// Extension methods for `Option<T>`.
pub trait OptionExt<T>: Sized {
    /// Applies `function` to a present value that differs from
    /// `T::default()`, otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::OptionExt;
    ///
    /// assert_eq!(Some(3).bind_skipping_defaults(|n| n * 2), Some(6));
    /// assert_eq!(Some(String::new()).bind_skipping_defaults(|s| s.len()), None);
    /// assert_eq!(None::<i32>.bind_skipping_defaults(|n| n * 2), None);
    /// ```
    fn bind_skipping_defaults<U, F>(self, function: F) -> Option<U>
    where
        T: Default + PartialEq,
        F: FnOnce(T) -> U;

    /// Applies `function` to a present value.
    ///
    /// This is the lawful counterpart of
    /// [`bind_skipping_defaults`](Self::bind_skipping_defaults) and behaves
    /// exactly like [`Option::map`].
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U;

    /// Calls `action` with a present value and returns the option unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::OptionExt;
    ///
    /// let mut seen = Vec::new();
    /// let value = Some(4).tap_some(|n| seen.push(*n));
    /// assert_eq!(value, Some(4));
    /// assert_eq!(seen, vec![4]);
    /// ```
    #[must_use]
    fn tap_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T);
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn bind_skipping_defaults<U, F>(self, function: F) -> Option<U>
    where
        T: Default + PartialEq,
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) if value != T::default() => Some(function(value)),
            Some(_) | None => None,
        }
    }

    #[inline]
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(function)
    }

    #[inline]
    fn tap_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self {
            action(value);
        }
        self
    }
}

/// Free-function form of [`OptionExt::bind_skipping_defaults`].
#[inline]
pub fn bind_skipping_defaults<T, U, F>(option: Option<T>, function: F) -> Option<U>
where
    T: Default + PartialEq,
    F: FnOnce(T) -> U,
{
    option.bind_skipping_defaults(function)
}
