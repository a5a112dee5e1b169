//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. Unlike [`Try`](super::Try), neither
//! side means success or failure; the two sides are simply independent
//! alternatives. Only case analysis is provided here. Mapping or binding over
//! a side is left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use cats::container::Either;
//!
//! fn classify(input: &str) -> Either<i64, String> {
//!     input
//!         .parse::<i64>()
//!         .map_or_else(|_| Either::right(input.to_string()), Either::left)
//! }
//!
//! let number = classify("12");
//! assert!(number.is_left());
//!
//! let described = classify("twelve").fold(|n| format!("number {n}"), |s| format!("word {s}"));
//! assert_eq!(described, "word twelve");
//! ```

/// A value of one of two independent types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The first alternative.
    Left(L),
    /// The second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Either;
    ///
    /// assert!(Either::<i32, ()>::left(1).is_left());
    /// assert!(!Either::<(), i32>::right(1).is_left());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    #[must_use]
    pub const fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Converts into the left value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::left(7).into_left(), Some(7));
    /// assert_eq!(Either::<i32, &str>::right("seven").into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into the right value, if any.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents, producing an `Either<&L, &R>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Either;
    ///
    /// let value: Either<String, u8> = Either::left(String::from("owned"));
    /// assert_eq!(value.as_ref(), Either::Left(&String::from("owned")));
    /// assert!(value.is_left());
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Eliminates the value by applying `on_left` or `on_right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Either;
    ///
    /// let value: Either<usize, &str> = Either::left(5);
    /// assert_eq!(value.fold(|n| n * 2, str::len), 10);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Exchanges the two sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Either;
    ///
    /// let value: Either<u8, char> = Either::right('x');
    /// assert_eq!(value.swap(), Either::Left('x'));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the value regardless of side when both sides share a type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cats::container::Either;
    ///
    /// let cached: Either<&str, &str> = Either::left("hit");
    /// let fetched: Either<&str, &str> = Either::right("miss");
    /// assert_eq!(cached.into_inner(), "hit");
    /// assert_eq!(fetched.into_inner(), "miss");
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);
