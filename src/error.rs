//! Data-carried error values.
//!
//! [`Error`] is the payload of [`Try::Failure`](crate::container::Try). It is a
//! closed enum with two variants:
//!
//! - [`Exceptional`]: wraps a native fault (any [`std::error::Error`]) and
//!   reports the fault's message.
//! - [`ManyErrors`]: an ordered aggregate of other errors, identified by the
//!   fixed [`MANY_ERRORS_CODE`].
//!
//! Errors here are ordinary values. They are returned, inspected and
//! aggregated, never raised.
//!
//! # Examples
//!
//! ```rust
//! use cats::error::{Error, ManyErrors, MANY_ERRORS_CODE};
//!
//! let parse = "x".parse::<i32>().unwrap_err();
//! let first = Error::exceptional(parse);
//! let second = Error::exceptional(std::io::Error::other("disk full"));
//!
//! let many = Error::many(vec![first, second]);
//! assert_eq!(many.code(), MANY_ERRORS_CODE);
//! assert_eq!(many.message(), "invalid digit found in string, disk full");
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// The code carried by every [`ManyErrors`] aggregate.
pub const MANY_ERRORS_CODE: i32 = -2_000_000_006;

/// A native fault that can be wrapped by [`Exceptional`].
pub type Fault = Arc<dyn StdError + Send + Sync + 'static>;

/// A recoverable error carried inside a failed computation.
///
/// Every error exposes a numeric [`code`](Self::code) and a human readable
/// [`message`](Self::message). The `Display` output is the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An error caused by a native fault.
    #[error(transparent)]
    Exceptional(#[from] Exceptional),
    /// Several errors collected together.
    #[error(transparent)]
    Many(#[from] ManyErrors),
}

impl Error {
    /// Wraps a native fault with the default code `0`.
    pub fn exceptional<E>(fault: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Exceptional(Exceptional::new(fault))
    }

    /// Wraps a native fault with an explicit code.
    pub fn exceptional_with_code<E>(code: i32, fault: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Exceptional(Exceptional::with_code(code, fault))
    }

    /// Aggregates `errors`, keeping their order.
    #[must_use]
    pub const fn many(errors: Vec<Self>) -> Self {
        Self::Many(ManyErrors::new(errors))
    }

    /// Returns the numeric code of this error.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Exceptional(exceptional) => exceptional.code(),
            Self::Many(many) => many.code(),
        }
    }

    /// Returns the message of this error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Exceptional(exceptional) => exceptional.message(),
            Self::Many(many) => many.message(),
        }
    }

    /// Returns `true` if this is an [`Exceptional`] error.
    #[must_use]
    pub const fn is_exceptional(&self) -> bool {
        matches!(self, Self::Exceptional(_))
    }

    /// Returns `true` if this is a [`ManyErrors`] aggregate.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }
}

// =============================================================================
// Exceptional
// =============================================================================

/// An error that wraps a native fault.
///
/// The message is the fault's `Display` output and the fault itself is the
/// [`source`](StdError::source) of this error.
///
/// # Examples
///
/// ```rust
/// use cats::error::Exceptional;
///
/// let error = Exceptional::with_code(404, std::io::Error::other("not found"));
/// assert_eq!(error.code(), 404);
/// assert_eq!(error.message(), "not found");
/// assert!(error.downcast_ref::<std::io::Error>().is_some());
///
/// use std::error::Error as _;
/// let source = error.source().expect("the fault is the source");
/// assert!(source.downcast_ref::<std::io::Error>().is_some());
/// ```
#[derive(Clone)]
pub struct Exceptional {
    code: i32,
    fault: Fault,
}

impl Exceptional {
    /// Wraps `fault` with the default code `0`.
    pub fn new<E>(fault: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_code(0, fault)
    }

    /// Wraps `fault` with an explicit code.
    pub fn with_code<E>(code: i32, fault: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            code,
            fault: Arc::new(fault),
        }
    }

    /// Wraps an already shared fault.
    #[must_use]
    pub const fn from_fault(code: i32, fault: Fault) -> Self {
        Self { code, fault }
    }

    /// Returns the code of this error.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Returns the message of the wrapped fault.
    #[must_use]
    pub fn message(&self) -> String {
        self.fault.to_string()
    }

    /// Returns the wrapped fault.
    #[must_use]
    pub fn fault(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.fault.as_ref()
    }

    /// Returns the wrapped fault as `E` if it has that type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.fault.downcast_ref::<E>()
    }
}

impl fmt::Display for Exceptional {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fault, formatter)
    }
}

// The source is the wrapped fault, not the `Arc` around it.
impl StdError for Exceptional {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.fault)
    }
}

impl fmt::Debug for Exceptional {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Exceptional")
            .field("code", &self.code)
            .field("message", &self.message())
            .finish()
    }
}

// Faults have no equality of their own, so two wrappers compare by what they report.
impl PartialEq for Exceptional {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.message() == other.message()
    }
}

impl Eq for Exceptional {}

// =============================================================================
// ManyErrors
// =============================================================================

/// An ordered aggregate of errors.
///
/// The code is always [`MANY_ERRORS_CODE`] and the message joins the child
/// messages with `", "`. Neither emptiness nor duplicates are checked.
///
/// # Examples
///
/// ```rust
/// use cats::error::{Error, ManyErrors, MANY_ERRORS_CODE};
///
/// let empty = ManyErrors::new(Vec::new());
/// assert_eq!(empty.code(), MANY_ERRORS_CODE);
/// assert_eq!(empty.message(), "");
///
/// let collected: ManyErrors = ["a", "b"]
///     .into_iter()
///     .map(|message| Error::exceptional(std::io::Error::other(message)))
///     .collect();
/// assert_eq!(collected.message(), "a, b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", joined_messages(.errors))]
pub struct ManyErrors {
    errors: Vec<Error>,
}

fn joined_messages(errors: &[Error]) -> String {
    errors
        .iter()
        .map(Error::message)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ManyErrors {
    /// Aggregates `errors`, keeping their order.
    #[must_use]
    pub const fn new(errors: Vec<Error>) -> Self {
        Self { errors }
    }

    /// Returns [`MANY_ERRORS_CODE`].
    #[must_use]
    pub const fn code(&self) -> i32 {
        MANY_ERRORS_CODE
    }

    /// Returns the child messages joined with `", "`.
    #[must_use]
    pub fn message(&self) -> String {
        joined_messages(&self.errors)
    }

    /// Returns the aggregated errors in collection order.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Iterates over the aggregated errors in collection order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Returns the number of aggregated errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if nothing was aggregated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromIterator<Error> for ManyErrors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ManyErrors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ManyErrors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Faults raised by this crate
// =============================================================================

/// The fault reported when every alternative given to
/// [`alt`](crate::chain::alt) produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("all {attempted} alternatives were absent")]
pub struct AlternativesExhausted {
    /// How many alternatives were tried.
    pub attempted: usize,
}

static_assertions::assert_impl_all!(Error: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fault(message: &str) -> Error {
        Error::exceptional(std::io::Error::other(message.to_string()))
    }

    #[rstest]
    fn test_exceptional_defaults_to_code_zero() {
        let error = fault("boom");
        assert_eq!(error.code(), 0);
        assert_eq!(error.message(), "boom");
        assert!(error.is_exceptional());
    }

    #[rstest]
    fn test_exceptional_explicit_code() {
        let error = Error::exceptional_with_code(7, std::io::Error::other("boom"));
        assert_eq!(error.code(), 7);
    }

    #[rstest]
    fn test_exceptional_source_is_fault() {
        let error = fault("boom");
        let source = error.source().expect("exceptional errors expose their fault");
        assert_eq!(source.to_string(), "boom");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[rstest]
    fn test_source_chain_reaches_shared_fault() {
        let shared: Fault = Arc::new(std::io::Error::other("shared"));
        let error = Error::from(Exceptional::from_fault(9, Arc::clone(&shared)));
        assert_eq!(error.code(), 9);

        let source = error.source().expect("exceptional errors expose their fault");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("the fault keeps its concrete type");
        assert_eq!(io.to_string(), "shared");
    }

    #[rstest]
    fn test_fault_accessor_returns_wrapped_fault() {
        let exceptional = Exceptional::new(AlternativesExhausted { attempted: 1 });
        assert_eq!(exceptional.fault().to_string(), "all 1 alternatives were absent");
        assert!(
            exceptional
                .fault()
                .downcast_ref::<AlternativesExhausted>()
                .is_some()
        );
    }

    #[rstest]
    fn test_many_errors_accessors() {
        let empty = Error::many(Vec::new());
        assert!(empty.is_many());
        assert!(!empty.is_exceptional());
        let Error::Many(empty) = empty else {
            panic!("expected an aggregate");
        };
        assert!(empty.is_empty());
        assert!(empty.errors().is_empty());

        let many = ManyErrors::new(vec![fault("a"), fault("b")]);
        assert!(!many.is_empty());
        assert_eq!(many.errors(), &[fault("a"), fault("b")]);
        let borrowed: Vec<String> = (&many).into_iter().map(Error::message).collect();
        assert_eq!(borrowed, vec!["a", "b"]);
        let owned: Vec<Error> = many.into_iter().collect();
        assert_eq!(owned, vec![fault("a"), fault("b")]);
    }

    #[rstest]
    fn test_many_errors_iter_matches_borrowed_loop() {
        let many: ManyErrors = ["x", "y", "z"].into_iter().map(fault).collect();
        let mut looped = Vec::new();
        for error in &many {
            looped.push(error.code());
        }
        let iterated: Vec<i32> = many.iter().map(Error::code).collect();
        assert_eq!(looped, iterated);
        assert!(!fault("x").is_many());
    }

    #[rstest]
    #[case(Vec::new(), "")]
    #[case(vec!["one"], "one")]
    #[case(vec!["one", "two", "three"], "one, two, three")]
    fn test_many_errors_message_joins_in_order(
        #[case] messages: Vec<&str>,
        #[case] expected: &str,
    ) {
        let many: ManyErrors = messages.into_iter().map(fault).collect();
        assert_eq!(many.code(), MANY_ERRORS_CODE);
        assert_eq!(many.message(), expected);
        assert_eq!(many.to_string(), expected);
    }

    #[rstest]
    fn test_nested_many_errors() {
        let inner = Error::many(vec![fault("a"), fault("b")]);
        let outer = Error::many(vec![inner, fault("c")]);
        assert_eq!(outer.message(), "a, b, c");
        assert_eq!(outer.code(), MANY_ERRORS_CODE);
    }

    #[rstest]
    fn test_exceptional_equality_is_structural() {
        assert_eq!(fault("same"), fault("same"));
        assert_ne!(fault("same"), fault("other"));
        assert_ne!(
            Error::exceptional_with_code(1, std::io::Error::other("same")),
            fault("same")
        );
    }

    #[rstest]
    fn test_alternatives_exhausted_display() {
        let fault = AlternativesExhausted { attempted: 3 };
        assert_eq!(fault.to_string(), "all 3 alternatives were absent");
    }
}
