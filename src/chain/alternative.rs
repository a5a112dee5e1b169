//! First-present selection: [`alt`] and [`alt_try`].
//!
//! Alternatives are tried in order and evaluation stops at the first one that
//! yields a value. When none does, the result is an explicit
//! [`Try::Failure`] instead of a panic.

use crate::container::Try;
use crate::error::{AlternativesExhausted, Error};

/// Returns the first present result among `alternatives` applied to `input`.
///
/// Each alternative returns an `Option`. Alternatives after the first `Some`
/// are not evaluated.
///
/// # Errors
///
/// Returns a [`Try::Failure`] wrapping [`AlternativesExhausted`] when every
/// alternative returns `None`, including when there are no alternatives.
///
/// # Examples
///
/// ```rust
/// use cats::chain::alt;
/// use cats::container::Try;
///
/// fn from_decimal(text: &&str) -> Option<i64> { text.parse().ok() }
/// fn from_hex(text: &&str) -> Option<i64> {
///     text.strip_prefix("0x").and_then(|digits| i64::from_str_radix(digits, 16).ok())
/// }
///
/// assert_eq!(alt("0x1f", [from_decimal, from_hex]), Try::success(31));
/// assert!(alt("nope", [from_decimal, from_hex]).is_failure());
/// ```
// Branches only borrow `input`; it is owned so the call can sit in a chain.
#[allow(clippy::needless_pass_by_value)]
pub fn alt<T, O, A, I>(input: T, alternatives: I) -> Try<O>
where
    I: IntoIterator<Item = A>,
    A: FnOnce(&T) -> Option<O>,
{
    let mut attempted = 0;
    for alternative in alternatives {
        attempted += 1;
        if let Some(output) = alternative(&input) {
            tracing::trace!(position = attempted, "alternative produced a value");
            return Try::success(output);
        }
    }
    tracing::debug!(attempted, "all alternatives were absent");
    Try::failure(Error::exceptional(AlternativesExhausted { attempted }))
}

/// Returns the first successful result among `alternatives` applied to
/// `input`.
///
/// Each alternative returns a [`Try`]. Alternatives after the first
/// `Success` are not evaluated.
///
/// # Errors
///
/// When every alternative fails, returns a [`Try::Failure`] holding a
/// [`ManyErrors`](crate::error::ManyErrors) of all collected errors in the
/// order the alternatives ran. With no alternatives the aggregate is empty.
///
/// # Examples
///
/// ```rust
/// use cats::chain::alt_try;
/// use cats::container::Try;
///
/// fn as_number(text: &&str) -> Try<u8> {
///     Try::catching(|| text.parse::<u8>())
/// }
///
/// fn as_flag(text: &&str) -> Try<u8> {
///     match Try::catching(|| text.parse::<bool>()) {
///         Try::Success(flag) => Try::success(u8::from(flag)),
///         Try::Failure(error) => Try::failure(error),
///     }
/// }
///
/// assert_eq!(alt_try("true", [as_number, as_flag]), Try::success(1));
///
/// let failed = alt_try("maybe", [as_number, as_flag]);
/// assert_eq!(
///     failed.into_failure().map(|error| error.message()),
///     Some("invalid digit found in string, provided string was not `true` or `false`".to_string()),
/// );
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn alt_try<T, O, A, I>(input: T, alternatives: I) -> Try<O>
where
    I: IntoIterator<Item = A>,
    A: FnOnce(&T) -> Try<O>,
{
    let mut errors = Vec::new();
    for alternative in alternatives {
        match alternative(&input) {
            Try::Success(output) => {
                tracing::trace!(position = errors.len() + 1, "alternative succeeded");
                return Try::success(output);
            }
            Try::Failure(error) => errors.push(error),
        }
    }
    tracing::debug!(attempted = errors.len(), "all alternatives failed");
    Try::failure(Error::many(errors))
}
