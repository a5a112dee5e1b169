//! The `Unit` type.

use std::fmt;

/// The type with exactly one value, [`UNIT`].
///
/// `Unit` is returned where a computation has no meaningful result but must
/// still produce one, for instance a `Try<Unit>` for an operation that can
/// only succeed or fail. It is zero-sized and freely interchangeable with
/// `()`.
///
/// # Examples
///
/// ```rust
/// use cats::container::{Try, Unit, UNIT};
///
/// fn ensure_positive(value: i32) -> Try<Unit> {
///     if value > 0 {
///         Try::success(UNIT)
///     } else {
///         Try::failure(cats::error::Error::exceptional(std::io::Error::other("not positive")))
///     }
/// }
///
/// assert_eq!(ensure_positive(1), Try::success(Unit));
/// assert!(ensure_positive(0).is_failure());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

/// The canonical [`Unit`] value.
pub const UNIT: Unit = Unit;

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        UNIT
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

static_assertions::assert_eq_size!(Unit, ());
static_assertions::assert_impl_all!(Unit: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unit_has_a_single_value() {
        assert_eq!(Unit, UNIT);
        assert_eq!(Unit::default(), UNIT);
    }

    #[rstest]
    fn test_unit_converts_from_and_into_tuple() {
        let unit: Unit = ().into();
        assert_eq!(unit, UNIT);
        let (): () = UNIT.into();
    }

    #[rstest]
    fn test_unit_display() {
        assert_eq!(UNIT.to_string(), "()");
    }
}
