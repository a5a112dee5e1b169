//! Algebraic value containers.
//!
//! - [`Unit`]: the type with a single value, [`UNIT`]
//! - `Option<T>`: the standard option, extended by [`OptionExt`]
//! - [`Try`]: `Success(T)` or `Failure(Error)`
//! - [`Either`]: `Left(L)` or `Right(R)`, two independent alternatives
//!
//! All containers are immutable values with structural equality. Every variant
//! is public so that `match` over a container is checked for exhaustiveness.
//!
//! # Examples
//!
//! ```rust
//! use cats::container::{Either, OptionExt, Try};
//!
//! let some = Some(5).bind_skipping_defaults(|n| n + 1);
//! assert_eq!(some, Some(6));
//!
//! let success: Try<i32> = Try::success(5);
//! assert!(success.is_success());
//!
//! let left: Either<i32, String> = Either::left(5);
//! match left {
//!     Either::Left(value) => assert_eq!(value, 5),
//!     Either::Right(_) => unreachable!(),
//! }
//! ```

mod either;
mod fallible;
mod option;
mod unit;

pub use either::Either;
pub use fallible::Try;
pub use option::{OptionExt, bind_skipping_defaults};
pub use unit::{UNIT, Unit};
