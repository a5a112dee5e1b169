//! # cats
//!
//! Algebraic value containers and generic function-chaining combinators.
//!
//! ## Overview
//!
//! This library expresses "a value that may be absent", "a computation that
//! may fail" and "a value that is one of two alternatives" as ordinary values,
//! without relying on panics for control flow. It includes:
//!
//! - **Containers**: [`Unit`](container::Unit), `Option` extensions,
//!   [`Try`](container::Try), [`Either`](container::Either)
//! - **Errors**: [`Error`](error::Error) with its `Exceptional` and
//!   `ManyErrors` variants
//! - **Chaining**: `map`, `tap`, `compose`, `fork`, `alt`, `transduce`
//! - **Unwrapping**: `unwrap` and `unwrap_or_else` over `Option` and `Try`
//!
//! ## Feature Flags
//!
//! - `container`: container types
//! - `chain`: chaining combinators and the `compose!` macro
//! - `unwrap`: unwrapping combinators
//! - `full`: enable all features
//!
//! ## Diagnostics
//!
//! Combinators that give up on a value (for instance [`alt`](chain::alt) when
//! every alternative is absent) emit `tracing` events. No subscriber is
//! installed by this crate.
//!
//! ## Example
//!
//! ```rust
//! use cats::prelude::*;
//!
//! fn parse_port(text: &str) -> Try<u16> {
//!     Try::catching(|| text.trim().parse::<u16>())
//! }
//!
//! let port = " 8080 "
//!     .pipe(parse_port)
//!     .unwrap_or(80);
//! assert_eq!(port, 8080);
//!
//! let fallback = "http".pipe(parse_port).unwrap_or(80);
//! assert_eq!(fallback, 80);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the error types, the combinators and their
/// extension traits.
///
/// # Usage
///
/// ```rust
/// use cats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::*;

    #[cfg(feature = "unwrap")]
    pub use crate::unwrap::*;
}

pub mod error;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "chain")]
pub mod chain;

#[cfg(feature = "unwrap")]
pub mod unwrap;
