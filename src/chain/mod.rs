//! Generic chaining combinators.
//!
//! These functions work on arbitrary values and functions. Only [`alt`] and
//! [`alt_try`] know about the containers, because they use `Option` and
//! [`Try`] to make absence explicit.
//!
//! # Overview
//!
//! | Combinator | Meaning |
//! |---|---|
//! | [`map`] | `f(x)` |
//! | [`tap`] | run `action(&x)`, return `x` |
//! | [`compose`] / [`compose!`](crate::compose!) | `x -> g(f(x))` |
//! | [`fork`] | `join(f1(&x), f2(&x))` |
//! | [`fork_all`] | `join(vec![p1(&x), .., pn(&x)])` |
//! | [`fork_tuple`] | `join((p1(&x), .., pn(&x)))` |
//! | [`alt`] / [`alt_try`] | first present result, or an explicit failure |
//! | [`transduce`] / [`to_transducer`] | `aggregate(transform(xs))` |
//!
//! Every free function also exists as a method of [`Chaining`], which is
//! implemented for all sized types.
//!
//! # Examples
//!
//! ```rust
//! use cats::chain::Chaining;
//!
//! let mut log = Vec::new();
//! let result = 3_i32
//!     .pipe(|n| n * 2)
//!     .tap(|n| log.push(format!("doubled to {n}")))
//!     .fork(|n| n + 1, |n| n - 1, |above, below| above * below);
//!
//! assert_eq!(result, 35);
//! assert_eq!(log, vec!["doubled to 6".to_string()]);
//! ```

mod alternative;
mod composition;
mod fork;
mod pipeline;
mod transduce;

pub use alternative::{alt, alt_try};
pub use composition::compose;
pub use fork::{Prongs, fork, fork_all, fork_tuple};
pub use pipeline::{map, tap};
pub use transduce::{to_transducer, transduce};

pub use crate::compose;

use crate::container::Try;

/// Method-call forms of the chaining combinators.
///
/// Blanket-implemented for every sized type, so any value can start a chain.
/// The plain application is called [`pipe`](Self::pipe) rather than `map` to
/// stay clear of `Iterator::map` and `Option::map`.
pub trait Chaining: Sized {
    /// Applies `function` to `self`. See [`map`].
    #[inline]
    fn pipe<U, F>(self, function: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        map(self, function)
    }

    /// Runs `action` on a borrow of `self` and returns `self`. See [`tap`].
    #[inline]
    #[must_use]
    fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        tap(self, action)
    }

    /// Joins the results of two functions of `self`. See [`fork`].
    #[inline]
    fn fork<A, B, R, F, G, J>(self, first: F, second: G, join: J) -> R
    where
        F: FnOnce(&Self) -> A,
        G: FnOnce(&Self) -> B,
        J: FnOnce(A, B) -> R,
    {
        fork(self, first, second, join)
    }

    /// Joins the results of any number of same-typed prongs. See [`fork_all`].
    #[inline]
    fn fork_all<M, R, P, I, J>(self, join: J, prongs: I) -> R
    where
        I: IntoIterator<Item = P>,
        P: FnOnce(&Self) -> M,
        J: FnOnce(Vec<M>) -> R,
    {
        fork_all(self, join, prongs)
    }

    /// Joins the results of a tuple of prongs. See [`fork_tuple`].
    #[inline]
    fn fork_tuple<P, R, J>(self, prongs: P, join: J) -> R
    where
        P: Prongs<Self>,
        J: FnOnce(P::Output) -> R,
    {
        fork_tuple(self, prongs, join)
    }

    /// Returns the first present result. See [`alt`].
    #[inline]
    fn alt<O, A, I>(self, alternatives: I) -> Try<O>
    where
        I: IntoIterator<Item = A>,
        A: FnOnce(&Self) -> Option<O>,
    {
        alt(self, alternatives)
    }

    /// Returns the first successful result. See [`alt_try`].
    #[inline]
    fn alt_try<O, A, I>(self, alternatives: I) -> Try<O>
    where
        I: IntoIterator<Item = A>,
        A: FnOnce(&Self) -> Try<O>,
    {
        alt_try(self, alternatives)
    }

    /// Transforms and aggregates `self` as a sequence. See [`transduce`].
    #[inline]
    fn transduce<J, R, F, G>(self, transformer: F, aggregator: G) -> R
    where
        Self: IntoIterator,
        J: IntoIterator,
        F: FnOnce(Self::IntoIter) -> J,
        G: FnOnce(J) -> R,
    {
        transduce(self, transformer, aggregator)
    }
}

impl<T> Chaining for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_method_chain_matches_free_functions() {
        let chained = 4_i32.pipe(|n| n + 1).fork(|n| n * 2, |n| n * 3, |a, b| a + b);
        let free = fork(map(4, |n: i32| n + 1), |n| n * 2, |n| n * 3, |a, b| a + b);
        assert_eq!(chained, free);
        assert_eq!(chained, 25);
    }

    #[rstest]
    fn test_alt_method_on_option_input() {
        let found = Some(3).alt([|value: &Option<i32>| value.map(|n| n * 2)]);
        assert_eq!(found, Try::success(6));
    }

    #[rstest]
    fn test_transduce_method() {
        let evens = vec![1, 2, 3, 4].transduce(
            |values| values.filter(|value| value % 2 == 0),
            |values| values.collect::<Vec<_>>(),
        );
        assert_eq!(evens, vec![2, 4]);
    }
}
