//! Transform-then-aggregate pipelines over sequences.
//!
//! A transducer is split in two stages:
//!
//! 1. a *transformer* that turns the input iterator into another sequence
//!    (filtering, mapping, taking, ...), and
//! 2. an *aggregator* that folds the transformed iterator into a final value.
//!
//! [`transduce`] runs both stages over one sequence immediately.
//! [`to_transducer`] packages the stages into a reusable function that is
//! applied to sequences later. Each sequence is consumed exactly once.

/// Transforms `sequence` with `transformer` and folds the result with
/// `aggregator`.
///
/// `transduce(xs, t, a)` is `a(t(xs.into_iter()))`.
///
/// # Examples
///
/// ```rust
/// use cats::chain::transduce;
///
/// let total = transduce(
///     vec![1, 2, 3, 4, 5],
///     |values| values.filter(|value| value % 2 == 1).map(|value| value * 10),
///     |values| values.sum::<i32>(),
/// );
/// assert_eq!(total, 90);
/// ```
#[inline]
pub fn transduce<S, J, R, F, G>(sequence: S, transformer: F, aggregator: G) -> R
where
    S: IntoIterator,
    J: IntoIterator,
    F: FnOnce(S::IntoIter) -> J,
    G: FnOnce(J) -> R,
{
    aggregator(transformer(sequence.into_iter()))
}

/// Packages `transformer` and `aggregator` into a function from a sequence to
/// the aggregated result.
///
/// The sequence type `S` is usually named with a turbofish, since nothing
/// else determines it when the transducer is built.
///
/// # Examples
///
/// ```rust
/// use cats::chain::to_transducer;
///
/// let count_long_words = to_transducer::<Vec<&str>, _, _, _, _>(
///     |words| words.filter(|word| word.len() > 3),
///     |long_words| long_words.count(),
/// );
///
/// assert_eq!(count_long_words(vec!["a", "cat", "tiger", "lynx"]), 2);
/// assert_eq!(count_long_words(Vec::new()), 0);
/// ```
pub fn to_transducer<S, J, R, F, G>(transformer: F, aggregator: G) -> impl Fn(S) -> R
where
    S: IntoIterator,
    J: IntoIterator,
    F: Fn(S::IntoIter) -> J,
    G: Fn(J) -> R,
{
    move |sequence| aggregator(transformer(sequence.into_iter()))
}
