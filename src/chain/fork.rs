//! Fan-out combinators: apply several functions to one input and join the
//! results.
//!
//! - [`fork`]: two prongs with possibly different result types
//! - [`fork_all`]: any number of prongs sharing one result type, joined from a
//!   `Vec`
//! - [`fork_tuple`]: up to six prongs with independent result types, joined
//!   from a tuple
//!
//! Every prong receives a borrow of the input, so the input is never cloned.
//! The join function's parameter type always follows from the prongs' types
//! and is checked by the compiler.

/// Applies `first` and `second` to `input` and joins the two results.
///
/// `fork(x, f1, f2, join)` is `join(f1(&x), f2(&x))`.
///
/// # Examples
///
/// ```rust
/// use cats::chain::fork;
///
/// let words = vec!["fork", "and", "join"];
/// let average = fork(
///     words,
///     |words| words.iter().map(|word| word.len()).sum::<usize>(),
///     |words| words.len(),
///     |total, count| total / count,
/// );
/// assert_eq!(average, 3);
/// ```
#[inline]
// Branches only borrow `input`; it is owned so the call can sit in a chain.
#[allow(clippy::needless_pass_by_value)]
pub fn fork<T, A, B, R, F, G, J>(input: T, first: F, second: G, join: J) -> R
where
    F: FnOnce(&T) -> A,
    G: FnOnce(&T) -> B,
    J: FnOnce(A, B) -> R,
{
    let first_result = first(&input);
    let second_result = second(&input);
    join(first_result, second_result)
}

/// Applies every prong to `input`, in order, and passes the collected results
/// to `join`.
///
/// All prongs produce the same type `M`, and `join` receives them as a
/// `Vec<M>` in prong order. Prongs of distinct closure types can be passed as
/// function pointers or boxed trait objects.
///
/// # Examples
///
/// ```rust
/// use cats::chain::fork_all;
///
/// fn minimum(values: &Vec<i32>) -> i32 { values.iter().copied().min().unwrap_or(0) }
/// fn maximum(values: &Vec<i32>) -> i32 { values.iter().copied().max().unwrap_or(0) }
///
/// let range = fork_all(
///     vec![4, 9, 1],
///     |bounds: Vec<i32>| bounds[1] - bounds[0],
///     [minimum, maximum],
/// );
/// assert_eq!(range, 8);
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn fork_all<T, M, R, P, I, J>(input: T, join: J, prongs: I) -> R
where
    I: IntoIterator<Item = P>,
    P: FnOnce(&T) -> M,
    J: FnOnce(Vec<M>) -> R,
{
    let intermediate: Vec<M> = prongs.into_iter().map(|prong| prong(&input)).collect();
    join(intermediate)
}

/// A tuple of prongs that can all be applied to one input.
///
/// Implemented for tuples of one to six `FnOnce(&T) -> _` functions. The
/// output is the tuple of the individual results, in the same order.
pub trait Prongs<T> {
    /// The tuple of prong results.
    type Output;

    /// Applies every prong to `input`.
    fn apply_all(self, input: &T) -> Self::Output;
}

macro_rules! impl_prongs {
    ($(($prong:ident, $output:ident)),+) => {
        impl<T, $($prong, $output),+> Prongs<T> for ($($prong,)+)
        where
            $($prong: FnOnce(&T) -> $output),+
        {
            type Output = ($($output,)+);

            #[allow(non_snake_case)]
            #[inline]
            fn apply_all(self, input: &T) -> Self::Output {
                let ($($prong,)+) = self;
                ($($prong(input),)+)
            }
        }
    };
}

impl_prongs!((P1, O1));
impl_prongs!((P1, O1), (P2, O2));
impl_prongs!((P1, O1), (P2, O2), (P3, O3));
impl_prongs!((P1, O1), (P2, O2), (P3, O3), (P4, O4));
impl_prongs!((P1, O1), (P2, O2), (P3, O3), (P4, O4), (P5, O5));
impl_prongs!((P1, O1), (P2, O2), (P3, O3), (P4, O4), (P5, O5), (P6, O6));

/// Applies a tuple of prongs to `input` and passes the tuple of results to
/// `join`.
///
/// Each prong may produce a different type; the tuple handed to `join` has
/// exactly the prongs' result types.
///
/// # Examples
///
/// ```rust
/// use cats::chain::fork_tuple;
///
/// let summary = fork_tuple(
///     String::from("hello world"),
///     (
///         |text: &String| text.len(),
///         |text: &String| text.split_whitespace().count(),
///         |text: &String| text.starts_with('h'),
///     ),
///     |(length, words, greeting)| format!("{length}/{words}/{greeting}"),
/// );
/// assert_eq!(summary, "11/2/true");
/// ```
#[inline]
#[allow(clippy::needless_pass_by_value)]
pub fn fork_tuple<T, P, R, J>(input: T, prongs: P, join: J) -> R
where
    P: Prongs<T>,
    J: FnOnce(P::Output) -> R,
{
    join(prongs.apply_all(&input))
}
