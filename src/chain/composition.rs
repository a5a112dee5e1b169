//! Left-to-right function composition: [`compose`] and [`compose!`](crate::compose!).

/// Composes two functions left to right.
///
/// `compose(f, g)(x)` is `g(f(x))`: `f` runs first and its result feeds `g`.
///
/// # Laws
///
/// - **Associativity**: `compose(compose(f, g), h)(x) == compose(f, compose(g, h))(x)`
/// - **Identity**: `compose(|x| x, f)(x) == compose(f, |x| x)(x) == f(x)`
///
/// # Examples
///
/// ```rust
/// use cats::chain::compose;
///
/// let length_then_double = compose(|s: &str| s.len(), |n: usize| n * 2);
/// assert_eq!(length_then_double("four"), 8);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Composes any number of functions left to right.
///
/// `compose!(f, g, h)(x)` is `h(g(f(x)))`, the same order in which the
/// functions are written.
///
/// # Syntax
///
/// - `compose!(f)` - returns `f` unchanged
/// - `compose!(f, g)` - returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - folds the list from the left
///
/// # Examples
///
/// ```rust
/// use cats::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // square(double(add_one(2))) = square(6) = 36
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(2), 36);
/// ```
///
/// Types change along the chain:
///
/// ```rust
/// use cats::compose;
///
/// let describe = compose!(|n: u32| n * 3, |n: u32| n.to_string(), |s: String| s.len());
/// assert_eq!(describe(400), 4);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $second_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose!(
            $crate::compose!($first_function, $second_function),
            $($remaining_functions),+
        )
    };
}
