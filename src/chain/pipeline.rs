//! Plain application and observation: [`map`] and [`tap`].

/// Applies `function` to `value`.
///
/// `map(x, f)` is `f(x)`. It exists so that a transformation can be written
/// in reading order, most often through [`Chaining::pipe`](super::Chaining::pipe).
///
/// # Examples
///
/// ```rust
/// use cats::chain::map;
///
/// assert_eq!(map(4, |n: i32| n * n), 16);
/// assert_eq!(map("cats", str::len), 4);
/// ```
#[inline]
pub fn map<T, U, F>(value: T, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    function(value)
}

/// Runs `action` on a borrow of `value` and returns `value` unchanged.
///
/// Use it to observe a value in the middle of a chain, for example to log it.
/// Whatever `action` does is up to the caller.
///
/// # Examples
///
/// ```rust
/// use cats::chain::tap;
///
/// let mut seen = Vec::new();
/// let value = tap(vec![1, 2, 3], |values| seen.push(values.len()));
/// assert_eq!(value, vec![1, 2, 3]);
/// assert_eq!(seen, vec![3]);
/// ```
#[inline]
pub fn tap<T, F>(value: T, action: F) -> T
where
    F: FnOnce(&T),
{
    action(&value);
    value
}
