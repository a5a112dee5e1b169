//! Unit tests for the container types.
//!
//! - `Option<T>` with `OptionExt`
//! - `Try<T>`: `Success(T)` or `Failure(Error)`
//! - `Either<L, R>`: `Left(L)` or `Right(R)`
//! - `Unit`

#![cfg(feature = "container")]

use cats::container::{Either, OptionExt, Try, UNIT, Unit, bind_skipping_defaults};
use cats::error::{Error, Exceptional};
use rstest::rstest;

fn io_error(message: &str) -> Error {
    Error::exceptional(std::io::Error::other(message.to_string()))
}

// =============================================================================
// Option
// =============================================================================

#[rstest]
fn option_some_is_some() {
    let value = Some("present");
    assert!(value.is_some());
    assert!(!value.is_none());
}

#[rstest]
fn option_none_is_none() {
    let value: Option<&str> = None;
    assert!(!value.is_some());
    assert!(value.is_none());
}

#[rstest]
#[case(String::new(), None)]
#[case(String::from("abc"), Some(3))]
fn option_bind_skipping_defaults_on_strings(
    #[case] input: String,
    #[case] expected: Option<usize>,
) {
    assert_eq!(Some(input).bind_skipping_defaults(|s| s.len()), expected);
}

#[rstest]
#[case::integer(Some(0_u64).bind_skipping_defaults(|n| n + 1))]
#[case::boolean(Some(false).bind_skipping_defaults(|flag| u64::from(flag)))]
#[case::character(Some('\0').bind_skipping_defaults(u64::from))]
#[case::vector(Some(Vec::<u8>::new()).bind_skipping_defaults(|bytes| bytes.len() as u64))]
#[case::unit(Some(Unit).bind_skipping_defaults(|_| 1_u64))]
fn option_bind_skipping_defaults_collapses_every_default(#[case] bound: Option<u64>) {
    assert_eq!(bound, None);
}

#[rstest]
fn option_bind_skipping_defaults_on_custom_default() {
    #[derive(Debug, Default, PartialEq)]
    struct Settings {
        retries: u8,
    }

    let unset = Some(Settings::default());
    let set = Some(Settings { retries: 3 });

    assert_eq!(bind_skipping_defaults(unset, |s| s.retries), None);
    assert_eq!(bind_skipping_defaults(set, |s| s.retries), Some(3));
}

#[rstest]
fn option_bind_is_lawful_map() {
    let zero: Option<i32> = Some(0);
    assert_eq!(zero.bind(|n| n + 1), zero.map(|n| n + 1));
}

// =============================================================================
// Try
// =============================================================================

#[rstest]
fn try_success_round_trip() {
    let outcome = Try::success(vec![1, 2]);
    assert!(outcome.is_success());
    match outcome {
        Try::Success(value) => assert_eq!(value, vec![1, 2]),
        Try::Failure(error) => panic!("unexpected failure: {error}"),
    }
}

#[rstest]
fn try_failure_round_trip() {
    let outcome: Try<i32> = Try::failure(io_error("nope"));
    assert!(outcome.is_failure());
    match outcome {
        Try::Success(value) => panic!("unexpected success: {value}"),
        Try::Failure(error) => {
            assert_eq!(error.message(), "nope");
            assert_eq!(error.code(), 0);
        }
    }
}

#[rstest]
fn try_borrowing_accessors() {
    let success: Try<i32> = Try::success(1);
    let failure: Try<i32> = Try::failure(io_error("x"));

    assert_eq!(success.as_success(), Some(&1));
    assert_eq!(success.as_failure(), None);
    assert_eq!(failure.as_success(), None);
    assert_eq!(failure.as_failure().map(Error::message), Some("x".to_string()));
}

#[rstest]
fn try_catching_wraps_fault_as_exceptional() {
    let outcome = Try::catching(|| "-1".parse::<u32>());
    let Some(Error::Exceptional(exceptional)) = outcome.into_failure() else {
        panic!("parse failure is caught as an exceptional error");
    };
    assert!(
        exceptional
            .downcast_ref::<std::num::ParseIntError>()
            .is_some()
    );
}

#[rstest]
fn try_converts_to_and_from_result() {
    let result: Result<u8, Exceptional> =
        Err(Exceptional::with_code(5, std::io::Error::other("e")));
    let outcome: Try<u8> = result.into();
    assert_eq!(outcome.as_failure().map(Error::code), Some(5));

    let back: Result<u8, Error> = Try::success(2).into();
    assert_eq!(back, Ok(2));
}

#[rstest]
fn try_of_unit_signals_completion() {
    let completed: Try<Unit> = Try::success(UNIT);
    assert_eq!(completed.unwrap(), Unit);
}

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn either_left_round_trip() {
    let value: Either<i32, String> = Either::left(5);
    assert!(value.is_left());
    assert!(!value.is_right());
    match value {
        Either::Left(inner) => assert_eq!(inner, 5),
        Either::Right(_) => panic!("expected Left"),
    }
}

#[rstest]
fn either_right_round_trip() {
    let value: Either<i32, String> = Either::right("five".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
    match value {
        Either::Left(_) => panic!("expected Right"),
        Either::Right(inner) => assert_eq!(inner, "five"),
    }
}

#[rstest]
fn either_has_no_success_bias() {
    let left: Either<Error, i32> = Either::left(io_error("not an error here"));
    let right: Either<i32, Error> = Either::right(io_error("nor here"));
    assert_eq!(left.swap().into_left(), None);
    assert!(right.swap().is_left());
}

#[rstest]
#[case(Either::left(2), "left 2")]
#[case(Either::right("two"), "right two")]
fn either_fold(#[case] value: Either<i32, &str>, #[case] expected: &str) {
    let described = value.fold(|n| format!("left {n}"), |s| format!("right {s}"));
    assert_eq!(described, expected);
}

#[rstest]
fn either_structural_equality() {
    assert_eq!(Either::<i32, i32>::left(1), Either::left(1));
    assert_ne!(Either::<i32, i32>::left(1), Either::right(1));
}
