//! Unit tests for the `Outcome<T, E>` combinator surface.
//!
//! Every combinator follows the same decision table:
//! - the callback runs only for the matching variant
//! - the callback runs at most once
//! - the other variant passes through unchanged

use rstest::rstest;
use rustresult::error::ErrorKind;
use rustresult::factory::{failure, success};
use rustresult::outcome::Outcome;
use std::cell::{Cell, RefCell};

// =============================================================================
// Tag Predicates
// =============================================================================

#[rstest]
fn outcome_success_is_success() {
    let value: Outcome<i32, String> = success(42);
    assert!(value.is_success());
    assert!(!value.is_failure());
}

#[rstest]
fn outcome_failure_is_failure() {
    let value: Outcome<i32, String> = failure("error".to_string());
    assert!(value.is_failure());
    assert!(!value.is_success());
}

#[rstest]
#[case(success(2), true)]
#[case(success(0), false)]
#[case(failure("error"), false)]
fn outcome_is_success_and(#[case] value: Outcome<i32, &'static str>, #[case] expected: bool) {
    assert_eq!(value.is_success_and(|x| x > 1), expected);
}

#[rstest]
fn outcome_is_failure_and_does_not_call_predicate_on_success() {
    let calls = Cell::new(0);
    let value: Outcome<i32, &str> = success(1);
    let matched = value.is_failure_and(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(!matched);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn outcome_ok_and_err_discard_the_other_slot() {
    let value: Outcome<i32, &str> = success(2);
    assert_eq!(value.ok(), Some(2));
    assert_eq!(value.err(), None);

    let value: Outcome<i32, &str> = failure("nothing here");
    assert_eq!(value.ok(), None);
    assert_eq!(value.err(), Some("nothing here"));
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn outcome_map_transforms_success() {
    let value: Outcome<&str, String> = success("foo");
    assert_eq!(value.map(str::len), success(3));
}

#[rstest]
fn outcome_map_failure_transforms_failure_only() {
    let value: Outcome<i32, i32> = failure(13);
    assert_eq!(value.map_failure(|code| format!("error code: {code}")), failure("error code: 13".to_string()));

    let value: Outcome<i32, i32> = success(2);
    assert_eq!(value.map_failure(|code| format!("error code: {code}")), success(2));
}

#[rstest]
#[case(success("foo"), 3)]
#[case(failure("bar"), 42)]
fn outcome_map_or_uses_eager_default(#[case] value: Outcome<&'static str, &'static str>, #[case] expected: usize) {
    assert_eq!(value.map_or(42, str::len), expected);
}

#[rstest]
fn outcome_map_or_else_runs_default_on_failure() {
    let value: Outcome<&str, &str> = failure("bar");
    assert_eq!(value.map_or_else(|error| error.len() * 2, str::len), 6);
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn outcome_inspect_runs_once_on_success() {
    let seen = RefCell::new(Vec::new());
    let value: Outcome<i32, &str> = success(4);
    let passed = value.inspect(|x| seen.borrow_mut().push(*x));
    assert_eq!(passed, success(4));
    assert_eq!(*seen.borrow(), vec![4]);
}

#[rstest]
fn outcome_inspect_failure_skips_success() {
    let seen = RefCell::new(Vec::new());
    let value: Outcome<i32, &str> = success(4);
    let passed = value.inspect_failure(|error| seen.borrow_mut().push(*error));
    assert_eq!(passed, success(4));
    assert!(seen.borrow().is_empty());
}

// =============================================================================
// Unwrapping
// =============================================================================

#[rstest]
fn outcome_unwrap_returns_success_payload() {
    let value: Outcome<i32, &str> = success(2);
    assert_eq!(value.unwrap(), 2);
}

#[rstest]
#[should_panic(expected = "emergency failure")]
fn outcome_unwrap_on_failure_panics_with_payload() {
    let value: Outcome<i32, &str> = failure("emergency failure");
    value.unwrap();
}

#[rstest]
#[should_panic(expected = "Testing expect_failure: 10")]
fn outcome_expect_failure_on_success_panics_with_context() {
    let value: Outcome<i32, &str> = success(10);
    value.expect_failure("Testing expect_failure");
}

#[rstest]
fn outcome_try_unwrap_reports_unwrap_error() {
    let value: Outcome<i32, &str> = failure("emergency failure");
    let error = value.try_unwrap().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Unwrap);
    assert_eq!(error.message(), "emergency failure");
}

#[rstest]
fn outcome_try_expect_failure_on_failure_returns_payload() {
    let value: Outcome<i32, &str> = failure("emergency failure");
    assert_eq!(value.try_expect_failure("unused").unwrap(), "emergency failure");
}

#[rstest]
#[case(success(9), 9)]
#[case(failure("error"), 2)]
fn outcome_unwrap_or(#[case] value: Outcome<i32, &'static str>, #[case] expected: i32) {
    assert_eq!(value.unwrap_or(2), expected);
}

#[rstest]
fn outcome_unwrap_or_else_uses_failure_payload() {
    let value: Outcome<usize, &str> = failure("foo");
    assert_eq!(value.unwrap_or_else(str::len), 3);
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
#[case(success(2), failure("late error"), failure("late error"))]
#[case(failure("early error"), success("foo"), failure("early error"))]
#[case(failure("not a 2"), failure("late error"), failure("not a 2"))]
#[case(success(2), success("different result type"), success("different result type"))]
fn outcome_and(
    #[case] value: Outcome<i32, &'static str>,
    #[case] other: Outcome<&'static str, &'static str>,
    #[case] expected: Outcome<&'static str, &'static str>,
) {
    assert_eq!(value.and(other), expected);
}

#[rstest]
#[case(success(2), failure("late error"), success(2))]
#[case(failure("early error"), success(2), success(2))]
#[case(failure("not a 2"), failure("late error"), failure("late error"))]
#[case(success(2), success(100), success(2))]
fn outcome_or(
    #[case] value: Outcome<i32, &'static str>,
    #[case] other: Outcome<i32, &'static str>,
    #[case] expected: Outcome<i32, &'static str>,
) {
    assert_eq!(value.or(other), expected);
}

fn checked_square(value: u32) -> Outcome<u32, &'static str> {
    value.checked_mul(value).map_or(failure("overflowed"), success)
}

#[rstest]
#[case(success(2), success(4))]
#[case(success(1_000_000), failure("overflowed"))]
#[case(failure("not a number"), failure("not a number"))]
fn outcome_and_then(#[case] value: Outcome<u32, &'static str>, #[case] expected: Outcome<u32, &'static str>) {
    assert_eq!(value.and_then(checked_square), expected);
}

#[rstest]
fn outcome_or_else_recovers() {
    let recover = |error: u32| -> Outcome<u32, u32> { success(error * error) };
    let give_up = |error: u32| -> Outcome<u32, u32> { failure(error) };

    assert_eq!(success(2).or_else(recover).or_else(recover), success(2));
    assert_eq!(failure(3).or_else(recover).or_else(give_up), success(9));
    assert_eq!(failure(3).or_else(give_up).or_else(give_up), failure(3));
}

#[rstest]
fn outcome_and_then_short_circuits_failure() {
    let calls = Cell::new(0);
    let value: Outcome<i32, &str> = failure("stop");
    let chained = value.and_then(|x| {
        calls.set(calls.get() + 1);
        success::<_, &str>(x)
    });
    assert_eq!(chained, failure("stop"));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Borrowing and Iteration
// =============================================================================

#[rstest]
fn outcome_as_mut_updates_in_place() {
    let mut value: Outcome<i32, &str> = success(1);
    if let Outcome::Success(payload) = value.as_mut() {
        *payload += 1;
    }
    assert_eq!(value, success(2));
}

#[rstest]
fn outcome_iter_yields_success_only() {
    let value: Outcome<i32, &str> = success(5);
    assert_eq!(value.iter().copied().collect::<Vec<_>>(), vec![5]);

    let value: Outcome<i32, &str> = failure("none");
    assert_eq!((&value).into_iter().count(), 0);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn outcome_from_result_preserves_tag() {
    let parsed: Outcome<i32, _> = "12".parse::<i32>().into();
    assert_eq!(parsed.ok(), Some(12));

    let parsed: Outcome<i32, _> = "twelve".parse::<i32>().into();
    assert!(parsed.is_failure());
}

#[rstest]
fn outcome_debug_format() {
    let value: Outcome<i32, String> = success(42);
    assert_eq!(format!("{value:?}"), "Success(42)");
}
