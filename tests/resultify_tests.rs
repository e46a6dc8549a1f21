//! Tests for the panic-to-failure adapters.
//!
//! Test coverage:
//! - a returning function yields `Success(value)`
//! - a panicking function yields `Failure(Panic)` with the original payload
//! - panics while polling a returned future settle to `Failure(Panic)`
//! - the curried form converts the failure into a caller-chosen type
//! - plain combinators never catch callback panics

use rstest::rstest;
use rustresult::factory::success;
use rustresult::outcome::Outcome;
use rustresult::resultify::{Panic, catch, resultify, resultify_sync};
use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CustomError {
    reason: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
enum AppError {
    Crashed(String),
}

impl From<Panic> for AppError {
    fn from(panic: Panic) -> Self {
        Self::Crashed(panic.message().to_string())
    }
}

fn throws_custom_error(_: ()) -> i32 {
    panic_any(CustomError { reason: "x" })
}

// =============================================================================
// Synchronous Adapters
// =============================================================================

#[rstest]
fn resultify_sync_wraps_return_value() {
    let double = resultify_sync(|value: i32| value * 2);
    assert_eq!(double(21).ok(), Some(42));
}

#[rstest]
fn resultify_sync_returns_original_panic_payload() {
    let wrapped = resultify_sync(throws_custom_error);
    let panic = wrapped(()).err().unwrap();
    assert_eq!(panic.downcast::<CustomError>().unwrap(), CustomError { reason: "x" });
}

#[rstest]
fn resultify_sync_can_be_called_repeatedly() {
    let checked = resultify_sync(|value: i32| {
        assert!(value >= 0, "negative input");
        value
    });
    assert!(checked(1).is_success());
    assert!(checked(-1).is_failure());
    assert!(checked(2).is_success());
}

#[rstest]
fn catch_reports_panic_message() {
    let outcome = catch(|| -> () { panic!("boom {}", 1) });
    assert_eq!(outcome.err().unwrap().message(), "boom 1");
}

#[rstest]
fn curried_resultify_converts_failure_type() {
    let parse = resultify::<AppError>().sync(|input: &str| -> i32 { input.parse().expect("bad input") });

    assert_eq!(parse("7"), Outcome::Success(7));
    match parse("seven") {
        Outcome::Failure(AppError::Crashed(message)) => assert!(message.starts_with("bad input")),
        Outcome::Success(value) => panic!("unexpected success: {value}"),
    }
}

#[rstest]
fn curried_resultify_with_panic_keeps_payload() {
    let wrapped = resultify::<Panic>().sync(throws_custom_error);
    let panic = wrapped(()).err().unwrap();
    assert_eq!(panic.downcast::<CustomError>().unwrap(), CustomError { reason: "x" });
}

#[rstest]
fn curried_resultify_conversion_replaces_payload() {
    let wrapped = resultify::<AppError>().sync(throws_custom_error);
    assert_eq!(
        wrapped(()).err(),
        Some(AppError::Crashed("Unknown panic".to_string()))
    );
}

#[rstest]
fn combinator_callbacks_are_not_caught() {
    let unwound = catch_unwind(AssertUnwindSafe(|| {
        success::<i32, String>(1).map(|_| -> i32 { panic!("callback failed") })
    }));
    assert!(unwound.is_err());
}

// =============================================================================
// Asynchronous Adapters
// =============================================================================

#[cfg(feature = "async")]
mod asynchronous {
    use super::*;
    use rustresult::resultify::{resultify_async, resultify_future};
    use std::time::Duration;

    #[rstest]
    #[tokio::test]
    async fn resultify_async_wraps_resolved_value() {
        let fetch = resultify_async(|id: u32| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            id * 10
        });
        assert_eq!(fetch(4).await.ok(), Some(40));
    }

    #[rstest]
    #[tokio::test]
    async fn resultify_async_catches_panic_while_polling() {
        let fetch = resultify_async(|id: u32| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            assert!(id != 0, "invalid id");
            id
        });
        let panic = fetch(0).err().await.unwrap();
        assert_eq!(panic.message(), "invalid id");
    }

    #[rstest]
    #[tokio::test]
    async fn resultify_async_catches_panic_before_future_exists() {
        let fetch = resultify_async(|_: ()| -> std::future::Ready<i32> { panic_any(CustomError { reason: "sync" }) });
        let panic = fetch(()).err().await.unwrap();
        assert_eq!(panic.downcast_ref::<CustomError>(), Some(&CustomError { reason: "sync" }));
    }

    #[rstest]
    #[tokio::test]
    async fn resultify_future_wraps_single_future() {
        let outcome = resultify_future(async { 5 }).await;
        assert_eq!(outcome.ok(), Some(5));
    }

    #[rstest]
    #[tokio::test]
    async fn curried_resultify_async_converts_failure_type() {
        let adapter = resultify::<AppError>();
        let fetch = adapter.asynchronous(|flag: bool| async move {
            assert!(flag, "flag was false");
            1
        });
        assert_eq!(fetch(true).await, Outcome::Success(1));
        assert_eq!(
            fetch(false).await,
            Outcome::Failure(AppError::Crashed("flag was false".to_string()))
        );

        let single = adapter.future(async { panic!("single") });
        assert_eq!(
            single.await,
            Outcome::<(), AppError>::Failure(AppError::Crashed("single".to_string()))
        );
    }
}
