//! Free functions for building outcomes.
//!
//! These are the usual entry points: `success(value)` / `failure(error)` for
//! settled outcomes and the `_async` variants for deferred ones.
//!
//! # Examples
//!
//! ```rust
//! use rustresult::factory::{failure, success};
//!
//! let ok = success::<_, String>(1);
//! let bad = failure::<i32, _>("boom");
//! assert!(ok.is_success());
//! assert!(bad.is_failure());
//! ```

#[cfg(feature = "async")]
use std::future::Future;

#[cfg(feature = "async")]
use crate::async_outcome::AsyncOutcome;
use crate::outcome::Outcome;

/// Builds a settled `Success`.
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Builds a settled `Failure`.
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Builds a deferred outcome that settles to `Success(value)`.
#[cfg(feature = "async")]
#[inline]
pub const fn success_async<T, E>(value: T) -> AsyncOutcome<T, E> {
    AsyncOutcome::settled(Outcome::Success(value))
}

/// Builds a deferred outcome that settles to `Failure(error)`.
#[cfg(feature = "async")]
#[inline]
pub const fn failure_async<T, E>(error: E) -> AsyncOutcome<T, E> {
    AsyncOutcome::settled(Outcome::Failure(error))
}

/// Builds a deferred `Success` whose payload is produced by `future`.
///
/// # Examples
///
/// ```rust,ignore
/// use rustresult::factory::success_from_future;
/// use rustresult::outcome::Outcome;
///
/// let deferred = success_from_future::<_, String, _>(async { 7 });
/// assert_eq!(deferred.await, Outcome::Success(7));
/// ```
#[cfg(feature = "async")]
pub fn success_from_future<T, E, Fut>(future: Fut) -> AsyncOutcome<T, E>
where
    Fut: Future<Output = T> + Send + 'static,
{
    AsyncOutcome::from_future(async move { Outcome::Success(future.await) })
}

/// Builds a deferred `Failure` whose payload is produced by `future`.
#[cfg(feature = "async")]
pub fn failure_from_future<T, E, Fut>(future: Fut) -> AsyncOutcome<T, E>
where
    Fut: Future<Output = E> + Send + 'static,
{
    AsyncOutcome::from_future(async move { Outcome::Failure(future.await) })
}

/// Wraps a future that already resolves to an `Outcome`.
#[cfg(feature = "async")]
pub fn from_async_source<T, E, Fut>(future: Fut) -> AsyncOutcome<T, E>
where
    Fut: Future<Output = Outcome<T, E>> + Send + 'static,
{
    AsyncOutcome::from_future(future)
}
