//! `AsyncOutcome` - an outcome that is not available yet.
//!
//! `AsyncOutcome<T, E>` owns a deferred computation that settles to exactly
//! one [`Outcome<T, E>`]. It mirrors the combinator surface of `Outcome`
//! with the same decision table; the difference is *when* callbacks run:
//!
//! - Combinators that would return an `Outcome` return a new `AsyncOutcome`
//!   chained onto this one. Nothing is observed until the chain is awaited.
//! - Operations that would return a plain value (`unwrap`, `is_success`,
//!   `ok`, ...) are `async fn`s; await them to get the value.
//!
//! # impl `Future`
//!
//! `AsyncOutcome` implements `Future` via `pin_project_lite` and awaiting it
//! yields the settled [`Outcome`], not the raw payload:
//!
//! ```rust,ignore
//! use rustresult::factory::success_async;
//! use rustresult::outcome::Outcome;
//!
//! #[tokio::main]
//! async fn main() {
//!     let outcome = success_async::<_, String>(2).map(|value| value * 2).await;
//!     assert_eq!(outcome, Outcome::Success(4));
//! }
//! ```
//!
//! # Input Shapes
//!
//! `and`, `or`, `and_then` and `or_else` accept anything implementing
//! [`IntoAsyncOutcome`]: a settled `Outcome`, another `AsyncOutcome`, or any
//! `Future` that resolves to an `Outcome`.
//!
//! # Ownership
//!
//! Each instance exclusively owns its computation. A combinator consumes the
//! receiver and moves it into the continuation of a freshly built
//! `AsyncOutcome`; the parent is never shared or polled by anyone else.
//! Continuations attached along one chain run in the order they were
//! attached.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use pin_project_lite::pin_project;

use crate::equality::EquivalentAsync;
use crate::outcome::Outcome;

// =============================================================================
// AsyncOutcome Struct Definition
// =============================================================================

pin_project! {
    /// A deferred computation that settles to an [`Outcome<T, E>`].
    ///
    /// # Type Parameters
    ///
    /// * `T` - The success payload
    /// * `E` - The failure payload
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rustresult::async_outcome::AsyncOutcome;
    /// use rustresult::outcome::Outcome;
    ///
    /// let deferred = AsyncOutcome::from_future(async { Outcome::<i32, String>::Success(1) });
    /// assert!(deferred.is_success().await);
    /// ```
    #[must_use = "an AsyncOutcome does nothing until it is awaited"]
    pub struct AsyncOutcome<T, E> {
        #[pin]
        state: AsyncOutcomeState<T, E>,
    }
}

pin_project! {
    /// Internal state machine for `AsyncOutcome`.
    ///
    /// - `Settled` -> `Completed` (the outcome was known at construction)
    /// - `Pending` -> `Completed` (when the chained future resolves)
    #[project = AsyncOutcomeStateProj]
    enum AsyncOutcomeState<T, E> {
        Settled {
            outcome: Option<Outcome<T, E>>,
        },
        Pending {
            #[pin]
            future: BoxFuture<'static, Outcome<T, E>>,
        },
        Completed,
    }
}

impl<T, E> Future for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        match this.state.as_mut().project() {
            AsyncOutcomeStateProj::Settled { outcome } => {
                // INVARIANT: Settled is left for Completed on the first poll
                let outcome = outcome.take().expect(
                    "AsyncOutcome internal error: settled outcome was already consumed. \
                     This indicates the AsyncOutcome was polled after completion.",
                );
                this.state.set(AsyncOutcomeState::Completed);
                Poll::Ready(outcome)
            }
            AsyncOutcomeStateProj::Pending { future } => match future.poll(context) {
                Poll::Ready(outcome) => {
                    this.state.set(AsyncOutcomeState::Completed);
                    Poll::Ready(outcome)
                }
                Poll::Pending => Poll::Pending,
            },
            AsyncOutcomeStateProj::Completed => {
                panic!("AsyncOutcome polled after completion")
            }
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> AsyncOutcome<T, E> {
    /// Wraps an outcome that is already known.
    ///
    /// Awaiting the result completes on the first poll.
    pub const fn settled(outcome: Outcome<T, E>) -> Self {
        Self {
            state: AsyncOutcomeState::Settled {
                outcome: Some(outcome),
            },
        }
    }

    /// Wraps a future that resolves to an outcome.
    ///
    /// The future is not polled until the `AsyncOutcome` is awaited.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            state: AsyncOutcomeState::Pending {
                future: Box::pin(future),
            },
        }
    }
}

// =============================================================================
// Input Normalization
// =============================================================================

/// Conversion into an [`AsyncOutcome`].
///
/// Implemented for the three shapes accepted by `and`, `or`, `and_then`,
/// `or_else` and `equal`:
///
/// - a settled [`Outcome<T, E>`]
/// - an [`AsyncOutcome<T, E>`]
/// - any `Future<Output = Outcome<T, E>> + Send + 'static`
pub trait IntoAsyncOutcome<T, E> {
    /// Performs the conversion.
    fn into_async_outcome(self) -> AsyncOutcome<T, E>;
}

impl<T, E> IntoAsyncOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_async_outcome(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::settled(self)
    }
}

impl<T, E, Fut> IntoAsyncOutcome<T, E> for Fut
where
    Fut: Future<Output = Outcome<T, E>> + Send + 'static,
{
    #[inline]
    fn into_async_outcome(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_future(self)
    }
}

impl<T, E> From<Outcome<T, E>> for AsyncOutcome<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::settled(outcome)
    }
}

// =============================================================================
// Tag Predicates and Slot Extraction
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Resolves to `true` if the settled outcome is a `Success`.
    pub async fn is_success(self) -> bool {
        self.await.is_success()
    }

    /// Resolves to `true` if the settled outcome is a `Success` matching `predicate`.
    pub async fn is_success_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        self.await.is_success_and(predicate)
    }

    /// Like [`is_success_and`](Self::is_success_and) with an asynchronous predicate.
    pub async fn is_success_and_async<F, Fut>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self.await {
            Outcome::Success(value) => predicate(value).await,
            Outcome::Failure(_) => false,
        }
    }

    /// Resolves to `true` if the settled outcome is a `Failure`.
    pub async fn is_failure(self) -> bool {
        self.await.is_failure()
    }

    /// Resolves to `true` if the settled outcome is a `Failure` matching `predicate`.
    pub async fn is_failure_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        self.await.is_failure_and(predicate)
    }

    /// Like [`is_failure_and`](Self::is_failure_and) with an asynchronous predicate.
    pub async fn is_failure_and_async<F, Fut>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self.await {
            Outcome::Success(_) => false,
            Outcome::Failure(error) => predicate(error).await,
        }
    }

    /// Resolves to the success payload, if any.
    pub async fn ok(self) -> Option<T> {
        self.await.ok()
    }

    /// Resolves to the failure payload, if any.
    pub async fn err(self) -> Option<E> {
        self.await.err()
    }
}

// =============================================================================
// Mapping Operations
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Chains `function` onto a `Success` payload.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rustresult::factory::success_async;
    /// use rustresult::outcome::Outcome;
    ///
    /// let length = success_async::<_, String>("foo").map(|value| value.len());
    /// assert_eq!(length.await, Outcome::Success(3));
    /// ```
    pub fn map<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        AsyncOutcome::from_future(async move { self.await.map(function) })
    }

    /// Chains an asynchronous `function` onto a `Success` payload.
    pub fn map_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(function(value).await),
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Resolves to `default` for a `Failure`, or `function` applied to a `Success` payload.
    pub async fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.await.map_or(default, function)
    }

    /// Like [`map_or`](Self::map_or) with an asynchronous `function`.
    pub async fn map_or_async<U, F, Fut>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.await {
            Outcome::Success(value) => function(value).await,
            Outcome::Failure(_) => default,
        }
    }

    /// Resolves by applying `default` to a `Failure` or `function` to a `Success`.
    pub async fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.await.map_or_else(default, function)
    }

    /// Like [`map_or_else`](Self::map_or_else) with asynchronous functions.
    pub async fn map_or_else_async<U, D, DFut, F, FFut>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> DFut,
        DFut: Future<Output = U>,
        F: FnOnce(T) -> FFut,
        FFut: Future<Output = U>,
    {
        match self.await {
            Outcome::Success(value) => function(value).await,
            Outcome::Failure(error) => default(error).await,
        }
    }

    /// Chains `function` onto a `Failure` payload.
    pub fn map_failure<F, O>(self, function: O) -> AsyncOutcome<T, F>
    where
        O: FnOnce(E) -> F + Send + 'static,
        F: Send + 'static,
    {
        AsyncOutcome::from_future(async move { self.await.map_failure(function) })
    }

    /// Chains an asynchronous `function` onto a `Failure` payload.
    pub fn map_failure_async<F, O, Fut>(self, function: O) -> AsyncOutcome<T, F>
    where
        O: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = F> + Send + 'static,
        F: Send + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => Outcome::Failure(function(error).await),
            }
        })
    }

    /// Chains a side effect on a `Success` payload, passing the outcome through.
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::from_future(async move { self.await.inspect(function) })
    }

    /// Chains an asynchronous side effect on a `Success` payload.
    ///
    /// The chain waits for the side effect before settling.
    pub fn inspect_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::from_future(async move {
            let outcome = self.await;
            let effect = match &outcome {
                Outcome::Success(value) => Some(function(value)),
                Outcome::Failure(_) => None,
            };
            if let Some(effect) = effect {
                effect.await;
            }
            outcome
        })
    }

    /// Chains a side effect on a `Failure` payload, passing the outcome through.
    pub fn inspect_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        Self::from_future(async move { self.await.inspect_failure(function) })
    }

    /// Chains an asynchronous side effect on a `Failure` payload.
    pub fn inspect_failure_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&E) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::from_future(async move {
            let outcome = self.await;
            let effect = match &outcome {
                Outcome::Success(_) => None,
                Outcome::Failure(error) => Some(function(error)),
            };
            if let Some(effect) = effect {
                effect.await;
            }
            outcome
        })
    }
}

// =============================================================================
// Unwrap Operations
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Resolves to the `Success` payload.
    ///
    /// # Panics
    ///
    /// The returned future panics if the outcome settles to a `Failure`.
    pub async fn unwrap(self) -> T
    where
        E: fmt::Display,
    {
        self.await.unwrap()
    }

    /// Resolves to the `Success` payload.
    ///
    /// # Panics
    ///
    /// The returned future panics with `"{message}: {failure}"` if the
    /// outcome settles to a `Failure`.
    pub async fn expect(self, message: &str) -> T
    where
        E: fmt::Display,
    {
        self.await.expect(message)
    }

    /// Resolves to the `Failure` payload.
    ///
    /// # Panics
    ///
    /// The returned future panics if the outcome settles to a `Success`.
    pub async fn unwrap_failure(self) -> E
    where
        T: fmt::Display,
    {
        self.await.unwrap_failure()
    }

    /// Resolves to the `Failure` payload.
    ///
    /// # Panics
    ///
    /// The returned future panics with `"{message}: {success}"` if the
    /// outcome settles to a `Success`.
    pub async fn expect_failure(self, message: &str) -> E
    where
        T: fmt::Display,
    {
        self.await.expect_failure(message)
    }

    /// Resolves to the `Success` payload or `default`.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Resolves to the `Success` payload or one computed from the `Failure` payload.
    pub async fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.unwrap_or_else(function)
    }

    /// Like [`unwrap_or_else`](Self::unwrap_or_else) with an asynchronous `function`.
    pub async fn unwrap_or_else_async<F, Fut>(self, function: F) -> T
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self.await {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => function(error).await,
        }
    }

    /// Resolves to the raw success slot without checking the tag.
    ///
    /// Resolves to `None` when the outcome settles to a `Failure`.
    pub async fn unwrap_unchecked(self) -> Option<T> {
        self.await.unwrap_unchecked()
    }

    /// Resolves to the raw failure slot without checking the tag.
    pub async fn unwrap_failure_unchecked(self) -> Option<E> {
        self.await.unwrap_failure_unchecked()
    }
}

// =============================================================================
// Chaining Operations
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Continues with `other` if this settles to a `Success`.
    ///
    /// `other` is only awaited on the `Success` path.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rustresult::factory::{failure, success_async};
    /// use rustresult::outcome::Outcome;
    ///
    /// let chained = success_async::<i32, &str>(2).and(failure::<&str, _>("late error"));
    /// assert_eq!(chained.await, Outcome::Failure("late error"));
    /// ```
    pub fn and<U, R>(self, other: R) -> AsyncOutcome<U, E>
    where
        R: IntoAsyncOutcome<U, E>,
        U: Send + 'static,
    {
        let other = other.into_async_outcome();
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Success(_) => other.await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Continues with the outcome produced by `function` on a `Success` payload.
    ///
    /// `function` may return an `Outcome`, an `AsyncOutcome` or a future
    /// resolving to an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rustresult::factory::{success, success_async};
    /// use rustresult::outcome::Outcome;
    ///
    /// let chained = success_async::<i32, String>(2)
    ///     .and_then(|value| success(value * 2))
    ///     .and_then(|value| async move { success(value + 1) });
    /// assert_eq!(chained.await, Outcome::Success(5));
    /// ```
    pub fn and_then<U, R, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoAsyncOutcome<U, E>,
        U: Send + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Success(value) => {
                    let next = function(value).into_async_outcome();
                    next.await
                }
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Continues with `other` if this settles to a `Failure`.
    pub fn or<F, R>(self, other: R) -> AsyncOutcome<T, F>
    where
        R: IntoAsyncOutcome<T, F>,
        F: Send + 'static,
    {
        let other = other.into_async_outcome();
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(_) => other.await,
            }
        })
    }

    /// Continues with the outcome produced by `function` on a `Failure` payload.
    pub fn or_else<F, R, O>(self, function: O) -> AsyncOutcome<T, F>
    where
        O: FnOnce(E) -> R + Send + 'static,
        R: IntoAsyncOutcome<T, F>,
        F: Send + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(error) => {
                    let next = function(error).into_async_outcome();
                    next.await
                }
            }
        })
    }

    /// Resolves both sides and compares them structurally.
    ///
    /// Nested deferred payloads are awaited at any depth, so a deferred
    /// layer compares equal to the settled layer it resolves to.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rustresult::factory::{success, success_async};
    ///
    /// let deferred = success_async::<_, ()>(success_async::<_, ()>(1));
    /// assert!(deferred.equal(success::<_, ()>(success::<_, ()>(1))).await);
    /// ```
    pub async fn equal<U, F, R>(self, other: R) -> bool
    where
        R: IntoAsyncOutcome<U, F>,
        Outcome<T, E>: EquivalentAsync<Outcome<U, F>>,
        U: Send + 'static,
        F: Send + 'static,
    {
        let other = other.into_async_outcome();
        let this = self.await;
        let other = other.await;
        this.equivalent_async(other).await
    }
}

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<Option<T>, E> {
    /// Resolves to the transposed outcome: `None` for `Success(None)`.
    pub async fn transpose(self) -> Option<Outcome<T, E>> {
        self.await.transpose()
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T, E> fmt::Debug for AsyncOutcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("AsyncOutcome").finish_non_exhaustive()
    }
}

impl<T, E> fmt::Display for AsyncOutcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<AsyncOutcome>")
    }
}

static_assertions::assert_impl_all!(AsyncOutcome<i32, String>: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn test_display_async_outcome() {
        let deferred = AsyncOutcome::<i32, String>::settled(Outcome::Success(42));
        assert_eq!(format!("{deferred}"), "<AsyncOutcome>");
    }

    #[rstest]
    #[tokio::test]
    async fn test_settled_resolves_immediately() {
        let deferred = AsyncOutcome::<i32, String>::settled(Outcome::Success(42));
        assert_eq!(deferred.await, Outcome::Success(42));
    }

    #[rstest]
    #[tokio::test]
    async fn test_combinators_are_lazy_until_awaited() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        let chained = AsyncOutcome::<i32, String>::settled(Outcome::Success(1)).map(move |value| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            value + 1
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(chained.await, Outcome::Success(2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_and_then_accepts_future_shape() {
        let chained = AsyncOutcome::<i32, String>::settled(Outcome::Success(2))
            .and_then(|value| async move { Outcome::<i32, String>::Success(value * 10) });
        assert_eq!(chained.await, Outcome::Success(20));
    }

    #[rstest]
    #[tokio::test]
    async fn test_transpose() {
        let deferred = AsyncOutcome::<Option<i32>, String>::settled(Outcome::Success(None));
        assert_eq!(deferred.transpose().await, None);
    }
}
