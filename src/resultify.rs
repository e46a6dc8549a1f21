//! Turning panicking code into outcomes.
//!
//! This is the only place in the crate where a panic becomes a value.
//! Combinators on [`Outcome`] and [`AsyncOutcome`] let callback panics
//! unwind; wrap the callback with one of these adapters when a panic should
//! become a `Failure` instead.
//!
//! - [`catch`]: runs a closure once.
//! - [`resultify_sync`]: wraps a function so every call returns an `Outcome`.
//! - [`resultify_async`]: wraps a function returning a future; panics while
//!   calling it and while polling the future both become failures.
//! - [`resultify_future`]: wraps a single future.
//! - [`resultify`]: curried form that pins the failure type.
//!
//! # Examples
//!
//! ```rust
//! use rustresult::resultify::resultify_sync;
//!
//! let parse = resultify_sync(|input: &str| input.parse::<i32>().expect("not a number"));
//!
//! assert_eq!(parse("42").ok(), Some(42));
//! assert!(parse("forty-two").is_failure());
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::panic::{AssertUnwindSafe, catch_unwind};

#[cfg(feature = "async")]
use std::future::Future;

#[cfg(feature = "async")]
use futures::FutureExt;

#[cfg(feature = "async")]
use crate::async_outcome::AsyncOutcome;
use crate::outcome::Outcome;

// =============================================================================
// Panic
// =============================================================================

/// A caught panic payload.
///
/// The payload is whatever value was passed to `panic!` (or
/// `std::panic::panic_any`), kept as-is so the caller can recover it.
///
/// # Examples
///
/// ```rust
/// use rustresult::resultify::catch;
///
/// let outcome = catch(|| -> i32 { panic!("x") });
/// let panic = outcome.err().unwrap();
/// assert_eq!(panic.message(), "x");
/// ```
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    /// Wraps a payload returned by `catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// The panic message if the payload is a string, `"Unknown panic"` otherwise.
    pub fn message(&self) -> &str {
        if let Some(message) = self.payload.downcast_ref::<&str>() {
            message
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            message
        } else {
            "Unknown panic"
        }
    }

    /// Returns a reference to the payload if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Recovers the payload as `T`, or returns `self` unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` if the payload is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.payload.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Self { payload }),
        }
    }

    /// Returns the raw payload, e.g. to resume unwinding with
    /// `std::panic::resume_unwind`.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl From<Box<dyn Any + Send>> for Panic {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::from_payload(payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Panic")
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl std::error::Error for Panic {}

fn caught(payload: Box<dyn Any + Send>) -> Panic {
    let panic = Panic::from_payload(payload);
    tracing::debug!(panic_message = panic.message(), "panic converted into a failure");
    panic
}

// =============================================================================
// Synchronous Adapters
// =============================================================================

/// Runs `function`, turning a panic into `Failure(Panic)`.
pub fn catch<T, F>(function: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(caught(payload)),
    }
}

/// Wraps `function` so that each call returns an [`Outcome`].
///
/// Functions taking several arguments can be adapted by taking a tuple.
///
/// # Examples
///
/// ```rust
/// use rustresult::resultify::resultify_sync;
///
/// let divide = resultify_sync(|(numerator, denominator): (i32, i32)| numerator / denominator);
///
/// assert_eq!(divide((10, 2)).ok(), Some(5));
/// assert!(divide((1, 0)).is_failure());
/// ```
pub fn resultify_sync<A, T, F>(function: F) -> impl Fn(A) -> Outcome<T, Panic>
where
    F: Fn(A) -> T,
{
    move |argument| catch(|| function(argument))
}

// =============================================================================
// Asynchronous Adapters
// =============================================================================

/// Wraps `future` so that a panic while polling it settles to `Failure(Panic)`.
#[cfg(feature = "async")]
pub fn resultify_future<T, Fut>(future: Fut) -> AsyncOutcome<T, Panic>
where
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    AsyncOutcome::from_future(async move {
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => Outcome::Success(value),
            Err(payload) => Outcome::Failure(caught(payload)),
        }
    })
}

/// Wraps an asynchronous `function` so that each call returns an [`AsyncOutcome`].
///
/// A panic raised while calling `function` and a panic raised while polling
/// the future it returned both settle to `Failure(Panic)`.
///
/// # Examples
///
/// ```rust,ignore
/// use rustresult::resultify::resultify_async;
///
/// let fetch = resultify_async(|id: u32| async move {
///     assert!(id != 0, "invalid id");
///     id * 10
/// });
///
/// assert_eq!(fetch(1).ok().await, Some(10));
/// assert!(fetch(0).is_failure().await);
/// ```
#[cfg(feature = "async")]
pub fn resultify_async<A, T, F, Fut>(function: F) -> impl Fn(A) -> AsyncOutcome<T, Panic>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    move |argument| match catch(|| function(argument)) {
        Outcome::Success(future) => resultify_future(future),
        Outcome::Failure(panic) => AsyncOutcome::settled(Outcome::Failure(panic)),
    }
}

// =============================================================================
// Curried Form
// =============================================================================

/// Adapter that converts caught panics into a caller-chosen failure type `E`.
///
/// Built with [`resultify`]. Choosing `E` is not only a typing decision:
/// every caught panic is passed through `E::from(panic)` at runtime, so a
/// conversion that keeps only the message drops the original payload.
/// With `E = Panic` the conversion is the identity and the payload survives
/// unchanged, exactly as with [`resultify_sync`] and [`resultify_async`].
///
/// # Examples
///
/// ```rust
/// use rustresult::resultify::{Panic, resultify};
///
/// #[derive(Debug)]
/// struct ParseFailure(String);
///
/// impl From<Panic> for ParseFailure {
///     fn from(panic: Panic) -> Self {
///         Self(panic.message().to_string())
///     }
/// }
///
/// let parse = resultify::<ParseFailure>().sync(|input: &str| -> i32 {
///     input.parse().expect("bad input")
/// });
/// let failure = parse("x").err().unwrap();
/// assert!(failure.0.starts_with("bad input"));
/// ```
pub struct Resultify<E> {
    failure: PhantomData<fn() -> E>,
}

/// Starts a curried adapter whose failure payload is `E`.
pub const fn resultify<E: From<Panic>>() -> Resultify<E> {
    Resultify {
        failure: PhantomData,
    }
}

impl<E: From<Panic>> Resultify<E> {
    /// Like [`resultify_sync`], with failures converted into `E`.
    pub fn sync<A, T, F>(self, function: F) -> impl Fn(A) -> Outcome<T, E>
    where
        F: Fn(A) -> T,
    {
        let wrapped = resultify_sync(function);
        move |argument| wrapped(argument).map_failure(E::from)
    }

    /// Like [`resultify_async`], with failures converted into `E`.
    #[cfg(feature = "async")]
    pub fn asynchronous<A, T, F, Fut>(self, function: F) -> impl Fn(A) -> AsyncOutcome<T, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let wrapped = resultify_async(function);
        move |argument| wrapped(argument).map_failure(E::from)
    }

    /// Like [`resultify_future`], with failures converted into `E`.
    #[cfg(feature = "async")]
    pub fn future<T, Fut>(self, future: Fut) -> AsyncOutcome<T, E>
    where
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        resultify_future(future).map_failure(E::from)
    }
}

impl<E> Clone for Resultify<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Resultify<E> {}

impl<E> fmt::Debug for Resultify<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Resultify").finish()
    }
}
