//! `Outcome` - a value that is either a success or a failure.
//!
//! `Outcome<T, E>` is an immutable two-variant container. The variant (the
//! *tag*) is fixed when the value is built and every combinator derives a new
//! `Outcome` instead of mutating the receiver.
//!
//! Every combinator runs its callback at most once, and only for the
//! matching variant. Callbacks are never guarded: a panicking callback
//! unwinds straight through the combinator. Converting panics into failure
//! payloads is the job of [`crate::resultify`].
//!
//! # Examples
//!
//! ```rust
//! use rustresult::factory::{failure, success};
//! use rustresult::outcome::Outcome;
//!
//! let parsed: Outcome<i32, String> = success(2);
//! let doubled = parsed.map(|value| value * 2);
//! assert_eq!(doubled, Outcome::Success(4));
//!
//! let broken: Outcome<i32, String> = failure("not a number".to_string());
//! assert_eq!(broken.unwrap_or(0), 0);
//! ```

use std::fmt;

use crate::equality::Equivalent;
use crate::error::UnwrapError;

/// A value that is either `Success(T)` or `Failure(E)`.
///
/// # Type Parameters
///
/// * `T` - The success payload
/// * `E` - The failure payload
///
/// # Examples
///
/// ```rust
/// use rustresult::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// let failure: Outcome<i32, String> = Outcome::Failure("error".to_string());
///
/// assert!(success.is_success());
/// assert!(failure.is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", content = "value")
)]
pub enum Outcome<T, E> {
    /// The success variant.
    #[cfg_attr(feature = "serde", serde(rename = "ok"))]
    Success(T),
    /// The failure variant.
    #[cfg_attr(feature = "serde", serde(rename = "err"))]
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Tag Predicates
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(-3);
    /// assert!(x.is_success());
    ///
    /// let y: Outcome<i32, &str> = Outcome::Failure("Some error message");
    /// assert!(!y.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Success` whose payload matches `predicate`.
    ///
    /// The predicate is not called for a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(2);
    /// assert!(x.is_success_and(|value| value > 1));
    ///
    /// let y: Outcome<i32, &str> = Outcome::Success(0);
    /// assert!(!y.is_success_and(|value| value > 1));
    ///
    /// let z: Outcome<i32, &str> = Outcome::Failure("Some error message");
    /// assert!(!z.is_success_and(|value| value > 1));
    /// ```
    #[inline]
    pub fn is_success_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Failure` whose payload matches `predicate`.
    ///
    /// The predicate is not called for a `Success`.
    #[inline]
    pub fn is_failure_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    // =========================================================================
    // Slot Extraction
    // =========================================================================

    /// Converts into `Option<T>`, discarding the failure payload if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(2);
    /// assert_eq!(x.ok(), Some(2));
    ///
    /// let y: Outcome<i32, &str> = Outcome::Failure("Some error message");
    /// assert_eq!(y.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding the success payload if any.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the payload, producing `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Mutably borrows the payload, producing `Outcome<&mut T, &mut E>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Iterates over the success payload: one item for `Success`, none for `Failure`.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a `Success` payload, leaving a `Failure` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<&str, &str> = Outcome::Success("foo");
    /// assert_eq!(x.map(|value| value.len()), Outcome::Success(3));
    ///
    /// let y: Outcome<&str, &str> = Outcome::Failure("bar");
    /// assert_eq!(y.map(|value| value.len()), Outcome::Failure("bar"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `default` for a `Failure`, or applies `function` to a `Success` payload.
    ///
    /// `default` is evaluated eagerly by the caller; use
    /// [`map_or_else`](Self::map_or_else) when computing it is expensive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<&str, &str> = Outcome::Success("foo");
    /// assert_eq!(x.map_or(42, |value| value.len()), 3);
    ///
    /// let y: Outcome<&str, &str> = Outcome::Failure("bar");
    /// assert_eq!(y.map_or(42, |value| value.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `default` to a `Failure` payload or `function` to a `Success` payload.
    ///
    /// Exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let k = 21;
    ///
    /// let x: Outcome<&str, &str> = Outcome::Success("foo");
    /// assert_eq!(x.map_or_else(|_| k * 2, |value| value.len()), 3);
    ///
    /// let y: Outcome<&str, &str> = Outcome::Failure("bar");
    /// assert_eq!(y.map_or_else(|_| k * 2, |value| value.len()), 42);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default(error),
        }
    }

    /// Applies `function` to a `Failure` payload, leaving a `Success` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<i32, u32> = Outcome::Failure(13);
    /// assert_eq!(x.map_failure(|code| format!("error code: {code}")),
    ///            Outcome::Failure("error code: 13".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Calls `function` with a reference to a `Success` payload and returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let x: Outcome<i32, &str> = Outcome::Success(4);
    /// let cubed = x.inspect(|value| seen.push(*value)).map(|value| value.pow(3));
    ///
    /// assert_eq!(cubed, Outcome::Success(64));
    /// assert_eq!(seen, vec![4]);
    /// ```
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to a `Failure` payload and returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the `Success` payload or `default`.
    ///
    /// `default` is evaluated eagerly by the caller; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) to compute it lazily.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the `Success` payload or computes one from the `Failure` payload.
    ///
    /// `function` runs exactly once for a `Failure` and never for a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let count = |error: &str| error.len();
    /// assert_eq!(Outcome::<usize, &str>::Success(2).unwrap_or_else(count), 2);
    /// assert_eq!(Outcome::<usize, &str>::Failure("foo").unwrap_or_else(count), 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    /// Returns the raw success slot without checking the tag.
    ///
    /// The call site is expected to have checked the tag already. On a
    /// `Failure` the slot is simply absent and `None` is returned; nothing
    /// traps.
    #[inline]
    pub fn unwrap_unchecked(self) -> Option<T> {
        self.ok()
    }

    /// Returns the raw failure slot without checking the tag.
    ///
    /// On a `Success` the slot is absent and `None` is returned.
    #[inline]
    pub fn unwrap_failure_unchecked(self) -> Option<E> {
        self.err()
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Returns `other` if this is a `Success`, otherwise this `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(2);
    /// let y: Outcome<&str, &str> = Outcome::Failure("late error");
    /// assert_eq!(x.and(y), Outcome::Failure("late error"));
    ///
    /// let x: Outcome<i32, &str> = Outcome::Failure("early error");
    /// let y: Outcome<&str, &str> = Outcome::Success("foo");
    /// assert_eq!(x.and(y), Outcome::Failure("early error"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `function` with a `Success` payload, short-circuiting a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// fn halve(value: u32) -> Outcome<u32, String> {
    ///     if value % 2 == 0 {
    ///         Outcome::Success(value / 2)
    ///     } else {
    ///         Outcome::Failure(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Success(8).and_then(halve).and_then(halve), Outcome::Success(2));
    /// assert_eq!(
    ///     Outcome::Success(3).and_then(halve),
    ///     Outcome::Failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this `Success`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Calls `function` with a `Failure` payload, short-circuiting a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let square = |value: u32| Outcome::<u32, u32>::Success(value * value);
    /// let fail = |value: u32| Outcome::<u32, u32>::Failure(value);
    ///
    /// assert_eq!(Outcome::Success(2).or_else(square).or_else(square), Outcome::Success(2));
    /// assert_eq!(Outcome::Failure(3).or_else(square).or_else(fail), Outcome::Success(9));
    /// assert_eq!(Outcome::Failure(3).or_else(fail).or_else(fail), Outcome::<u32, u32>::Failure(3));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Structurally compares this outcome with any outcome-like value.
    ///
    /// Tags must match, and the matching payloads are compared with
    /// [`Equivalent`], which recurses into nested outcomes. Two `NaN`
    /// payloads are equal; shared composites (`Arc`, `Rc`, `Vec`) compare
    /// by identity, never element by element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    /// use std::sync::Arc;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Success(1));
    /// assert!(nested.equal(&Outcome::<_, &str>::Success(Outcome::<_, &str>::Success(1))));
    ///
    /// let nan: Outcome<f64, ()> = Outcome::Success(f64::NAN);
    /// assert!(nan.equal(&Outcome::<f64, ()>::Success(f64::NAN)));
    ///
    /// let left: Outcome<Arc<Vec<i32>>, ()> = Outcome::Success(Arc::new(vec![1]));
    /// let right: Outcome<Arc<Vec<i32>>, ()> = Outcome::Success(Arc::new(vec![1]));
    /// assert!(!left.equal(&right));
    /// ```
    #[inline]
    pub fn equal<R>(&self, other: &R) -> bool
    where
        R: ?Sized,
        Self: Equivalent<R>,
    {
        self.equivalent(other)
    }
}

// =============================================================================
// Checked Unwrap Operations
// =============================================================================

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Returns the `Success` payload, or an [`UnwrapError`] carrying the
    /// stringified `Failure` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if this is a `Failure`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::new(error)),
        }
    }

    /// Like [`try_unwrap`](Self::try_unwrap), with `message` prefixed to the error.
    ///
    /// # Errors
    ///
    /// Returns an error if this is a `Failure`.
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::with_context(message, error)),
        }
    }

    /// Returns the `Success` payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with the stringified failure payload as
    /// the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(2);
    /// assert_eq!(x.unwrap(), 2);
    /// ```
    ///
    /// ```rust,should_panic
    /// use rustresult::outcome::Outcome;
    ///
    /// let y: Outcome<i32, &str> = Outcome::Failure("emergency failure");
    /// y.unwrap(); // panics with `emergency failure`
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => unwrap_failed(&error),
        }
    }

    /// Returns the `Success` payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with `"{message}: {failure}"` as the
    /// message.
    ///
    /// ```rust,should_panic
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Failure("emergency failure");
    /// x.expect("Failed to operate"); // panics with `Failed to operate: emergency failure`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(error) => unwrap_failed(&error),
        }
    }
}

impl<T: fmt::Display, E> Outcome<T, E> {
    /// Returns the `Failure` payload, or an [`UnwrapError`] carrying the
    /// stringified `Success` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if this is a `Success`.
    #[inline]
    pub fn try_unwrap_failure(self) -> Result<E, UnwrapError> {
        match self {
            Self::Success(value) => Err(UnwrapError::new(value)),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Like [`try_unwrap_failure`](Self::try_unwrap_failure), with `message`
    /// prefixed to the error.
    ///
    /// # Errors
    ///
    /// Returns an error if this is a `Success`.
    #[inline]
    pub fn try_expect_failure(self, message: &str) -> Result<E, UnwrapError> {
        match self {
            Self::Success(value) => Err(UnwrapError::with_context(message, value)),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the `Failure` payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`, with the stringified success payload as
    /// the message.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self.try_unwrap_failure() {
            Ok(error) => error,
            Err(error) => unwrap_failed(&error),
        }
    }

    /// Returns the `Failure` payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`, with `"{message}: {success}"` as the
    /// message.
    ///
    /// ```rust,should_panic
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(10);
    /// x.expect_failure("Testing expect_failure"); // panics with `Testing expect_failure: 10`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_failure(self, message: &str) -> E {
        match self.try_expect_failure(message) {
            Ok(error) => error,
            Err(error) => unwrap_failed(&error),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(error: &UnwrapError) -> ! {
    panic!("{error}")
}

// =============================================================================
// Transpose
// =============================================================================

impl<T, E> Outcome<Option<T>, E> {
    /// Transposes an `Outcome` of an `Option` into an `Option` of an `Outcome`.
    ///
    /// - `Success(None)` becomes `None`
    /// - `Success(Some(v))` becomes `Some(Success(v))`
    /// - `Failure(e)` becomes `Some(Failure(e))`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rustresult::outcome::Outcome;
    ///
    /// let x: Outcome<Option<i32>, &str> = Outcome::Success(Some(5));
    /// assert_eq!(x.transpose(), Some(Outcome::Success(5)));
    ///
    /// let y: Outcome<Option<i32>, &str> = Outcome::Success(None);
    /// assert_eq!(y.transpose(), None);
    /// ```
    #[inline]
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Self::Success(Some(value)) => Some(Outcome::Success(value)),
            Self::Success(None) => None,
            Self::Failure(error) => Some(Outcome::Failure(error)),
        }
    }
}

// =============================================================================
// Promotion to AsyncOutcome
// =============================================================================

#[cfg(feature = "async")]
impl<T, E> Outcome<T, E> {
    /// Promotes this outcome to an [`AsyncOutcome`](crate::async_outcome::AsyncOutcome)
    /// that is already settled.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rustresult::outcome::Outcome;
    ///
    /// let deferred = Outcome::<i32, String>::Success(1).into_async();
    /// assert_eq!(deferred.await, Outcome::Success(1));
    /// ```
    #[inline]
    pub fn into_async(self) -> crate::async_outcome::AsyncOutcome<T, E> {
        crate::async_outcome::AsyncOutcome::settled(self)
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// `Success(v)` becomes `Ok(v)` and `Failure(e)` becomes `Err(e)`.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
