//! Structural equality across nested, possibly deferred, outcomes.
//!
//! The comparison walks both sides in lock step:
//!
//! 1. resolve both operands to settled outcomes (awaiting any
//!    [`AsyncOutcome`](crate::async_outcome::AsyncOutcome) layer)
//! 2. compare tags; different tags are unequal
//! 3. recurse into the matching payload slot
//!
//! Recursion stops at leaf payloads. Scalars and strings compare by value,
//! except that two `NaN`s are equal. Composite payloads shared through
//! `Arc`, `Rc` or `Vec` compare by identity only: two separately allocated
//! vectors holding the same elements are unequal.
//!
//! Any type that exposes the tag and payload accessors of [`OutcomeLike`]
//! takes part in the comparison, so `std::result::Result` and foreign
//! outcome implementations compare against [`Outcome`] directly.
//!
//! Nesting must be finite; there is no cycle detection.
//!
//! # Examples
//!
//! ```rust
//! use rustresult::equality::equal;
//! use rustresult::outcome::Outcome;
//!
//! let ours: Outcome<Outcome<i32, String>, String> = Outcome::Success(Outcome::Success(1));
//! let theirs: Result<Result<i32, String>, String> = Ok(Ok(1));
//! assert!(equal(&ours, &theirs));
//! ```

use std::rc::Rc;
use std::sync::Arc;

use crate::outcome::Outcome;

/// Accessor contract for anything that behaves like an outcome.
///
/// Implementors report their tag through [`is_success`](Self::is_success)
/// and lend the payload of the matching slot. The slot of the other variant
/// must be `None`.
pub trait OutcomeLike {
    /// The success payload type.
    type Success;
    /// The failure payload type.
    type Failure;

    /// Returns `true` for the success tag.
    fn is_success(&self) -> bool;

    /// The success slot, `None` on the failure tag.
    fn success_slot(&self) -> Option<&Self::Success>;

    /// The failure slot, `None` on the success tag.
    fn failure_slot(&self) -> Option<&Self::Failure>;
}

impl<T, E> OutcomeLike for Outcome<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn is_success(&self) -> bool {
        Self::is_success(self)
    }

    #[inline]
    fn success_slot(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    #[inline]
    fn failure_slot(&self) -> Option<&E> {
        self.as_ref().err()
    }
}

impl<T, E> OutcomeLike for Result<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn success_slot(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    #[inline]
    fn failure_slot(&self) -> Option<&E> {
        self.as_ref().err()
    }
}

/// Structural equality used by [`Outcome::equal`].
///
/// Unlike `PartialEq`, `NaN` is equivalent to `NaN` and shared composites
/// compare by identity.
pub trait Equivalent<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` and `other` are structurally equal.
    fn equivalent(&self, other: &Rhs) -> bool;
}

/// Compares two outcome-like values with the structural algorithm.
///
/// # Examples
///
/// ```rust
/// use rustresult::equality::equal;
/// use rustresult::outcome::Outcome;
///
/// let left: Outcome<i32, &str> = Outcome::Success(1);
/// assert!(equal(&left, &Outcome::<i32, &str>::Success(1)));
/// assert!(!equal(&left, &Outcome::<i32, &str>::Failure("1")));
/// ```
pub fn equal<L, R>(left: &L, right: &R) -> bool
where
    L: OutcomeLike + ?Sized,
    R: OutcomeLike + ?Sized,
    L::Success: Equivalent<R::Success>,
    L::Failure: Equivalent<R::Failure>,
{
    let is_success = left.is_success();
    if is_success != right.is_success() {
        return false;
    }
    if is_success {
        match (left.success_slot(), right.success_slot()) {
            (Some(left), Some(right)) => left.equivalent(right),
            _ => false,
        }
    } else {
        match (left.failure_slot(), right.failure_slot()) {
            (Some(left), Some(right)) => left.equivalent(right),
            _ => false,
        }
    }
}

impl<T, E, R> Equivalent<R> for Outcome<T, E>
where
    R: OutcomeLike + ?Sized,
    T: Equivalent<R::Success>,
    E: Equivalent<R::Failure>,
{
    #[inline]
    fn equivalent(&self, other: &R) -> bool {
        equal(self, other)
    }
}

impl<T, E, R> Equivalent<R> for Result<T, E>
where
    R: OutcomeLike + ?Sized,
    T: Equivalent<R::Success>,
    E: Equivalent<R::Failure>,
{
    #[inline]
    fn equivalent(&self, other: &R) -> bool {
        equal(self, other)
    }
}

// =============================================================================
// Leaf Implementations
// =============================================================================

macro_rules! impl_value_equivalent {
    ($($value_type:ty),* $(,)?) => {
        $(
            impl Equivalent for $value_type {
                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_value_equivalent!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    str,
    String,
);

macro_rules! impl_float_equivalent {
    ($($float_type:ty),*) => {
        $(
            impl Equivalent for $float_type {
                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )*
    };
}

impl_float_equivalent!(f32, f64);

impl<T, U> Equivalent<&U> for &T
where
    T: Equivalent<U> + ?Sized,
    U: ?Sized,
{
    #[inline]
    fn equivalent(&self, other: &&U) -> bool {
        (**self).equivalent(*other)
    }
}

impl<T, U> Equivalent<Option<U>> for Option<T>
where
    T: Equivalent<U>,
{
    #[inline]
    fn equivalent(&self, other: &Option<U>) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.equivalent(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> Equivalent for Arc<T> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Equivalent for Rc<T> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T> Equivalent for Vec<T> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl<T> Equivalent for [T] {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

// =============================================================================
// Deferred Comparison
// =============================================================================

#[cfg(feature = "async")]
pub use self::deferred::{EquivalentAsync, equal_async};

#[cfg(feature = "async")]
mod deferred {
    use std::sync::Arc;

    use futures::FutureExt;
    use futures::future::{self, BoxFuture};

    use super::Equivalent;
    use crate::async_outcome::AsyncOutcome;
    use crate::outcome::Outcome;

    /// Structural equality that awaits deferred layers before comparing.
    ///
    /// Both sides are consumed: resolving an
    /// [`AsyncOutcome`] drives its computation to completion.
    pub trait EquivalentAsync<Rhs = Self>: Send + Sized + 'static {
        /// Resolves both sides and compares them structurally.
        fn equivalent_async(self, other: Rhs) -> BoxFuture<'static, bool>;
    }

    /// Resolves and compares two values that may contain deferred layers.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use rustresult::equality::equal_async;
    /// use rustresult::factory::{success, success_async};
    /// use rustresult::outcome::Outcome;
    ///
    /// let deferred = success_async::<_, ()>(success_async::<_, ()>(1));
    /// let settled: Outcome<Outcome<i32, ()>, ()> = success(success(1));
    /// assert!(equal_async(deferred, settled).await);
    /// ```
    pub async fn equal_async<L, R>(left: L, right: R) -> bool
    where
        L: EquivalentAsync<R>,
    {
        left.equivalent_async(right).await
    }

    macro_rules! impl_value_equivalent_async {
        ($($value_type:ty),* $(,)?) => {
            $(
                impl EquivalentAsync for $value_type {
                    #[inline]
                    fn equivalent_async(self, other: Self) -> BoxFuture<'static, bool> {
                        future::ready(self.equivalent(&other)).boxed()
                    }
                }
            )*
        };
    }

    impl_value_equivalent_async!(
        (),
        bool,
        char,
        i8,
        i16,
        i32,
        i64,
        i128,
        isize,
        u8,
        u16,
        u32,
        u64,
        u128,
        usize,
        f32,
        f64,
        String,
    );

    impl<T, U> EquivalentAsync<&'static U> for &'static T
    where
        T: Equivalent<U> + Sync + ?Sized,
        U: Sync + ?Sized,
    {
        fn equivalent_async(self, other: &'static U) -> BoxFuture<'static, bool> {
            future::ready(self.equivalent(other)).boxed()
        }
    }

    impl<T: ?Sized + Send + Sync + 'static> EquivalentAsync for Arc<T> {
        fn equivalent_async(self, other: Self) -> BoxFuture<'static, bool> {
            future::ready(Arc::ptr_eq(&self, &other)).boxed()
        }
    }

    /// Two moved vectors are two allocations, so they are never the same
    /// reference.
    impl<T: Send + 'static> EquivalentAsync for Vec<T> {
        fn equivalent_async(self, _other: Self) -> BoxFuture<'static, bool> {
            future::ready(false).boxed()
        }
    }

    impl<T, U> EquivalentAsync<Option<U>> for Option<T>
    where
        T: EquivalentAsync<U>,
        U: Send + 'static,
    {
        fn equivalent_async(self, other: Option<U>) -> BoxFuture<'static, bool> {
            match (self, other) {
                (Some(left), Some(right)) => left.equivalent_async(right),
                (None, None) => future::ready(true).boxed(),
                _ => future::ready(false).boxed(),
            }
        }
    }

    impl<T, E, U, F> EquivalentAsync<Outcome<U, F>> for Outcome<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: Outcome<U, F>) -> BoxFuture<'static, bool> {
            match (self, other) {
                (Outcome::Success(left), Outcome::Success(right)) => left.equivalent_async(right),
                (Outcome::Failure(left), Outcome::Failure(right)) => left.equivalent_async(right),
                _ => future::ready(false).boxed(),
            }
        }
    }

    impl<T, E, U, F> EquivalentAsync<AsyncOutcome<U, F>> for Outcome<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: AsyncOutcome<U, F>) -> BoxFuture<'static, bool> {
            async move {
                let other = other.await;
                self.equivalent_async(other).await
            }
            .boxed()
        }
    }

    impl<T, E, U, F> EquivalentAsync<Outcome<U, F>> for AsyncOutcome<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: Outcome<U, F>) -> BoxFuture<'static, bool> {
            async move {
                let this = self.await;
                this.equivalent_async(other).await
            }
            .boxed()
        }
    }

    impl<T, E, U, F> EquivalentAsync<AsyncOutcome<U, F>> for AsyncOutcome<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: AsyncOutcome<U, F>) -> BoxFuture<'static, bool> {
            async move {
                let this = self.await;
                let other = other.await;
                this.equivalent_async(other).await
            }
            .boxed()
        }
    }

    // `Result` takes part through its `Outcome` form at any layer.

    impl<T, E, U, F> EquivalentAsync<Outcome<U, F>> for Result<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: Outcome<U, F>) -> BoxFuture<'static, bool> {
            Outcome::from(self).equivalent_async(other)
        }
    }

    impl<T, E, U, F> EquivalentAsync<Result<U, F>> for Outcome<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: Result<U, F>) -> BoxFuture<'static, bool> {
            self.equivalent_async(Outcome::from(other))
        }
    }

    impl<T, E, U, F> EquivalentAsync<Result<U, F>> for Result<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: Result<U, F>) -> BoxFuture<'static, bool> {
            Outcome::from(self).equivalent_async(Outcome::from(other))
        }
    }

    impl<T, E, U, F> EquivalentAsync<AsyncOutcome<U, F>> for Result<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: AsyncOutcome<U, F>) -> BoxFuture<'static, bool> {
            Outcome::from(self).equivalent_async(other)
        }
    }

    impl<T, E, U, F> EquivalentAsync<Result<U, F>> for AsyncOutcome<T, E>
    where
        T: EquivalentAsync<U>,
        E: EquivalentAsync<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        fn equivalent_async(self, other: Result<U, F>) -> BoxFuture<'static, bool> {
            self.equivalent_async(Outcome::from(other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Nested = Outcome<Outcome<i32, &'static str>, &'static str>;

    #[rstest]
    #[case(Outcome::Success(Outcome::Success(1)), Outcome::Success(Outcome::Success(1)), true)]
    #[case(Outcome::Success(Outcome::Failure("err")), Outcome::Success(Outcome::Failure("err")), true)]
    #[case(Outcome::Failure("err"), Outcome::Failure("err"), true)]
    #[case(Outcome::Success(Outcome::Success(1)), Outcome::Success(Outcome::Success(2)), false)]
    #[case(Outcome::Success(Outcome::Success(1)), Outcome::Success(Outcome::Failure("err")), false)]
    #[case(Outcome::Failure("err 1"), Outcome::Failure("err 2"), false)]
    fn test_nested_equality(#[case] left: Nested, #[case] right: Nested, #[case] expected: bool) {
        assert_eq!(equal(&left, &right), expected);
        assert_eq!(equal(&right, &left), expected);
    }

    #[rstest]
    fn test_nan_payloads_are_equal() {
        let left: Outcome<f64, ()> = Outcome::Success(f64::NAN);
        let right: Outcome<f64, ()> = Outcome::Success(f64::NAN);
        assert!(left.equal(&right));
        assert_ne!(left, right);
    }

    #[rstest]
    fn test_composites_compare_by_identity() {
        let shared = Arc::new(vec![1]);
        let left: Outcome<Arc<Vec<i32>>, ()> = Outcome::Success(Arc::clone(&shared));
        let same: Outcome<Arc<Vec<i32>>, ()> = Outcome::Success(shared);
        let distinct: Outcome<Arc<Vec<i32>>, ()> = Outcome::Success(Arc::new(vec![1]));

        assert!(left.equal(&same));
        assert!(!left.equal(&distinct));
    }

    #[rstest]
    fn test_vec_payload_equals_only_itself() {
        let left: Outcome<Vec<i32>, ()> = Outcome::Success(vec![1]);
        let right: Outcome<Vec<i32>, ()> = Outcome::Success(vec![1]);
        assert!(left.equal(&left));
        assert!(!left.equal(&right));
    }

    #[rstest]
    fn test_absent_payloads() {
        let left: Outcome<Option<i32>, ()> = Outcome::Success(None);
        assert!(left.equal(&Outcome::<Option<i32>, ()>::Success(None)));
        assert!(!left.equal(&Outcome::<Option<i32>, ()>::Success(Some(1))));
    }

    #[rstest]
    fn test_foreign_outcome_like_is_comparable() {
        let ours: Outcome<Outcome<i32, String>, String> = Outcome::Success(Outcome::Success(1));
        let theirs: Outcome<Result<i32, String>, String> = Outcome::Success(Ok(1));
        let other: Outcome<Result<i32, String>, String> = Outcome::Success(Ok(2));

        assert!(ours.equal(&theirs));
        assert!(!ours.equal(&other));
    }
}
