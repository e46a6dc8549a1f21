//! Running an outcome-returning callback inside a transaction.
//!
//! [`transaction`] opens a scope on a [`TransactionalResource`], runs the
//! callback with the resource's handle, and then:
//!
//! - commits when the callback settles to `Success`
//! - rolls back when it settles to `Failure` or panics
//! - always releases the resource once a connection was made
//!
//! Rollback errors are logged and swallowed so the original failure is the
//! one the caller sees.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rustresult::factory::success;
//! use rustresult::transaction::transaction;
//!
//! let inserted = transaction(pool_client, |connection| async move {
//!     success::<_, String>(connection.insert("row").await)
//! })
//! .await;
//! ```

use std::fmt;

use futures::future::BoxFuture;

use crate::async_outcome::{AsyncOutcome, IntoAsyncOutcome};
use crate::error::{TransactionError, TransactionFailure};
use crate::outcome::Outcome;
use crate::resultify::{catch, resultify_future};

/// SQL transaction isolation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsolationLevel {
    /// `READ UNCOMMITTED`
    ReadUncommitted,
    /// `READ COMMITTED`
    ReadCommitted,
    /// `REPEATABLE READ`
    RepeatableRead,
    /// `SERIALIZABLE`
    Serializable,
}

impl IsolationLevel {
    /// The SQL spelling of the level.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::ReadUncommitted => "READ UNCOMMITTED",
            Self::ReadCommitted => "READ COMMITTED",
            Self::RepeatableRead => "REPEATABLE READ",
            Self::Serializable => "SERIALIZABLE",
        }
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_sql())
    }
}

/// A resource that can run a unit of work atomically.
///
/// Implement this for a connection pool client, a database session, or a
/// test double. The steps are called in order `connect`, `begin`, then one
/// of `commit` / `rollback`, then `release`.
pub trait TransactionalResource: Send {
    /// The handle passed to the transaction callback.
    type Handle: Send + 'static;

    /// Acquires the underlying connection.
    fn connect(&mut self) -> BoxFuture<'_, Result<(), TransactionError>>;

    /// Opens the transaction, optionally with an isolation level.
    fn begin(
        &mut self,
        isolation: Option<IsolationLevel>,
    ) -> BoxFuture<'_, Result<(), TransactionError>>;

    /// Returns the handle the callback works with.
    fn handle(&self) -> Self::Handle;

    /// Makes the transaction's effects permanent.
    fn commit(&mut self) -> BoxFuture<'_, Result<(), TransactionError>>;

    /// Discards the transaction's effects.
    fn rollback(&mut self) -> BoxFuture<'_, Result<(), TransactionError>>;

    /// Returns the connection. Called exactly once after a successful `connect`.
    fn release(&mut self) -> BoxFuture<'_, ()>;
}

/// Runs `run` inside a transaction with the resource's default isolation level.
pub fn transaction<R, T, E, O, F>(resource: R, run: F) -> AsyncOutcome<T, TransactionFailure<E>>
where
    R: TransactionalResource + 'static,
    F: FnOnce(R::Handle) -> O + Send + 'static,
    O: IntoAsyncOutcome<T, E>,
    T: Send + 'static,
    E: Send + 'static,
{
    run_transaction(resource, None, run)
}

/// Runs `run` inside a transaction opened with `isolation`.
pub fn transaction_with_isolation<R, T, E, O, F>(
    resource: R,
    isolation: IsolationLevel,
    run: F,
) -> AsyncOutcome<T, TransactionFailure<E>>
where
    R: TransactionalResource + 'static,
    F: FnOnce(R::Handle) -> O + Send + 'static,
    O: IntoAsyncOutcome<T, E>,
    T: Send + 'static,
    E: Send + 'static,
{
    run_transaction(resource, Some(isolation), run)
}

fn run_transaction<R, T, E, O, F>(
    mut resource: R,
    isolation: Option<IsolationLevel>,
    run: F,
) -> AsyncOutcome<T, TransactionFailure<E>>
where
    R: TransactionalResource + 'static,
    F: FnOnce(R::Handle) -> O + Send + 'static,
    O: IntoAsyncOutcome<T, E>,
    T: Send + 'static,
    E: Send + 'static,
{
    AsyncOutcome::from_future(async move {
        if let Err(error) = resource.connect().await {
            return Outcome::Failure(TransactionFailure::Resource(error));
        }
        let outcome = run_in_scope(&mut resource, isolation, run).await;
        resource.release().await;
        outcome
    })
}

async fn run_in_scope<R, T, E, O, F>(
    resource: &mut R,
    isolation: Option<IsolationLevel>,
    run: F,
) -> Outcome<T, TransactionFailure<E>>
where
    R: TransactionalResource,
    F: FnOnce(R::Handle) -> O,
    O: IntoAsyncOutcome<T, E>,
    T: Send + 'static,
    E: Send + 'static,
{
    if let Err(error) = resource.begin(isolation).await {
        return Outcome::Failure(TransactionFailure::Resource(error));
    }

    let handle = resource.handle();
    let settled = match catch(|| run(handle).into_async_outcome()) {
        Outcome::Success(pending) => resultify_future(pending).await,
        Outcome::Failure(panic) => Outcome::Failure(panic),
    };

    match settled {
        Outcome::Success(Outcome::Success(value)) => match resource.commit().await {
            Ok(()) => {
                tracing::debug!("transaction committed");
                Outcome::Success(value)
            }
            Err(error) => {
                rollback_quietly(resource).await;
                Outcome::Failure(TransactionFailure::Resource(error))
            }
        },
        Outcome::Success(Outcome::Failure(error)) => {
            rollback_quietly(resource).await;
            Outcome::Failure(TransactionFailure::Rejected(error))
        }
        Outcome::Failure(panic) => {
            rollback_quietly(resource).await;
            Outcome::Failure(TransactionFailure::Panicked(panic))
        }
    }
}

async fn rollback_quietly<R: TransactionalResource>(resource: &mut R) {
    match resource.rollback().await {
        Ok(()) => tracing::debug!("transaction rolled back"),
        Err(error) => tracing::warn!(%error, "rollback failed, keeping the original failure"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(IsolationLevel::ReadUncommitted, "READ UNCOMMITTED")]
    #[case(IsolationLevel::ReadCommitted, "READ COMMITTED")]
    #[case(IsolationLevel::RepeatableRead, "REPEATABLE READ")]
    #[case(IsolationLevel::Serializable, "SERIALIZABLE")]
    fn test_isolation_level_sql(#[case] level: IsolationLevel, #[case] expected: &str) {
        assert_eq!(level.to_string(), expected);
    }
}
