//! Error types raised by the container protocol and its adapters.
//!
//! The containers themselves raise exactly one kind of error: a checked
//! unwrap on the non-matching variant ([`UnwrapError`]). Everything else in
//! this module belongs to the adapter boundaries:
//!
//! - [`DecodeError`]: malformed tagged JSON handed to the `json` adapter
//! - [`TransactionError`] / [`TransactionFailure`]: the transaction adapter
//!
//! Callback panics are never represented here. A combinator that receives a
//! panicking callback lets the panic unwind through the call; only
//! [`crate::resultify`] and the transaction adapter turn panics into values.

use std::fmt;

/// The category of an error produced by this crate.
///
/// # Examples
///
/// ```rust
/// use rustresult::error::{ErrorKind, UnwrapError};
///
/// let error = UnwrapError::new("emergency failure");
/// assert_eq!(error.kind(), ErrorKind::Unwrap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A checked unwrap was called on the non-matching variant.
    Unwrap,
    /// A tagged JSON value could not be decoded into an `Outcome`.
    Decode,
    /// A transactional resource failed to open, commit or roll back.
    Transaction,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unwrap => "unwrap",
            Self::Decode => "decode",
            Self::Transaction => "transaction",
        };
        formatter.write_str(name)
    }
}

/// Error raised by a checked unwrap on the wrong variant.
///
/// The message embeds the payload of the *other* variant, rendered with
/// `Display`, and is prefixed with the caller's context for `expect` and
/// `expect_failure`.
///
/// # Examples
///
/// ```rust
/// use rustresult::factory::failure;
///
/// let error = failure::<i32, _>("emergency failure")
///     .try_expect("Failed to operate")
///     .unwrap_err();
/// assert_eq!(error.to_string(), "Failed to operate: emergency failure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Creates an error whose message is the stringified payload.
    pub fn new(payload: impl fmt::Display) -> Self {
        Self {
            message: payload.to_string(),
        }
    }

    /// Creates an error whose message is `"{context}: {payload}"`.
    pub fn with_context(context: &str, payload: impl fmt::Display) -> Self {
        Self {
            message: format!("{context}: {payload}"),
        }
    }

    /// Always [`ErrorKind::Unwrap`].
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Unwrap
    }

    /// The rendered message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error produced when tagged JSON cannot be decoded.
///
/// Decoding reports these as the failure payload of an outer `Outcome`
/// rather than returning them through `Result`.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input was not a JSON object (number, string, boolean or null).
    #[error("expected a tagged object, found {found}")]
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },
    /// The object had no `type` field, or the tag was neither `ok` nor `err`.
    #[error("Cannot parse to Result")]
    UnrecognizedShape,
    /// The tag was recognized but the payload did not fit the target type.
    #[error("invalid payload: {0}")]
    Payload(String),
}

impl DecodeError {
    /// Always [`ErrorKind::Decode`].
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Decode
    }
}

/// Error reported by a [`crate::transaction::TransactionalResource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} failed: {reason}")]
pub struct TransactionError {
    /// The resource step that failed (`"connect"`, `"begin"`, `"commit"`, ...).
    pub operation: &'static str,
    /// Human-readable reason reported by the resource.
    pub reason: String,
}

impl TransactionError {
    /// Creates a new error for the given step.
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }

    /// Always [`ErrorKind::Transaction`].
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Transaction
    }
}

/// Failure payload of a transaction run through [`crate::transaction::transaction`].
///
/// `E` is the failure type of the caller's own outcome.
#[derive(Debug, thiserror::Error)]
pub enum TransactionFailure<E> {
    /// The callback settled to a failure; the transaction was rolled back.
    #[error("transaction rolled back: {0}")]
    Rejected(E),
    /// The callback panicked; the transaction was rolled back.
    #[error("transaction callback panicked: {}", .0.message())]
    Panicked(crate::resultify::Panic),
    /// The resource itself failed to connect, begin or commit.
    #[error(transparent)]
    Resource(#[from] TransactionError),
}

impl<E> TransactionFailure<E> {
    /// Returns the caller's failure payload if the callback failed.
    pub fn rejected(self) -> Option<E> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Panicked(_) | Self::Resource(_) => None,
        }
    }
}
