//! # rustresult
//!
//! Success/failure values for Rust, with a deferred counterpart that
//! composes the same way.
//!
//! ## Overview
//!
//! - **`Outcome<T, E>`**: an immutable `Success(T)` / `Failure(E)` value with
//!   a full combinator surface (`map`, `and_then`, `unwrap_or_else`, ...).
//! - **`AsyncOutcome<T, E>`**: a computation that settles to an `Outcome`.
//!   Its combinators chain lazily and it can be awaited directly.
//! - **Structural equality** across settled and deferred layers, at any
//!   nesting depth.
//! - **Factories** for both kinds of values.
//! - **`resultify`**: adapters that turn panics into failure payloads.
//! - **Adapters**: tagged JSON encoding and transaction scopes.
//!
//! ## Feature Flags
//!
//! - `async` (default): `AsyncOutcome`, deferred equality, async adapters
//! - `serde`: `Serialize`/`Deserialize` for `Outcome` and the `json` module
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rustresult::prelude::*;
//!
//! let parsed: Outcome<i32, String> = success(20);
//! let total = parsed
//!     .and_then(|value| if value > 0 { success(value + 1) } else { failure("negative".to_string()) })
//!     .unwrap_or(0);
//! assert_eq!(total, 21);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rustresult::prelude::*;
/// ```
pub mod prelude {
    pub use crate::equality::{Equivalent, OutcomeLike, equal};
    pub use crate::error::{ErrorKind, UnwrapError};
    pub use crate::factory::{failure, success};
    pub use crate::outcome::Outcome;
    pub use crate::resultify::{Panic, catch, resultify, resultify_sync};

    #[cfg(feature = "async")]
    pub use crate::async_outcome::{AsyncOutcome, IntoAsyncOutcome};

    #[cfg(feature = "async")]
    pub use crate::equality::{EquivalentAsync, equal_async};

    #[cfg(feature = "async")]
    pub use crate::factory::{
        failure_async, failure_from_future, from_async_source, success_async,
        success_from_future,
    };

    #[cfg(feature = "async")]
    pub use crate::resultify::{resultify_async, resultify_future};
}

pub mod equality;
pub mod error;
pub mod factory;
pub mod outcome;
pub mod resultify;

#[cfg(feature = "async")]
pub mod async_outcome;

#[cfg(feature = "async")]
pub mod transaction;

#[cfg(feature = "serde")]
pub mod json;

pub use outcome::Outcome;

#[cfg(feature = "async")]
pub use async_outcome::AsyncOutcome;
