//! Extensions for lifting `Result` and `Option` values into attempts.
//!
//! These helpers cut down on `match` blocks at the boundary between ordinary
//! Rust APIs and code that reports failures through [`Attempt`].
//!
//! - [`AttemptResultExt::into_attempt`] turns an `Err` into a failure with the
//!   error text available as the `{error}` placeholder.
//! - [`AttemptOptionExt::ok_or_failure`] turns `None` into a failure.
//!
//! # Examples
//!
//! ```
//! use attempt::{AttemptResultExt, FailureReason};
//!
//! #[derive(Debug, FailureReason)]
//! enum Parse {
//!     #[failure_reason(template = "not a number: {error}")]
//!     NotANumber,
//! }
//!
//! let parsed = "abc".parse::<u32>().into_attempt(Parse::NotANumber);
//! assert_eq!(
//!     parsed.failure_message().to_string(),
//!     "not a number: invalid digit found in string"
//! );
//! ```

use std::fmt;

use crate::{Attempt, FailureReason, MessageReplacement, Replace};

/// Lifts `Result<T, E>` into an [`Attempt`].
pub trait AttemptResultExt<T, E> {
    /// Converts `Err(e)` into a failure for `reason`, passing the error's
    /// display text as the `{error}` replacement.
    fn into_attempt<F: FailureReason>(self, reason: F) -> Attempt<T, F>;

    /// Converts `Err(e)` into a failure for `reason` with replacements built
    /// from the error.
    fn into_attempt_with<F, R>(self, reason: F, replacements: impl FnOnce(&E) -> R) -> Attempt<T, F>
    where
        F: FailureReason,
        R: IntoIterator<Item = MessageReplacement>;
}

impl<T, E: fmt::Display> AttemptResultExt<T, E> for Result<T, E> {
    fn into_attempt<F: FailureReason>(self, reason: F) -> Attempt<T, F> {
        self.into_attempt_with(reason, |err| [Replace::ERROR.with(err.to_string())])
    }

    fn into_attempt_with<F, R>(self, reason: F, replacements: impl FnOnce(&E) -> R) -> Attempt<T, F>
    where
        F: FailureReason,
        R: IntoIterator<Item = MessageReplacement>,
    {
        match self {
            Ok(value) => Attempt::success(value),
            Err(err) => Attempt::failure(reason, replacements(&err)),
        }
    }
}

/// Lifts `Option<T>` into an [`Attempt`].
pub trait AttemptOptionExt<T> {
    /// Converts `None` into a failure for `reason` with `replacements`.
    fn ok_or_failure<F: FailureReason>(
        self,
        reason: F,
        replacements: impl IntoIterator<Item = MessageReplacement>,
    ) -> Attempt<T, F>;
}

impl<T> AttemptOptionExt<T> for Option<T> {
    fn ok_or_failure<F: FailureReason>(
        self,
        reason: F,
        replacements: impl IntoIterator<Item = MessageReplacement>,
    ) -> Attempt<T, F> {
        match self {
            Some(value) => Attempt::success(value),
            None => Attempt::failure(reason, replacements),
        }
    }
}
