//! `anyhow` adapters for unwrapping attempts inside fallible tests.

use std::fmt;

use anyhow::{Result, anyhow};
use attempt::{Attempt, Failure, FailureReason};

/// Returns the success value or an error describing the failure.
///
/// # Errors
///
/// Returns an error carrying the failure reason and message when the attempt
/// failed.
pub fn expect_success<T, F: FailureReason>(attempt: Attempt<T, F>) -> Result<T> {
    attempt.to_try_with(|failure| {
        anyhow!(
            "expected success, got {:?}: {}",
            failure.reason(),
            failure.message()
        )
    })
}

/// Returns the failure or an error describing the unexpected value.
///
/// # Errors
///
/// Returns an error carrying the value when the attempt succeeded.
pub fn expect_failure<T: fmt::Debug, F: FailureReason>(attempt: Attempt<T, F>) -> Result<Failure<F>> {
    match attempt {
        Attempt::Success(value) => Err(anyhow!("expected failure, got success {value:?}")),
        Attempt::Failure(failure) => Ok(failure),
    }
}
