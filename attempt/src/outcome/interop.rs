//! Bridges between attempts and `std::result::Result`.

use crate::{AttemptError, FailureReason, Failure};

use super::Attempt;

impl<T, F: FailureReason> Attempt<T, F> {
    /// Converts to a `Result` whose error is an [`AttemptError`] built from
    /// the failure message.
    ///
    /// The error's `source()` is the failure's cause, so the causal chain
    /// survives the conversion.
    ///
    /// # Errors
    ///
    /// Returns an [`AttemptError`] when the attempt failed.
    pub fn to_try(self) -> Result<T, AttemptError> {
        self.to_try_with(AttemptError::from)
    }

    /// Converts to a `Result`, building the error from the failure with
    /// `error_for`.
    ///
    /// # Errors
    ///
    /// Returns `error_for(failure)` when the attempt failed.
    pub fn to_try_with<E>(self, error_for: impl FnOnce(Failure<F>) -> E) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(error_for(failure)),
        }
    }

    /// Converts to a `Result` carrying the failure itself, so `?` can
    /// propagate it through ordinary Rust code.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] when the attempt failed.
    pub fn into_result(self) -> Result<T, Failure<F>> {
        self.to_try_with(|failure| failure)
    }
}

impl<T, F: FailureReason> From<Result<T, Failure<F>>> for Attempt<T, F> {
    fn from(result: Result<T, Failure<F>>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<T, F: FailureReason> From<Attempt<T, F>> for Result<T, Failure<F>> {
    fn from(attempt: Attempt<T, F>) -> Self {
        attempt.into_result()
    }
}
