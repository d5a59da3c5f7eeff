//! Pure transformations between attempts and terminal folds.

use std::sync::Arc;

use crate::{FailureReason, Failure};

use super::Attempt;

impl<T, F: FailureReason> Attempt<T, F> {
    /// Maps the success value, passing failures through unchanged.
    ///
    /// ```rust
    /// use attempt::{Attempt, FailureReason};
    ///
    /// #[derive(Debug, FailureReason)]
    /// enum Overflow { TooLarge }
    ///
    /// assert_eq!(Attempt::<i32, Overflow>::success(5).map(|x| x * 2).get(), 10);
    /// ```
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Attempt<U, F> {
        match self {
            Self::Success(value) => Attempt::Success(mapper(value)),
            Self::Failure(failure) => Attempt::Failure(failure),
        }
    }

    /// Replaces the success value with one produced by `supplier`, passing
    /// failures through unchanged.
    pub fn map_with<U>(self, supplier: impl FnOnce() -> U) -> Attempt<U, F> {
        match self {
            Self::Success(_) => Attempt::Success(supplier()),
            Self::Failure(failure) => Attempt::Failure(failure),
        }
    }

    /// Chains an operation that may itself fail with the same reason type.
    ///
    /// On success the result is exactly `mapper(value)`, never a nested
    /// attempt. On failure `mapper` is not called.
    pub fn map_attempt<U>(self, mapper: impl FnOnce(T) -> Attempt<U, F>) -> Attempt<U, F> {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(failure) => Attempt::Failure(failure),
        }
    }

    /// Supplier form of [`map_attempt`](Self::map_attempt).
    pub fn map_attempt_with<U>(self, supplier: impl FnOnce() -> Attempt<U, F>) -> Attempt<U, F> {
        match self {
            Self::Success(_) => supplier(),
            Self::Failure(failure) => Attempt::Failure(failure),
        }
    }

    /// Re-contextualises a failure under a new reason type.
    ///
    /// A success keeps its value. A failure becomes a new failure with
    /// `reason`, the original message, and the original failure as its
    /// cause, so displayable text survives while the chain records where the
    /// failure started.
    ///
    /// ```rust
    /// use attempt::{Attempt, FailureReason};
    ///
    /// #[derive(Debug, PartialEq, FailureReason)]
    /// enum Parse { NotANumber }
    /// #[derive(Debug, PartialEq, FailureReason)]
    /// enum Modify { InvalidValue }
    ///
    /// let parsed: Attempt<u32, Parse> = Attempt::failure_with_message(Parse::NotANumber, "'abc' is not a number");
    /// let modified = parsed.transform(Modify::InvalidValue);
    ///
    /// assert_eq!(modified.failure_reason(), &Modify::InvalidValue);
    /// assert_eq!(modified.failure_message().to_string(), "'abc' is not a number");
    /// let cause = modified.as_failure().and_then(|f| f.cause_as::<Parse>()).unwrap();
    /// assert_eq!(cause.reason(), &Parse::NotANumber);
    /// ```
    pub fn transform<G: FailureReason>(self, reason: G) -> Attempt<T, G> {
        match self {
            Self::Success(value) => Attempt::Success(value),
            Self::Failure(failure) => {
                tracing::trace!(
                    from = ?failure.reason(),
                    to = ?reason,
                    "re-contextualising failure"
                );
                let message = failure.message().clone();
                Attempt::Failure(Failure::caused(reason, message, Arc::new(failure)))
            }
        }
    }

    /// Folds the attempt into a plain value, applying exactly one mapper.
    ///
    /// The failure mapper receives only the reason; use
    /// [`fold`](Self::fold) to see the whole failure.
    pub fn transform_into<U>(
        self,
        success_mapper: impl FnOnce(T) -> U,
        failure_mapper: impl FnOnce(F) -> U,
    ) -> U {
        match self {
            Self::Success(value) => success_mapper(value),
            Self::Failure(failure) => failure_mapper(failure.into_reason()),
        }
    }

    /// Folds the attempt into a plain value, applying exactly one mapper.
    ///
    /// ```rust
    /// use attempt::{Attempt, FailureReason};
    ///
    /// #[derive(Debug, FailureReason)]
    /// enum Denied { NoPermission }
    ///
    /// let denied: Attempt<u8, _> = Attempt::failure(Denied::NoPermission, []);
    /// let text = denied.fold(|failure| format!("denied: {failure}"), |value| value.to_string());
    /// assert_eq!(text, "denied: Failed!");
    /// ```
    pub fn fold<N>(
        self,
        failure_mapper: impl FnOnce(Failure<F>) -> N,
        success_mapper: impl FnOnce(T) -> N,
    ) -> N {
        match self {
            Self::Success(value) => success_mapper(value),
            Self::Failure(failure) => failure_mapper(failure),
        }
    }
}
