//! Conversions from failures into the default interop error.

use crate::{FailureReason, Failure};

use super::AttemptError;

impl<F: FailureReason> From<Failure<F>> for AttemptError {
    fn from(failure: Failure<F>) -> Self {
        let message = failure.message().to_string();
        let reason = format!("{:?}", failure.reason());
        let message_key = failure.reason().message_key().to_owned();
        let (_, _, cause) = failure.into_parts();
        Self::new(message, reason, message_key, cause)
    }
}

impl<F: FailureReason> From<&Failure<F>> for AttemptError {
    fn from(failure: &Failure<F>) -> Self {
        Self::new(
            failure.message().to_string(),
            format!("{:?}", failure.reason()),
            failure.reason().message_key().to_owned(),
            failure.shared_cause(),
        )
    }
}
