//! Contract violations and the default interop error.

use std::sync::Arc;

use thiserror::Error;

use crate::Message;
use crate::failure::Cause;

/// Raised when an accessor is called against the wrong variant.
///
/// Reaching one of these is a bug in the calling code. Panicking accessors
/// such as [`Attempt::get`](crate::Attempt::get) abort with this value's
/// display text; the `try_*` forms hand it back instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum InvalidStateError {
    /// A value was requested from a failure.
    #[error("no value as attempt is a failure")]
    NoValue,

    /// A failure reason was requested from a success.
    #[error("no failure reason as attempt is a success")]
    NoFailureReason,

    /// A failure message was requested from a success.
    #[error("no failure message as attempt is a success")]
    NoFailureMessage,
}

impl InvalidStateError {
    /// Catalogue identifier for the localised form of this error.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::NoValue => "attempt.invalid-state.no-value",
            Self::NoFailureReason => "attempt.invalid-state.no-reason",
            Self::NoFailureMessage => "attempt.invalid-state.no-message",
        }
    }

    /// Builds a localisable [`Message`] describing the violation.
    #[must_use]
    pub fn message(self) -> Message {
        Message::keyed(self.message_key(), self.to_string(), [])
    }
}

/// Default error produced when a failed attempt is converted with
/// [`Attempt::to_try`](crate::Attempt::to_try).
///
/// The display text is the failure message rendered without a catalogue. The
/// upstream failure, if any, is exposed through
/// [`std::error::Error::source`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AttemptError {
    message: String,
    reason: String,
    message_key: String,
    #[source]
    cause: Option<Arc<dyn Cause>>,
}

impl AttemptError {
    pub(crate) const fn new(
        message: String,
        reason: String,
        message_key: String,
        cause: Option<Arc<dyn Cause>>,
    ) -> Self {
        Self {
            message,
            reason,
            message_key,
            cause,
        }
    }

    /// Rendered failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Debug rendering of the failure reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Catalogue identifier of the failure reason.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Upstream failure that triggered this one.
    #[must_use]
    pub fn cause(&self) -> Option<&dyn Cause> {
        self.cause.as_deref()
    }
}
