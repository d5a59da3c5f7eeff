//! The [`Attempt`] type, its construction, and its accessors.
//!
//! Combinators live in `combinators`, side-effecting hooks in `hooks`, and
//! conversions to and from `std::result::Result` in `interop`.

use crate::{FailureReason, Failure, InvalidStateError, Message, MessageReplacement};

mod combinators;
mod hooks;
mod interop;

/// The outcome of an operation that can fail for an expected reason.
///
/// `T` is the success value; `F` the failure reason. Both variants are
/// terminal: combinators build new attempts rather than changing the variant
/// of an existing one.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "an attempt may be a failure that should be handled"]
pub enum Attempt<T, F: FailureReason> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Failure(Failure<F>),
}

impl<T, F: FailureReason> Attempt<T, F> {
    /// Creates a successful attempt.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed attempt whose message comes from the reason's key and
    /// default template, with `replacements` substituted into it.
    ///
    /// ```rust
    /// use attempt::{Attempt, FailureReason, replace};
    ///
    /// #[derive(Debug, FailureReason)]
    /// enum Invalid {
    ///     #[failure_reason(template = "'{world}' is not a valid world")]
    ///     World,
    /// }
    ///
    /// let failed: Attempt<(), _> = Attempt::failure(Invalid::World, [replace("{world}").with("nether")]);
    /// assert_eq!(failed.failure_message().to_string(), "'nether' is not a valid world");
    /// ```
    pub fn failure(reason: F, replacements: impl IntoIterator<Item = MessageReplacement>) -> Self {
        let message = Message::of(&reason, reason.default_template(), replacements);
        Self::Failure(Failure::new(reason, message))
    }

    /// Creates a failed attempt with an explicit message, bypassing the
    /// reason's default template.
    pub fn failure_with_message(reason: F, message: impl Into<Message>) -> Self {
        Self::Failure(Failure::new(reason, message.into()))
    }

    /// Returns `true` for [`Attempt::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Attempt::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::NoValue`] when called on a failure.
    /// Use [`try_get`](Self::try_get) or [`get_or_none`](Self::get_or_none)
    /// when the variant is not known.
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => invalid_state(InvalidStateError::NoValue),
        }
    }

    /// Returns the value, or [`InvalidStateError::NoValue`] for a failure.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::NoValue`] when the attempt failed.
    pub fn try_get(self) -> Result<T, InvalidStateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(InvalidStateError::NoValue),
        }
    }

    /// Returns the value, or `None` for a failure.
    #[must_use]
    pub fn get_or_none(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the value, or `default` for a failure.
    #[must_use]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or computes one from the failure.
    #[must_use]
    pub fn get_or_else_with(self, fallback: impl FnOnce(&Failure<F>) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => fallback(&failure),
        }
    }

    /// Returns the value, or the error `error_for` builds from the failure.
    ///
    /// ```rust
    /// use attempt::{Attempt, FailureReason};
    ///
    /// #[derive(Debug, FailureReason)]
    /// enum Lookup { Missing }
    ///
    /// let failed: Attempt<u8, _> = Attempt::failure(Lookup::Missing, []);
    /// let err = failed
    ///     .get_or_throw(|failure| format!("lookup failed: {failure}"))
    ///     .unwrap_err();
    /// assert_eq!(err, "lookup failed: Failed!");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `error_for(failure)` when the attempt failed.
    pub fn get_or_throw<E>(self, error_for: impl FnOnce(Failure<F>) -> E) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(error_for(failure)),
        }
    }

    /// Borrows the value, or returns `None` for a failure.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure, or returns `None` for a success.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&Failure<F>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the failure reason.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::NoFailureReason`] when called on a
    /// success.
    #[track_caller]
    #[must_use]
    pub fn failure_reason(&self) -> &F {
        match self.try_failure_reason() {
            Ok(reason) => reason,
            Err(err) => invalid_state(err),
        }
    }

    /// Returns the failure reason, or
    /// [`InvalidStateError::NoFailureReason`] for a success.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::NoFailureReason`] when the attempt
    /// succeeded.
    pub const fn try_failure_reason(&self) -> Result<&F, InvalidStateError> {
        match self {
            Self::Success(_) => Err(InvalidStateError::NoFailureReason),
            Self::Failure(failure) => Ok(failure.reason()),
        }
    }

    /// Returns the failure message.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::NoFailureMessage`] when called on a
    /// success.
    #[track_caller]
    #[must_use]
    pub fn failure_message(&self) -> &Message {
        match self.try_failure_message() {
            Ok(message) => message,
            Err(err) => invalid_state(err),
        }
    }

    /// Returns the failure message, or
    /// [`InvalidStateError::NoFailureMessage`] for a success.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::NoFailureMessage`] when the attempt
    /// succeeded.
    pub const fn try_failure_message(&self) -> Result<&Message, InvalidStateError> {
        match self {
            Self::Success(_) => Err(InvalidStateError::NoFailureMessage),
            Self::Failure(failure) => Ok(failure.message()),
        }
    }
}

impl<T, F: FailureReason> From<Failure<F>> for Attempt<T, F> {
    fn from(failure: Failure<F>) -> Self {
        Self::Failure(failure)
    }
}

#[track_caller]
#[cold]
fn invalid_state(err: InvalidStateError) -> ! {
    panic!("{err}")
}
