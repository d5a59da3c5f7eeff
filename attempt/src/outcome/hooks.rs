//! Side-effecting hooks that return the attempt unchanged.
//!
//! Every hook runs its callback at most once and hands the attempt back, so
//! call sites read as a single chain:
//!
//! ```rust
//! use attempt::{Attempt, FailureReason};
//!
//! #[derive(Debug, FailureReason)]
//! enum Save { ReadOnly }
//!
//! let mut log = Vec::new();
//! let saved: Attempt<&str, Save> = Attempt::success("world.yml");
//! let _ = saved
//!     .on_success(|path| log.push(format!("saved {path}")))
//!     .on_failure(|failure| log.push(format!("failed: {failure}")));
//! assert_eq!(log, ["saved world.yml"]);
//! ```

use crate::{FailureReason, Failure};

use super::Attempt;

impl<T, F: FailureReason> Attempt<T, F> {
    /// Runs `action` regardless of the variant.
    pub fn then_run(self, action: impl FnOnce()) -> Self {
        action();
        self
    }

    /// Runs `consumer` with either the value (`Ok`) or the reason (`Err`).
    pub fn then_accept(self, consumer: impl FnOnce(Result<&T, &F>)) -> Self {
        match &self {
            Self::Success(value) => consumer(Ok(value)),
            Self::Failure(failure) => consumer(Err(failure.reason())),
        }
        self
    }

    /// Inspects the value of a success.
    pub fn peek(self, consumer: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Runs `consumer` with the value of a success.
    pub fn on_success(self, consumer: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Runs `action` when the attempt succeeded.
    pub fn on_success_run(self, action: impl FnOnce()) -> Self {
        if self.is_success() {
            action();
        }
        self
    }

    /// Runs `consumer` with the whole failure.
    pub fn on_failure(self, consumer: impl FnOnce(&Failure<F>)) -> Self {
        if let Self::Failure(failure) = &self {
            consumer(failure);
        }
        self
    }

    /// Runs `action` when the attempt failed.
    pub fn on_failure_run(self, action: impl FnOnce()) -> Self {
        if self.is_failure() {
            action();
        }
        self
    }

    /// Runs `consumer` with the failure reason.
    pub fn on_failure_reason(self, consumer: impl FnOnce(&F)) -> Self {
        if let Self::Failure(failure) = &self {
            consumer(failure.reason());
        }
        self
    }
}
