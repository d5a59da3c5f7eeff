//! Core crate for the `Attempt` result type.
//!
//! An [`Attempt`] is either a [`Success`](Attempt::Success) holding a value or
//! a [`Failure`] holding a typed [`FailureReason`], a localisable [`Message`],
//! and an optional link to the upstream failure that caused it. Operations
//! that can fail for an expected, user-facing reason return an `Attempt`
//! instead of an error so callers can compose further work with combinators
//! and decide late how to present the outcome.
//!
//! ```rust
//! use attempt::{Attempt, FailureReason, replace};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, FailureReason)]
//! #[failure_reason(prefix = "world")]
//! enum WorldFailure {
//!     #[failure_reason(template = "World '{world}' does not exist")]
//!     Missing,
//! }
//!
//! fn find_world(name: &str) -> Attempt<u32, WorldFailure> {
//!     if name == "overworld" {
//!         Attempt::success(0)
//!     } else {
//!         Attempt::failure(WorldFailure::Missing, [replace("{world}").with(name)])
//!     }
//! }
//!
//! assert_eq!(find_world("overworld").map(|id| id + 1).get(), 1);
//! let missing = find_world("nether");
//! assert_eq!(
//!     missing.failure_message().to_string(),
//!     "World 'nether' does not exist"
//! );
//! ```

extern crate self as attempt;

pub use attempt_macros::FailureReason;
pub use fluent_bundle::FluentValue;
pub use unic_langid::{LanguageIdentifier, langid};

mod error;
mod failure;
pub mod localizer;
mod message;
mod outcome;
mod reason;
mod result_ext;

pub use outcome::Attempt;
pub use error::{AttemptError, InvalidStateError};
pub use failure::{Cause, Causes, Failure};
pub use localizer::{
    FluentBundleSource, FluentLocalizer, FluentLocalizerBuilder, FluentLocalizerError,
    FormattingIssue, FormattingIssueReporter, LocalizationArgs, Localizer, NoOpLocalizer,
};
pub use message::{
    DEFAULT_FAILURE_KEY, Message, MessageReplacement, Replace, ReplacementValue, Replacer,
    replace,
};
pub use reason::{DEFAULT_FAILURE_TEMPLATE, FailureReason};
pub use result_ext::{AttemptOptionExt, AttemptResultExt};
