//! The capability implemented by every failure reason.

use std::borrow::Cow;
use std::fmt;

/// Template used when a reason does not supply its own default text.
pub const DEFAULT_FAILURE_TEMPLATE: &str = "Failed!";

/// Marks a type as an expected, user-facing failure mode.
///
/// Reasons are usually fieldless enums. Each variant names a catalogue entry
/// through [`message_key`](Self::message_key) and supplies the text shown when
/// no localiser provides a translation. Templates may reference named
/// placeholders such as `{world}`; [`Message`](crate::Message) substitutes
/// them from the replacements given at construction time.
///
/// Most implementations come from `#[derive(FailureReason)]`:
///
/// ```rust
/// use attempt::FailureReason;
///
/// #[derive(Debug, FailureReason)]
/// enum LoadFailure {
///     #[failure_reason(key = "load.missing", template = "No file at {path}")]
///     Missing,
///     Corrupt,
/// }
///
/// assert_eq!(LoadFailure::Missing.message_key(), "load.missing");
/// assert_eq!(LoadFailure::Corrupt.message_key(), "corrupt");
/// assert_eq!(LoadFailure::Corrupt.default_template(), "Failed!");
/// ```
pub trait FailureReason: fmt::Debug + Send + Sync + 'static {
    /// Identifier looked up in the message catalogue.
    fn message_key(&self) -> &str;

    /// Text rendered when the catalogue has no entry for
    /// [`message_key`](Self::message_key).
    fn default_template(&self) -> Cow<'static, str> {
        Cow::Borrowed(DEFAULT_FAILURE_TEMPLATE)
    }
}
