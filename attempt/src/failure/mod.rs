//! The failed variant of an attempt and its causal chain.
//!
//! A [`Failure`] owns its reason and message. When a failure is
//! re-contextualised with [`Attempt::transform`](crate::Attempt::transform),
//! the new failure keeps a shared, read-only handle to the old one. Reason
//! types differ along a chain, so the handle is type-erased behind [`Cause`]
//! and recovered with [`downcast_ref`](trait.Cause.html#method.downcast_ref).

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::{FailureReason, LocalizationArgs, Localizer, Message};

mod chain;

pub use chain::Causes;

/// Type-erased view of an upstream [`Failure`].
pub trait Cause: Error + Send + Sync + 'static {
    /// Reason the upstream failure carried.
    fn reason(&self) -> &dyn FailureReason;

    /// Message the upstream failure carried.
    fn message(&self) -> &Message;

    /// Failure that triggered this one, if any.
    fn caused_by(&self) -> Option<&dyn Cause>;

    /// Exposes the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Cause + '_ {
    /// Returns the concrete failure when it has type `C`.
    ///
    /// ```rust
    /// use attempt::{Attempt, Failure, FailureReason};
    ///
    /// #[derive(Debug, PartialEq, FailureReason)]
    /// enum Low { Io }
    /// #[derive(Debug, FailureReason)]
    /// enum High { Load }
    ///
    /// let outer: Attempt<(), High> = Attempt::<(), Low>::failure(Low::Io, []).transform(High::Load);
    /// let cause = outer.as_failure().and_then(Failure::caused_by).expect("chained");
    /// let inner = cause.downcast_ref::<Failure<Low>>().expect("low-level failure");
    /// assert_eq!(inner.reason(), &Low::Io);
    /// ```
    #[must_use]
    pub fn downcast_ref<C: Cause>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }

    /// Returns `true` when the concrete failure has type `C`.
    #[must_use]
    pub fn is<C: Cause>(&self) -> bool {
        self.as_any().is::<C>()
    }

    /// Renders this failure as a cause line.
    ///
    /// The line is looked up as `attempt.caused-by` with a `message`
    /// argument, falling back to `Caused by: {message}`.
    #[must_use]
    pub fn render_as_cause(&self, localizer: &dyn Localizer) -> String {
        let rendered = self.message().render(localizer);
        let mut args = LocalizationArgs::new();
        args.insert("message", rendered.as_str().into());
        let fallback = format!("Caused by: {rendered}");
        localizer.message(CAUSED_BY_KEY, Some(&args), &fallback)
    }
}

const CAUSED_BY_KEY: &str = "attempt.caused-by";

/// A failed attempt: a typed reason, its message, and an optional cause.
#[derive(Clone)]
pub struct Failure<F> {
    reason: F,
    message: Message,
    caused_by: Option<Arc<dyn Cause>>,
}

impl<F: FailureReason> Failure<F> {
    /// Creates a failure with no upstream cause.
    #[must_use]
    pub const fn new(reason: F, message: Message) -> Self {
        Self {
            reason,
            message,
            caused_by: None,
        }
    }

    pub(crate) const fn caused(reason: F, message: Message, cause: Arc<dyn Cause>) -> Self {
        Self {
            reason,
            message,
            caused_by: Some(cause),
        }
    }

    /// Reason this failure carries.
    #[must_use]
    pub const fn reason(&self) -> &F {
        &self.reason
    }

    /// Message resolved when the failure was created.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Failure that triggered this one, if any.
    #[must_use]
    pub fn caused_by(&self) -> Option<&dyn Cause> {
        self.caused_by.as_deref()
    }

    /// Upstream failure of reason type `G`, when the immediate cause has it.
    #[must_use]
    pub fn cause_as<G: FailureReason>(&self) -> Option<&Failure<G>> {
        self.caused_by()?.downcast_ref::<Failure<G>>()
    }

    /// Walks the causal chain from the immediate cause outwards to the root.
    #[must_use]
    pub fn causes(&self) -> Causes<'_> {
        Causes::new(self.caused_by())
    }

    /// Deepest failure in the chain, or `None` when nothing caused this one.
    #[must_use]
    pub fn root_cause(&self) -> Option<&dyn Cause> {
        self.causes().last()
    }

    /// Renders the message through `localizer`.
    #[must_use]
    pub fn render(&self, localizer: &dyn Localizer) -> String {
        self.message.render(localizer)
    }

    /// Renders the message followed by one line per upstream failure.
    ///
    /// Each cause line is rendered by `render_as_cause`.
    #[must_use]
    pub fn render_chain(&self, localizer: &dyn Localizer) -> String {
        self.causes()
            .map(|cause| cause.render_as_cause(localizer))
            .fold(self.render(localizer), |text, line| format!("{text}\n{line}"))
    }

    /// Consumes the failure, returning its reason.
    #[must_use]
    pub fn into_reason(self) -> F {
        self.reason
    }

    /// Consumes the failure, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (F, Message, Option<Arc<dyn Cause>>) {
        (self.reason, self.message, self.caused_by)
    }

    pub(crate) fn shared_cause(&self) -> Option<Arc<dyn Cause>> {
        self.caused_by.clone()
    }
}

impl<F: fmt::Debug> fmt::Debug for Failure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Failure");
        out.field("reason", &self.reason);
        if let Some(cause) = &self.caused_by {
            out.field("caused_by", cause);
        }
        out.finish_non_exhaustive()
    }
}

impl<F> fmt::Display for Failure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.message, f)
    }
}

impl<F: FailureReason> Error for Failure<F> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.caused_by
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl<F: FailureReason> Cause for Failure<F> {
    fn reason(&self) -> &dyn FailureReason {
        &self.reason
    }

    fn message(&self) -> &Message {
        &self.message
    }

    fn caused_by(&self) -> Option<&dyn Cause> {
        self.caused_by.as_deref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Two failures are equal when their reasons and messages match and they
/// share the same cause instance.
impl<F: PartialEq> PartialEq for Failure<F> {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.caused_by, &other.caused_by) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                Arc::as_ptr(lhs).cast::<()>() == Arc::as_ptr(rhs).cast::<()>()
            }
            _ => false,
        };
        self.reason == other.reason && self.message == other.message && same_cause
    }
}
