//! Failure reasons used by tests across the workspace.

use attempt::FailureReason;

/// Low-level reasons, mostly produced directly by operations under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FailureReason)]
#[failure_reason(prefix = "sample")]
pub enum SampleReason {
    /// A world name did not resolve.
    #[failure_reason(template = "World '{world}' is not valid")]
    InvalidWorld,
    /// A numeric input fell below its lower bound.
    #[failure_reason(template = "Value {value} is too small")]
    TooSmall,
    /// Generic reason with the default template.
    ReasonA,
    /// Second generic reason with the default template.
    ReasonB,
}

/// Higher-level reasons used as `transform` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FailureReason)]
#[failure_reason(prefix = "wrapped")]
pub enum WrappedReason {
    /// An action could not be completed.
    #[failure_reason(template = "Could not {action}")]
    ActionFailed,
    /// Generic reason with the default template.
    ReasonB,
}

/// en-US translations for [`SampleReason`] and [`WrappedReason`].
pub const SAMPLE_CATALOGUE: &str = "\
sample.invalid-world = The world { $world } does not exist
sample.too-small = { $value } is below the minimum
sample.reason-a = Reason A happened
sample.reason-b = Reason B happened
wrapped.action-failed = Unable to { $action }
wrapped.reason-b = Wrapped reason B happened
";
