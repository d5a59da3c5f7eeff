//! Shared fixtures for the behavioural suite.

use attempt::Attempt;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::{CallRecorder, SampleReason, WrappedReason};

/// State shared between the steps of one scenario.
#[derive(Default, ScenarioState)]
pub struct AttemptState {
    /// Attempt built from sample reasons.
    pub outcome: Slot<Attempt<i32, SampleReason>>,
    /// Attempt after re-contextualising under wrapped reasons.
    pub wrapped: Slot<Attempt<i32, WrappedReason>>,
    /// Text produced by rendering through a localiser.
    pub rendered: Slot<String>,
    /// Hook invocations.
    pub calls: Slot<CallRecorder>,
}

/// Creates empty scenario state.
#[fixture]
pub fn attempt_state() -> AttemptState {
    AttemptState::default()
}
