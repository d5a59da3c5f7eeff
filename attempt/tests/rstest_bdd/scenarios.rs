//! Binds the feature file to the step registry.

use crate::fixtures::{AttemptState, attempt_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/attempt.feature",
    fixtures = [attempt_state: AttemptState]
);
