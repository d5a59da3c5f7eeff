//! Algebraic properties of the `Attempt` combinators.
//!
//! These mirror the functor and monad laws: mapping with identity changes
//! nothing, mapping composes, and `map_attempt` behaves as bind.

use attempt::{Attempt, Replace};
use rstest::rstest;
use test_helpers::{SampleReason, WrappedReason};

type Outcome = Attempt<i32, SampleReason>;

fn at_least_four(value: i32) -> Outcome {
    if value > 3 {
        Attempt::success(value)
    } else {
        Attempt::failure(SampleReason::TooSmall, [Replace::VALUE.with(value)])
    }
}

fn below_eight(value: i32) -> Outcome {
    if value < 8 {
        Attempt::success(value + 10)
    } else {
        Attempt::failure(SampleReason::ReasonB, [])
    }
}

fn outcomes() -> Vec<Outcome> {
    vec![
        Attempt::success(8),
        Attempt::success(5),
        Attempt::success(2),
        Attempt::failure(SampleReason::ReasonA, []),
        Attempt::failure(SampleReason::InvalidWorld, [Replace::WORLD.with("end")]),
    ]
}

#[rstest]
fn map_identity_is_a_no_op() {
    for attempt in outcomes() {
        assert_eq!(attempt.clone().map(|value| value), attempt);
    }
}

#[rstest]
fn map_composes() {
    let f = |value: i32| value + 1;
    let g = |value: i32| value * 3;
    for attempt in outcomes() {
        assert_eq!(attempt.clone().map(f).map(g), attempt.map(|value| g(f(value))));
    }
}

#[rstest]
#[case(8)]
#[case(5)]
#[case(2)]
fn success_is_a_left_identity_for_map_attempt(#[case] value: i32) {
    assert_eq!(
        Attempt::<i32, SampleReason>::success(value).map_attempt(at_least_four),
        at_least_four(value)
    );
}

#[rstest]
fn success_is_a_right_identity_for_map_attempt() {
    for attempt in outcomes() {
        assert_eq!(attempt.clone().map_attempt(Attempt::success), attempt);
    }
}

#[rstest]
fn map_attempt_is_associative() {
    for attempt in outcomes() {
        let nested = attempt
            .clone()
            .map_attempt(|value| at_least_four(value).map_attempt(below_eight));
        let chained = attempt.map_attempt(at_least_four).map_attempt(below_eight);
        assert_eq!(nested, chained);
    }
}

#[rstest]
fn failures_are_absorbing() {
    let failed: Outcome = Attempt::failure(SampleReason::ReasonA, []);
    let after = failed
        .clone()
        .map(|value| value + 1)
        .map_attempt(at_least_four)
        .map_with(|| 0)
        .map_attempt_with(|| Attempt::success(1));
    assert_eq!(after.failure_reason(), failed.failure_reason());
    assert_eq!(after.failure_message(), failed.failure_message());
}

#[rstest]
fn transform_preserves_successes_and_reasons_change_on_failures() {
    for attempt in outcomes() {
        let transformed: Attempt<i32, WrappedReason> =
            attempt.clone().transform(WrappedReason::ReasonB);
        match (&attempt, &transformed) {
            (Attempt::Success(before), Attempt::Success(after)) => assert_eq!(before, after),
            (Attempt::Failure(before), Attempt::Failure(after)) => {
                assert_eq!(after.reason(), &WrappedReason::ReasonB);
                assert_eq!(after.message(), before.message());
                assert_eq!(after.cause_as::<SampleReason>(), Some(before));
            }
            _ => panic!("transform changed the variant of {attempt:?}"),
        }
    }
}

#[rstest]
fn fold_and_transform_into_agree_on_reasons() {
    for attempt in outcomes() {
        let via_fold = attempt
            .clone()
            .fold(|failure| Err(*failure.reason()), Ok);
        let via_transform = attempt.transform_into(Ok, Err);
        assert_eq!(via_fold, via_transform);
    }
}
