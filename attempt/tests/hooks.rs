//! Side-effecting hooks run exactly once, and only for their variant.

use attempt::Attempt;
use rstest::{fixture, rstest};
use test_helpers::{CallRecorder, SampleReason};

#[fixture]
fn recorder() -> CallRecorder {
    CallRecorder::new()
}

fn attach_all(attempt: Attempt<u8, SampleReason>, recorder: &CallRecorder) -> Attempt<u8, SampleReason> {
    attempt
        .then_run(recorder.hook("then_run"))
        .then_accept(|outcome| {
            recorder.record(if outcome.is_ok() { "accept_ok" } else { "accept_err" });
        })
        .peek(|_| recorder.record("peek"))
        .on_success(|_| recorder.record("on_success"))
        .on_success_run(recorder.hook("on_success_run"))
        .on_failure(|_| recorder.record("on_failure"))
        .on_failure_run(recorder.hook("on_failure_run"))
        .on_failure_reason(|_| recorder.record("on_failure_reason"))
}

#[rstest]
#[case::success(
    Attempt::success(7),
    &["then_run", "accept_ok", "peek", "on_success", "on_success_run"]
)]
#[case::failure(
    Attempt::failure(SampleReason::ReasonA, []),
    &["then_run", "accept_err", "on_failure", "on_failure_run", "on_failure_reason"]
)]
fn hooks_follow_their_guards(
    recorder: CallRecorder,
    #[case] attempt: Attempt<u8, SampleReason>,
    #[case] expected: &[&str],
) {
    let original = attempt.clone();
    let returned = attach_all(attempt, &recorder);
    assert_eq!(recorder.calls(), expected);
    assert_eq!(returned, original);
}

#[rstest]
fn hooks_see_the_payload(recorder: CallRecorder) {
    let success = Attempt::<u8, SampleReason>::success(9)
        .peek(|value| recorder.record(format!("peek {value}")))
        .then_accept(|outcome| recorder.record(format!("accept {outcome:?}")));
    let failure = Attempt::<u8, SampleReason>::failure(SampleReason::TooSmall, [])
        .on_failure_reason(|reason| recorder.record(format!("reason {reason:?}")))
        .on_failure(|failure| recorder.record(format!("failure {failure}")));
    assert!(success.is_success() && failure.is_failure());
    assert_eq!(
        recorder.calls(),
        [
            "peek 9",
            "accept Ok(9)",
            "reason TooSmall",
            "failure Value {value} is too small",
        ]
    );
}

#[rstest]
fn repeated_hooks_each_run_once(recorder: CallRecorder) {
    let attempt = Attempt::<u8, SampleReason>::success(1)
        .on_success_run(recorder.hook("tick"))
        .on_success_run(recorder.hook("tick"))
        .on_failure_run(recorder.hook("never"));
    assert_eq!(attempt.get(), 1);
    assert_eq!(recorder.count("tick"), 2);
    assert_eq!(recorder.count("never"), 0);
}
