//! Step definitions driving `Attempt` through its public API.

use crate::fixtures::AttemptState;
use anyhow::{Result, anyhow, ensure};
use attempt::{Attempt, FluentLocalizer, Replace};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{normalize_scalar, strip_isolates};
use test_helpers::{CallRecorder, SAMPLE_CATALOGUE, SampleReason, WrappedReason};

fn take_outcome(state: &AttemptState) -> Result<Attempt<i32, SampleReason>> {
    state
        .outcome
        .take()
        .ok_or_else(|| anyhow!("an attempt must have been created"))
}

fn current_message(state: &AttemptState) -> Result<String> {
    state
        .outcome
        .with_ref(|attempt| attempt.try_failure_message().map(ToString::to_string))
        .ok_or_else(|| anyhow!("an attempt must have been created"))?
        .map_err(|err| anyhow!("expected a failure: {err}"))
}

#[given("a failure for an invalid world named {world}")]
fn invalid_world(attempt_state: &AttemptState, world: String) {
    let world = normalize_scalar(&world);
    attempt_state.outcome.set(Attempt::failure(
        SampleReason::InvalidWorld,
        [Replace::WORLD.with(world)],
    ));
}

#[given("a failure for reason A")]
fn reason_a(attempt_state: &AttemptState) {
    attempt_state
        .outcome
        .set(Attempt::failure(SampleReason::ReasonA, []));
}

#[given("a success holding {value:i32}")]
fn success_holding(attempt_state: &AttemptState, value: i32) {
    attempt_state.outcome.set(Attempt::success(value));
}

#[when("the value is doubled")]
fn double(attempt_state: &AttemptState) -> Result<()> {
    let attempt = take_outcome(attempt_state)?;
    attempt_state.outcome.set(attempt.map(|value| value * 2));
    Ok(())
}

#[when("the value is required to exceed {minimum:i32}")]
fn require_minimum(attempt_state: &AttemptState, minimum: i32) -> Result<()> {
    let attempt = take_outcome(attempt_state)?;
    attempt_state.outcome.set(attempt.map_attempt(|value| {
        if value > minimum {
            Attempt::success(value)
        } else {
            Attempt::failure(SampleReason::TooSmall, [Replace::VALUE.with(value)])
        }
    }));
    Ok(())
}

#[when("the failure is transformed to wrapped reason B")]
fn transform_to_b(attempt_state: &AttemptState) -> Result<()> {
    let attempt = take_outcome(attempt_state)?;
    attempt_state
        .wrapped
        .set(attempt.transform(WrappedReason::ReasonB));
    Ok(())
}

#[when("the failure is rendered with the sample catalogue")]
fn render_with_catalogue(attempt_state: &AttemptState) -> Result<()> {
    let localizer = FluentLocalizer::with_en_us_defaults([SAMPLE_CATALOGUE])?;
    let rendered = attempt_state
        .outcome
        .with_ref(|attempt| attempt.as_failure().map(|failure| failure.render(&localizer)))
        .flatten()
        .ok_or_else(|| anyhow!("expected a failed attempt"))?;
    attempt_state.rendered.set(strip_isolates(&rendered));
    Ok(())
}

#[when("success and failure hooks are attached")]
fn attach_hooks(attempt_state: &AttemptState) -> Result<()> {
    let recorder = CallRecorder::new();
    let attempt = take_outcome(attempt_state)?
        .on_success(|_| recorder.record("on_success"))
        .on_success_run(recorder.hook("on_success_run"))
        .peek(|_| recorder.record("peek"))
        .on_failure(|_| recorder.record("on_failure"))
        .on_failure_run(recorder.hook("on_failure_run"))
        .on_failure_reason(|_| recorder.record("on_failure_reason"))
        .then_run(recorder.hook("then_run"));
    attempt_state.outcome.set(attempt);
    attempt_state.calls.set(recorder);
    Ok(())
}

#[then("the failure message is {expected}")]
fn failure_message_is(attempt_state: &AttemptState, expected: String) -> Result<()> {
    let actual = current_message(attempt_state)?;
    let expected = normalize_scalar(&expected);
    ensure!(actual == expected, "message {actual:?}; expected {expected:?}");
    Ok(())
}

#[then("the failure message does not mention {placeholder}")]
fn failure_message_lacks(attempt_state: &AttemptState, placeholder: String) -> Result<()> {
    let actual = current_message(attempt_state)?;
    let placeholder = normalize_scalar(&placeholder);
    ensure!(
        !actual.contains(&placeholder),
        "message {actual:?} still contains {placeholder:?}"
    );
    Ok(())
}

#[then("the outcome is a success holding {expected:i32}")]
fn success_with(attempt_state: &AttemptState, expected: i32) -> Result<()> {
    let value = take_outcome(attempt_state)?
        .try_get()
        .map_err(|err| anyhow!("expected a success: {err}"))?;
    ensure!(value == expected, "value {value}; expected {expected}");
    Ok(())
}

#[then("the outcome is a failure because the value is too small")]
fn failure_too_small(attempt_state: &AttemptState) -> Result<()> {
    let attempt = take_outcome(attempt_state)?;
    ensure!(attempt.is_failure(), "expected a failure");
    let reason = attempt.try_failure_reason()?;
    ensure!(
        *reason == SampleReason::TooSmall,
        "reason {reason:?}; expected TooSmall"
    );
    ensure!(attempt.failure_message().to_string() == "Value 2 is too small");
    Ok(())
}

#[then("the wrapped failure reason is reason B")]
fn wrapped_reason_is_b(attempt_state: &AttemptState) -> Result<()> {
    let reason = attempt_state
        .wrapped
        .with_ref(|attempt| attempt.try_failure_reason().copied())
        .ok_or_else(|| anyhow!("the failure must have been transformed"))??;
    ensure!(reason == WrappedReason::ReasonB, "reason {reason:?}");
    Ok(())
}

#[then("the wrapped failure was caused by reason A")]
fn wrapped_caused_by_a(attempt_state: &AttemptState) -> Result<()> {
    let cause = attempt_state
        .wrapped
        .with_ref(|attempt| {
            attempt
                .as_failure()
                .and_then(|failure| failure.cause_as::<SampleReason>())
                .map(|cause| *cause.reason())
        })
        .flatten()
        .ok_or_else(|| anyhow!("the wrapped failure must have a sample cause"))?;
    ensure!(cause == SampleReason::ReasonA, "cause {cause:?}");
    Ok(())
}

#[then("the rendered text is {expected}")]
fn rendered_text_is(attempt_state: &AttemptState, expected: String) -> Result<()> {
    let rendered = attempt_state
        .rendered
        .take()
        .ok_or_else(|| anyhow!("a rendering must have been produced"))?;
    let expected = normalize_scalar(&expected);
    ensure!(rendered == expected, "rendered {rendered:?}; expected {expected:?}");
    Ok(())
}

#[then("only the failure hooks ran")]
fn only_failure_hooks(attempt_state: &AttemptState) -> Result<()> {
    let calls = attempt_state
        .calls
        .with_ref(CallRecorder::calls)
        .ok_or_else(|| anyhow!("hooks must have been attached"))?;
    ensure!(
        calls == ["on_failure", "on_failure_run", "on_failure_reason", "then_run"],
        "unexpected hook calls {calls:?}"
    );
    Ok(())
}
