//! Causal chains built by repeated `transform`.

use std::error::Error;
use std::thread;

use anyhow::{Result, ensure};
use attempt::{Attempt, Cause, Failure, FluentLocalizer, NoOpLocalizer, Replace, langid};
use rstest::{fixture, rstest};
use test_helpers::text::strip_isolates;
use test_helpers::{SAMPLE_CATALOGUE, SampleReason, WrappedReason, expect_failure};

#[fixture]
fn two_level_chain() -> Attempt<(), SampleReason> {
    Attempt::<(), SampleReason>::failure(SampleReason::InvalidWorld, [Replace::WORLD.with("nether")])
        .transform(WrappedReason::ActionFailed)
        .transform(SampleReason::ReasonB)
}

#[rstest]
fn chain_is_ordered_outer_to_inner(two_level_chain: Attempt<(), SampleReason>) -> Result<()> {
    let failure = expect_failure(two_level_chain)?;
    let keys: Vec<&str> = failure
        .causes()
        .map(|cause| cause.reason().message_key())
        .collect();
    ensure!(
        keys == ["wrapped.action-failed", "sample.invalid-world"],
        "unexpected chain {keys:?}"
    );
    Ok(())
}

#[rstest]
fn root_cause_recovers_the_original_failure(
    two_level_chain: Attempt<(), SampleReason>,
) -> Result<()> {
    let failure = expect_failure(two_level_chain)?;
    let root = failure
        .root_cause()
        .and_then(|cause| cause.downcast_ref::<Failure<SampleReason>>());
    ensure!(
        root.map(Failure::reason) == Some(&SampleReason::InvalidWorld),
        "root cause should be the invalid world failure"
    );
    Ok(())
}

#[rstest]
fn to_try_keeps_the_chain_as_error_sources(
    two_level_chain: Attempt<(), SampleReason>,
) -> Result<()> {
    let Err(err) = two_level_chain.to_try() else {
        anyhow::bail!("expected an error");
    };
    ensure!(err.to_string() == "World 'nether' is not valid");
    ensure!(err.message_key() == "sample.reason-b");

    let mut depth = 0_usize;
    let mut source = err.source();
    while let Some(current) = source {
        depth += 1;
        source = current.source();
    }
    ensure!(depth == 2, "expected two sources, found {depth}");
    Ok(())
}

#[rstest]
fn attempt_errors_compose_with_anyhow(two_level_chain: Attempt<(), SampleReason>) {
    let err = anyhow::Error::from(
        two_level_chain
            .to_try()
            .expect_err("chain should be a failure"),
    );
    let messages: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|message| message == "World 'nether' is not valid"));
}

#[rstest]
fn render_chain_uses_the_catalogue_for_every_line(
    two_level_chain: Attempt<(), SampleReason>,
) -> Result<()> {
    let localizer = FluentLocalizer::with_en_us_defaults([SAMPLE_CATALOGUE])?;
    let failure = expect_failure(two_level_chain)?;
    let rendered = strip_isolates(&failure.render_chain(&localizer));
    ensure!(
        rendered
            == "The world nether does not exist\n\
                Caused by: The world nether does not exist\n\
                Caused by: The world nether does not exist",
        "unexpected rendering {rendered:?}"
    );
    Ok(())
}

#[rstest]
fn render_chain_in_japanese_uses_the_embedded_cause_prefix() -> Result<()> {
    let localizer = FluentLocalizer::embedded(langid!("ja"))?;
    let failure = expect_failure(
        Attempt::<(), SampleReason>::failure(SampleReason::ReasonA, [])
            .transform(WrappedReason::ReasonB),
    )?;
    let rendered = strip_isolates(&failure.render_chain(&localizer));
    ensure!(rendered == "失敗しました!\n原因: 失敗しました!", "unexpected rendering {rendered:?}");
    Ok(())
}

#[rstest]
fn chains_are_shared_across_threads(two_level_chain: Attempt<(), SampleReason>) -> Result<()> {
    let failure = expect_failure(two_level_chain)?;
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let copy = failure.clone();
            thread::spawn(move || copy.render_chain(&NoOpLocalizer))
        })
        .collect();
    let expected = failure.render_chain(&NoOpLocalizer);
    for handle in handles {
        let rendered = handle
            .join()
            .map_err(|_| anyhow::anyhow!("render thread panicked"))?;
        ensure!(rendered == expected);
    }
    Ok(())
}

#[rstest]
fn cause_handles_expose_their_messages(two_level_chain: Attempt<(), SampleReason>) -> Result<()> {
    let failure = expect_failure(two_level_chain)?;
    let first: &dyn Cause = failure
        .caused_by()
        .ok_or_else(|| anyhow::anyhow!("expected a cause"))?;
    ensure!(first.message() == failure.message());
    ensure!(first.is::<Failure<WrappedReason>>());
    Ok(())
}
