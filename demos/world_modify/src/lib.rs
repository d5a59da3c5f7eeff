//! Library facade for the `world_modify` demo so tests can drive the command
//! without spawning the binary.

pub mod cli;
pub mod error;
pub mod localization;
pub mod modify;
pub mod report;
pub mod world;

use std::io::Write;

use crate::cli::WorldModifyCli;
use crate::error::Result;
use crate::localization::localizer_for;
use crate::modify::modify;
use crate::report::Report;
use crate::world::WorldRegistry;

/// Runs one invocation against `registry` and writes the report.
///
/// # Errors
///
/// Returns [`error::DemoError`] when the catalogue for the requested locale
/// fails to load or the report cannot be written.
pub fn run(
    cli: &WorldModifyCli,
    registry: &mut WorldRegistry,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<Report> {
    let localizer = localizer_for(cli.locale)?;
    let request = cli.request();
    let outcome = modify(registry, &request);
    let report = Report::from_outcome(outcome, &request, &localizer, cli.explain);
    report.write_to(stdout, stderr)?;
    Ok(report)
}
