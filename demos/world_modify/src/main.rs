//! Demo entry-point: parse arguments, modify the world, print the report.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use world_modify::cli::WorldModifyCli;
use world_modify::world::WorldRegistry;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = WorldModifyCli::parse();
    let mut registry = WorldRegistry::demo();
    let report = world_modify::run(
        &cli,
        &mut registry,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(report.exit_code())
}
