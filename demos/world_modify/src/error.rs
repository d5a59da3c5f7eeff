//! Errors that stop the demo before a report can be produced.
//!
//! Refused modifications are not errors: they travel as failed attempts and
//! end up in the report. Only broken catalogues and unwritable output land
//! here.

use attempt::FluentLocalizerError;
use thiserror::Error;

/// Errors raised by the demo binary.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A shipped catalogue failed to load.
    #[error("failed to load message catalogue: {0}")]
    Catalogue(#[from] FluentLocalizerError),
    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience alias for demo results.
pub type Result<T> = std::result::Result<T, DemoError>;
