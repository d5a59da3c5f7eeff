//! Test helpers shared across crates.
//!
//! This crate provides sample failure reasons with a matching Fluent
//! catalogue, a thread-safe call recorder for observing hooks, `anyhow`
//! adapters for unwrapping attempts in fallible tests, and text
//! normalisation for localised output.

pub mod outcomes;
pub mod reasons;
pub mod recorder;
pub mod text;

pub use outcomes::{expect_failure, expect_success};
pub use reasons::{SAMPLE_CATALOGUE, SampleReason, WrappedReason};
pub use recorder::CallRecorder;
