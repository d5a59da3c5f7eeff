//! `rstest-bdd` behavioural suite for `attempt`.
//!
//! Fixtures hold per-scenario state, steps drive the public API, and
//! `scenarios` binds `tests/features/attempt.feature` to them.

mod fixtures;
mod scenarios;
mod steps;
