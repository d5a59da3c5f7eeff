//! Error types raised outside the typed failure channel.

mod conversions;
mod types;

pub use types::{AttemptError, InvalidStateError};
