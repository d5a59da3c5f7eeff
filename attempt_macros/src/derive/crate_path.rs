//! Path used to name `attempt` items in generated code.

use syn::{Path, parse_quote};

/// `::attempt` unless the container renamed the crate with
/// `#[failure_reason(crate = "...")]`.
///
/// The library declares `extern crate self as attempt`, so the default
/// also works for derives inside `attempt` itself.
pub(crate) fn resolve(renamed: Option<&Path>) -> Path {
    renamed.cloned().unwrap_or_else(|| parse_quote!(::attempt))
}
