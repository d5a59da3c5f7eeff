//! Message catalogues used to render failures.
//!
//! A [`Message`](crate::Message) never decides its own wording. At render time
//! it asks a [`Localizer`] for the text behind its key and falls back to its
//! template on a miss. Tests usually plug in a map or [`NoOpLocalizer`];
//! applications use [`FluentLocalizer`].

use std::collections::HashMap;

use fluent_bundle::FluentValue;

mod catalogue;
mod fluent;

pub use fluent::{
    FluentBundleSource, FluentLocalizer, FluentLocalizerBuilder, FluentLocalizerError,
    FormattingIssue, FormattingIssueReporter,
};

/// Named arguments for a lookup, keyed by placeholder name without braces.
pub type LocalizationArgs<'value> = HashMap<&'value str, FluentValue<'value>>;

/// Resolves catalogue identifiers to display text.
///
/// Object safe: renderers take `&dyn Localizer`, and shared localisers can
/// live behind `Arc<dyn Localizer>`.
pub trait Localizer: Send + Sync {
    /// Text for `id` with `args` applied, or `None` when the catalogue has no
    /// usable entry.
    fn lookup(&self, id: &str, args: Option<&LocalizationArgs<'_>>) -> Option<String>;

    /// Like [`lookup`](Self::lookup), returning `fallback` on a miss.
    ///
    /// ```rust
    /// use attempt::{LocalizationArgs, Localizer};
    ///
    /// struct Silent;
    ///
    /// impl Localizer for Silent {
    ///     fn lookup(&self, _id: &str, _args: Option<&LocalizationArgs<'_>>) -> Option<String> {
    ///         None
    ///     }
    /// }
    ///
    /// assert_eq!(Silent.message("world.missing", None, "no such world"), "no such world");
    /// ```
    fn message(&self, id: &str, args: Option<&LocalizationArgs<'_>>, fallback: &str) -> String {
        self.lookup(id, args).unwrap_or_else(|| fallback.to_owned())
    }
}

/// Never translates, so every message renders its template.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLocalizer;

impl NoOpLocalizer {
    /// Creates the localiser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Localizer for NoOpLocalizer {
    fn lookup(&self, _id: &str, _args: Option<&LocalizationArgs<'_>>) -> Option<String> {
        None
    }
}
