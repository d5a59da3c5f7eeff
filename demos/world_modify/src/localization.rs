//! Locale selection and the demo's Fluent catalogues.
//!
//! The catalogues live under `locales/` and are embedded at compile time.
//! They are layered over the `attempt` crate's own messages, so keys the demo
//! does not translate still resolve through the library defaults.

use attempt::{FluentLocalizer, FluentLocalizerError, LanguageIdentifier};
use unic_langid::langid;

const EN_US_CATALOGUE: &str = include_str!("../locales/en-US/world_modify.ftl");
const JA_CATALOGUE: &str = include_str!("../locales/ja/world_modify.ftl");

/// Locales the demo ships translations for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoLocale {
    /// American English.
    #[default]
    #[value(name = "en-US")]
    EnUs,
    /// Japanese.
    #[value(name = "ja")]
    Ja,
}

impl DemoLocale {
    /// Language identifier handed to Fluent.
    #[must_use]
    pub fn identifier(self) -> LanguageIdentifier {
        match self {
            Self::EnUs => langid!("en-US"),
            Self::Ja => langid!("ja"),
        }
    }

    /// Fluent source for the demo's own messages.
    #[must_use]
    pub const fn catalogue(self) -> &'static str {
        match self {
            Self::EnUs => EN_US_CATALOGUE,
            Self::Ja => JA_CATALOGUE,
        }
    }
}

/// Builds the localiser for `locale`.
///
/// # Errors
///
/// Returns [`FluentLocalizerError`] when an embedded catalogue fails to parse
/// or register.
pub fn localizer_for(locale: DemoLocale) -> Result<FluentLocalizer, FluentLocalizerError> {
    FluentLocalizer::builder(locale.identifier())
        .with_consumer_resources([locale.catalogue()])
        .try_build()
}
