//! [`Localizer`] backed by Project Fluent catalogues.
//!
//! An application catalogue, when supplied, is consulted before the messages
//! embedded in this crate. A lookup moves on to the next catalogue when an
//! entry is missing or fails to format; formatting failures are handed to a
//! reporter first.

use std::fmt;
use std::sync::Arc;

use fluent_bundle::{FluentArgs, FluentError};
use fluent_syntax::parser::ParserError;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use super::catalogue::{Catalogue, dashed, embedded_source};
use super::{LocalizationArgs, Localizer};

/// Which catalogue a bundle was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluentBundleSource {
    /// Resources supplied by the application.
    Consumer,
    /// Resources embedded in this crate.
    Default,
}

impl fmt::Display for FluentBundleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Consumer => "application",
            Self::Default => "embedded",
        })
    }
}

/// A message that existed but could not be formatted.
#[derive(Debug)]
#[non_exhaustive]
pub struct FormattingIssue {
    /// Identifier as requested by the caller.
    pub id: String,
    /// Locale of the catalogue that failed.
    pub locale: LanguageIdentifier,
    /// Catalogue that failed.
    pub catalogue: FluentBundleSource,
    /// Errors raised by Fluent.
    pub errors: Vec<FluentError>,
}

/// Callback invoked for every [`FormattingIssue`].
pub type FormattingIssueReporter = Arc<dyn Fn(&FormattingIssue) + Send + Sync>;

fn log_issue(issue: &FormattingIssue) {
    tracing::warn!(
        id = %issue.id,
        locale = %issue.locale,
        catalogue = %issue.catalogue,
        errors = ?issue.errors,
        "message could not be formatted; trying the next catalogue"
    );
}

fn default_reporter() -> FormattingIssueReporter {
    Arc::new(log_issue)
}

/// Failure to assemble a [`FluentLocalizer`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FluentLocalizerError {
    /// No embedded catalogue exists for the locale.
    #[error("no embedded messages for locale {locale}")]
    UnsupportedLocale {
        /// Requested locale.
        locale: LanguageIdentifier,
    },
    /// A resource is not valid Fluent syntax.
    #[error("{catalogue} catalogue for {locale} does not parse: {errors:?}")]
    Parser {
        /// Locale being built.
        locale: LanguageIdentifier,
        /// Catalogue holding the resource.
        catalogue: FluentBundleSource,
        /// Syntax errors.
        errors: Vec<ParserError>,
    },
    /// A resource clashes with one already added, usually a duplicate id.
    #[error("{catalogue} catalogue for {locale} could not be registered: {errors:?}")]
    Registration {
        /// Locale being built.
        locale: LanguageIdentifier,
        /// Catalogue holding the resource.
        catalogue: FluentBundleSource,
        /// Registration errors.
        errors: Vec<FluentError>,
    },
}

/// Fluent-backed localiser.
///
/// ```rust
/// use attempt::{FluentLocalizer, Localizer, langid};
///
/// let localizer = FluentLocalizer::with_en_us_defaults(["world.unknown = No world { $world }"])?;
/// assert!(localizer.lookup("world.unknown", None).is_some());
/// assert!(localizer.lookup("attempt.failed", None).is_some());
/// # Ok::<(), attempt::FluentLocalizerError>(())
/// ```
pub struct FluentLocalizer {
    layers: Vec<Catalogue>,
    reporter: FormattingIssueReporter,
}

impl FluentLocalizer {
    /// Starts a builder for `locale`.
    #[must_use]
    pub fn builder(locale: LanguageIdentifier) -> FluentLocalizerBuilder {
        FluentLocalizerBuilder::new(locale)
    }

    /// Localiser holding only the embedded messages for `locale`.
    ///
    /// # Errors
    ///
    /// Fails with [`FluentLocalizerError::UnsupportedLocale`] when the crate
    /// ships no messages for the locale's language.
    pub fn embedded(locale: LanguageIdentifier) -> Result<Self, FluentLocalizerError> {
        Self::builder(locale).try_build()
    }

    /// US English localiser layering `resources` over the embedded messages.
    ///
    /// # Errors
    ///
    /// Fails when a resource does not parse or redefines an id.
    pub fn with_en_us_defaults(
        resources: impl IntoIterator<Item = &'static str>,
    ) -> Result<Self, FluentLocalizerError> {
        Self::builder(unic_langid::langid!("en-US"))
            .with_consumer_resources(resources)
            .try_build()
    }
}

impl Localizer for FluentLocalizer {
    fn lookup(&self, id: &str, args: Option<&LocalizationArgs<'_>>) -> Option<String> {
        let dashed_id = dashed(id);
        let candidates = [id, dashed_id.as_ref()];
        let fluent_args = args.map(to_fluent_args);

        self.layers.iter().find_map(|layer| {
            match layer.format(&candidates, fluent_args.as_ref())? {
                Ok(text) => Some(text),
                Err(errors) => {
                    (self.reporter)(&FormattingIssue {
                        id: id.to_owned(),
                        locale: layer.locale().clone(),
                        catalogue: layer.origin(),
                        errors,
                    });
                    None
                }
            }
        })
    }
}

fn to_fluent_args<'a>(args: &LocalizationArgs<'a>) -> FluentArgs<'a> {
    args.iter()
        .map(|(name, value)| (*name, value.clone()))
        .collect()
}

impl fmt::Debug for FluentLocalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentLocalizer")
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}

/// Configures a [`FluentLocalizer`].
pub struct FluentLocalizerBuilder {
    locale: LanguageIdentifier,
    consumer: Vec<&'static str>,
    include_defaults: bool,
    reporter: Option<FormattingIssueReporter>,
}

impl FluentLocalizerBuilder {
    /// Builder for `locale` that includes the embedded messages and logs
    /// formatting issues through `tracing`.
    #[must_use]
    pub const fn new(locale: LanguageIdentifier) -> Self {
        Self {
            locale,
            consumer: Vec::new(),
            include_defaults: true,
            reporter: None,
        }
    }

    /// Adds application resources, consulted before the embedded messages.
    #[must_use]
    pub fn with_consumer_resources(
        mut self,
        resources: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        self.consumer.extend(resources);
        self
    }

    /// Leaves out the embedded messages. Any locale is then accepted.
    #[must_use]
    pub const fn disable_defaults(mut self) -> Self {
        self.include_defaults = false;
        self
    }

    /// Replaces the `tracing` reporter for formatting issues.
    #[must_use]
    pub fn with_error_reporter(mut self, reporter: FormattingIssueReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Parses every catalogue and assembles the localiser.
    ///
    /// # Errors
    ///
    /// Fails when the locale has no embedded messages and defaults are on,
    /// or when any resource fails to parse or register.
    pub fn try_build(self) -> Result<FluentLocalizer, FluentLocalizerError> {
        let embedded = if self.include_defaults {
            let source = embedded_source(&self.locale).ok_or_else(|| {
                FluentLocalizerError::UnsupportedLocale {
                    locale: self.locale.clone(),
                }
            })?;
            Some(source)
        } else {
            None
        };

        let mut layers = Vec::with_capacity(2);
        if !self.consumer.is_empty() {
            layers.push(Catalogue::load(
                FluentBundleSource::Consumer,
                &self.locale,
                &self.consumer,
            )?);
        }
        if let Some(source) = embedded {
            layers.push(Catalogue::load(
                FluentBundleSource::Default,
                &self.locale,
                &[source],
            )?);
        }

        Ok(FluentLocalizer {
            layers,
            reporter: self.reporter.unwrap_or_else(default_reporter),
        })
    }
}

impl fmt::Debug for FluentLocalizerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentLocalizerBuilder")
            .field("locale", &self.locale)
            .field("consumer", &self.consumer.len())
            .field("include_defaults", &self.include_defaults)
            .finish_non_exhaustive()
    }
}
