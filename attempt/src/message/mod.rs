//! Localisable failure messages.
//!
//! A [`Message`] is captured when a failure is created but rendered late, by
//! whichever layer finally shows it. It stores the catalogue key, the
//! fallback template, and the placeholder replacements; nothing is looked up
//! until [`Message::render`] receives a [`Localizer`]. Without one, the
//! `Display` implementation substitutes placeholders into the fallback
//! template.

use std::fmt;

use crate::{DEFAULT_FAILURE_TEMPLATE, FailureReason, LocalizationArgs, Localizer};

mod replacement;

pub use replacement::{MessageReplacement, Replace, ReplacementValue, Replacer, replace};

/// Catalogue entry for [`DEFAULT_FAILURE_TEMPLATE`].
pub const DEFAULT_FAILURE_KEY: &str = "attempt.failed";

/// Display text for a failure, resolved lazily.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    key: Option<String>,
    template: String,
    replacements: Vec<MessageReplacement>,
}

impl Message {
    /// Builds the message for `reason`, using `template` when the catalogue
    /// has no entry for the reason's key.
    #[must_use]
    pub fn of<R>(
        reason: &R,
        template: impl Into<String>,
        replacements: impl IntoIterator<Item = MessageReplacement>,
    ) -> Self
    where
        R: FailureReason + ?Sized,
    {
        Self::keyed(reason.message_key(), template, replacements)
    }

    /// Builds a message for an arbitrary catalogue key.
    #[must_use]
    pub fn keyed(
        key: impl Into<String>,
        template: impl Into<String>,
        replacements: impl IntoIterator<Item = MessageReplacement>,
    ) -> Self {
        Self {
            key: Some(key.into()),
            template: template.into(),
            replacements: replacements.into_iter().collect(),
        }
    }

    /// Builds a message that is never looked up in a catalogue.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            key: None,
            template: text.into(),
            replacements: Vec::new(),
        }
    }

    /// Adds a replacement.
    #[must_use]
    pub fn with_replacement(mut self, replacement: MessageReplacement) -> Self {
        self.replacements.push(replacement);
        self
    }

    /// Catalogue key, if the message has one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Fallback template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholder replacements in insertion order.
    #[must_use]
    pub fn replacements(&self) -> &[MessageReplacement] {
        &self.replacements
    }

    /// Looks up the replacement for `placeholder` (braces included).
    #[must_use]
    pub fn replacement(&self, placeholder: &str) -> Option<&ReplacementValue> {
        self.replacements
            .iter()
            .rev()
            .find(|replacement| replacement.key() == placeholder)
            .map(MessageReplacement::value)
    }

    /// Renders the message through `localizer`.
    ///
    /// Keyed messages are looked up with their replacements passed as Fluent
    /// arguments named after the placeholders without braces. When the
    /// localiser has no entry, or the message has no key, the fallback
    /// template is rendered instead. A keyed message still on
    /// [`DEFAULT_FAILURE_TEMPLATE`] is first retried as
    /// [`DEFAULT_FAILURE_KEY`].
    #[must_use]
    pub fn render(&self, localizer: &dyn Localizer) -> String {
        if let Some(key) = self.key.as_deref() {
            let args = self.localization_args(localizer);
            if let Some(text) = localizer.lookup(key, Some(&args)) {
                return text;
            }
            if self.template == DEFAULT_FAILURE_TEMPLATE
                && let Some(text) = localizer.lookup(DEFAULT_FAILURE_KEY, Some(&args))
            {
                return text;
            }
            tracing::debug!(key, "no translation found; rendering fallback template");
        }
        self.substitute(|value| value.render(localizer))
    }

    fn localization_args<'a>(&'a self, localizer: &dyn Localizer) -> LocalizationArgs<'a> {
        self.replacements
            .iter()
            .map(|replacement| {
                (
                    replacement.argument_name(),
                    replacement.value().to_fluent(localizer),
                )
            })
            .collect()
    }

    /// Replaces every known `{placeholder}` in the template in one pass, so
    /// substituted text is never scanned again. Unknown placeholders and
    /// unmatched braces are kept verbatim.
    fn substitute(&self, render_value: impl Fn(&ReplacementValue) -> String) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            let (before, from_brace) = rest.split_at(open);
            out.push_str(before);
            let Some(close) = from_brace.find('}') else {
                rest = from_brace;
                break;
            };
            let (placeholder, after) = from_brace.split_at(close + 1);
            match self.replacement(placeholder) {
                Some(value) => out.push_str(&render_value(value)),
                None => out.push_str(placeholder),
            }
            rest = after;
        }
        out.push_str(rest);
        out
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.substitute(ToString::to_string))
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}
