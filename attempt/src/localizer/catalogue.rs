//! One Fluent bundle per catalogue, and the id rewriting that lets dotted
//! failure keys live in `.ftl` files.
//!
//! Fluent rejects `.` inside message identifiers, while failure keys are
//! dotted (`world.modify.unknown-world`). Catalogues are rewritten on load so
//! top-level dotted ids become dashed, and lookups try the key as written
//! before its dashed form.

use std::borrow::Cow;
use std::fmt;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentError, FluentResource};
use unic_langid::LanguageIdentifier;

use super::{FluentBundleSource, FluentLocalizerError};

const EN_US_MESSAGES: &str = include_str!("../../locales/en-US/messages.ftl");
const JA_MESSAGES: &str = include_str!("../../locales/ja/messages.ftl");

/// Embedded catalogue for the locale's language, if the crate ships one.
pub(super) fn embedded_source(locale: &LanguageIdentifier) -> Option<&'static str> {
    match locale.language.as_str() {
        "en" => Some(EN_US_MESSAGES),
        "ja" => Some(JA_MESSAGES),
        _ => None,
    }
}

pub(super) struct Catalogue {
    origin: FluentBundleSource,
    locale: LanguageIdentifier,
    bundle: FluentBundle<FluentResource>,
}

impl Catalogue {
    pub(super) fn load(
        origin: FluentBundleSource,
        locale: &LanguageIdentifier,
        sources: &[&str],
    ) -> Result<Self, FluentLocalizerError> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        for source in sources {
            let resource = FluentResource::try_new(dash_dotted_ids(source)).map_err(
                |(_partial, errors)| FluentLocalizerError::Parser {
                    locale: locale.clone(),
                    catalogue: origin,
                    errors,
                },
            )?;
            bundle
                .add_resource(resource)
                .map_err(|errors| FluentLocalizerError::Registration {
                    locale: locale.clone(),
                    catalogue: origin,
                    errors,
                })?;
        }
        Ok(Self {
            origin,
            locale: locale.clone(),
            bundle,
        })
    }

    pub(super) const fn origin(&self) -> FluentBundleSource {
        self.origin
    }

    pub(super) const fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Formats the first candidate id this catalogue defines.
    ///
    /// `None` means no candidate exists here. `Some(Err(..))` carries the
    /// errors Fluent raised while formatting.
    pub(super) fn format(
        &self,
        candidates: &[&str],
        args: Option<&FluentArgs<'_>>,
    ) -> Option<Result<String, Vec<FluentError>>> {
        let pattern = candidates
            .iter()
            .find_map(|id| self.bundle.get_message(id)?.value())?;
        let mut errors = Vec::new();
        let text = self
            .bundle
            .format_pattern(pattern, args, &mut errors)
            .into_owned();
        Some(if errors.is_empty() { Ok(text) } else { Err(errors) })
    }
}

impl fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalogue")
            .field("origin", &self.origin)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Dashed form of a lookup key.
pub(super) fn dashed(id: &str) -> Cow<'_, str> {
    if id.contains('.') {
        Cow::Owned(id.replace('.', "-"))
    } else {
        Cow::Borrowed(id)
    }
}

/// Rewrites dotted top-level message ids. Comments, terms, attributes and
/// continuation lines are copied unchanged.
pub(super) fn dash_dotted_ids(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for (index, line) in source.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        match dotted_id(line) {
            Some(id) => {
                out.push_str(&dashed(id));
                out.push_str(line.strip_prefix(id).unwrap_or_default());
            }
            None => out.push_str(line),
        }
    }
    out
}

fn dotted_id(line: &str) -> Option<&str> {
    let (head, _) = line.split_once('=')?;
    let id = head.trim_end();
    let mut chars = id.chars();
    let is_id = chars.next().is_some_and(char::is_alphabetic)
        && chars.all(|ch| ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    (is_id && id.contains('.')).then_some(id)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unic_langid::langid;

    use super::*;

    #[rstest]
    #[case::en_us(langid!("en-US"), Some(EN_US_MESSAGES))]
    #[case::en_gb(langid!("en-GB"), Some(EN_US_MESSAGES))]
    #[case::ja_jp(langid!("ja-JP"), Some(JA_MESSAGES))]
    #[case::french(langid!("fr-FR"), None)]
    fn embedded_source_follows_the_language(
        #[case] locale: LanguageIdentifier,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(embedded_source(&locale), expected);
    }

    #[rstest]
    #[case::dotted("world.modify.invalid = Bad", "world-modify-invalid = Bad")]
    #[case::spacing("world.missing   =   Gone", "world-missing   =   Gone")]
    #[case::dashed("already-dashed = Fine", "already-dashed = Fine")]
    #[case::comment("# world.missing = not an id", "# world.missing = not an id")]
    #[case::term("-brand.name = Multiverse", "-brand.name = Multiverse")]
    #[case::attribute("    .label = Label", "    .label = Label")]
    #[case::placeable("world.missing = World { $world } is missing", "world-missing = World { $world } is missing")]
    #[case::unicode("世界.不明 = 見つかりません", "世界-不明 = 見つかりません")]
    fn only_top_level_message_ids_are_rewritten(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(dash_dotted_ids(line), expected);
    }

    #[rstest]
    fn multi_line_messages_keep_their_bodies() {
        let source = "world.intro =\n    Welcome to { $world }.\n    .title = Intro";
        assert_eq!(
            dash_dotted_ids(source),
            "world-intro =\n    Welcome to { $world }.\n    .title = Intro"
        );
    }

    #[rstest]
    fn format_distinguishes_missing_ids_from_broken_patterns() {
        let catalogue = Catalogue::load(
            FluentBundleSource::Consumer,
            &langid!("en-US"),
            &["world.ok = fine", "world.broken = { $missing }"],
        )
        .expect("catalogue should load");

        assert!(catalogue.format(&["absent"], None).is_none());
        assert_eq!(
            catalogue.format(&["world.ok", "world-ok"], None),
            Some(Ok("fine".to_owned()))
        );
        assert!(matches!(
            catalogue.format(&["world-broken"], None),
            Some(Err(errors)) if !errors.is_empty()
        ));
    }
}
