//! Cleaning up step arguments and Fluent output before comparing text.

const QUOTES: [char; 2] = ['"', '\''];

/// Trims `value` and removes one pair of matching outer quotes.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    QUOTES
        .iter()
        .find_map(|quote| trimmed.strip_prefix(*quote)?.strip_suffix(*quote))
        .unwrap_or(trimmed)
}

/// Owned, unquoted form of a feature-file scalar with inner padding removed.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Drops the U+2068/U+2069 isolate marks Fluent places around arguments.
#[must_use]
pub fn strip_isolates(value: &str) -> String {
    value.replace(['\u{2068}', '\u{2069}'], "")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{normalize_scalar, strip_isolates, unquote};

    #[rstest]
    #[case::single("'nether'", "nether")]
    #[case::double(" \"nether\" ", "nether")]
    #[case::unbalanced("'nether\"", "'nether\"")]
    #[case::only_outer("\"'end'\"", "'end'")]
    #[case::bare("world", "world")]
    fn one_layer_of_quotes_is_removed(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unquote(input), expected);
    }

    #[rstest]
    fn scalars_lose_inner_padding() {
        assert_eq!(normalize_scalar("  ' end '  "), "end");
    }

    #[rstest]
    fn isolates_are_removed() {
        assert_eq!(strip_isolates("World \u{2068}nether\u{2069}"), "World nether");
    }
}
