use regex::Regex;
use std::sync::LazyLock;

use crate::text::spelling::apply_spelling_equivalents;

/// ASCII whitespace only; NBSP and other Unicode spaces stay inside tokens
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("valid whitespace regex"));

static RE_QUOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[«‹»›„“‟”’"❝❞❮❯⹂〝〞〟＂‚‘‛❛❜❟]"#).expect("valid quotes regex")
});

const SPACE: &str = " ";
const APOSTROPHE: &str = "'";

const HTTPS_SCHEME: &str = "https://";
const HTTP_SCHEME: &str = "http://";

const COPYRIGHT_SIGN: &str = "©";
const COPYRIGHT_REPLACEMENT: &str = "(c)";

const EM_DASH: &str = "\u{2014}";
const EN_DASH: &str = "\u{2013}";
const HYPHEN: &str = "-";

/// Canonicalize raw text for comparison.
///
/// The steps run in a fixed order and each one sees the output of the
/// previous step:
///
/// 1. lowercase, one character at a time
/// 2. collapse runs of ASCII whitespace (tab, newline, form feed, carriage
///    return, space) into a single space
/// 3. unify quotation marks to `'`
/// 4. `https://` to `http://`
/// 5. `©` to `(c)`
/// 6. em/en dash to `-`
/// 7. trim (Unicode whitespace)
/// 8. spelling equivalences
///
/// The result may be empty.
#[must_use]
pub fn normalize(raw: &str) -> String {
    // Per-char mapping: no context-dependent rules such as final sigma
    let text: String = raw.chars().flat_map(char::to_lowercase).collect();
    let text = RE_WHITESPACE.replace_all(&text, SPACE);
    let text = RE_QUOTES.replace_all(&text, APOSTROPHE);

    let text = text
        .replace(HTTPS_SCHEME, HTTP_SCHEME)
        .replace(COPYRIGHT_SIGN, COPYRIGHT_REPLACEMENT)
        .replace(EM_DASH, HYPHEN)
        .replace(EN_DASH, HYPHEN);

    apply_spelling_equivalents(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapsed() {
        let input = "lorem   ipsum\n\r dolor\t\t\n   \t sit amet,   \n\t\r consectetur \n\n\n adipiscing \n\r\n\r elit";
        assert_eq!(
            normalize(input),
            "lorem ipsum dolor sit amet, consectetur adipiscing elit"
        );
    }

    #[test]
    fn test_leading_and_trailing_whitespace_trimmed() {
        assert_eq!(
            normalize("\n\r\t    lorem ipsum dolor sit amet   \n\n\t"),
            "lorem ipsum dolor sit amet"
        );
    }

    #[test]
    fn test_only_whitespace_is_empty() {
        assert_eq!(normalize("\n\t\t\t\r   \n\r    \r\t\n \n  \t  \r"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_dashes_become_hyphens() {
        assert_eq!(
            normalize("\u{2013}lorem\u{2014}ipsum\u{2013}dolor\u{2013}sit\u{2014}amet\u{2014}"),
            "-lorem-ipsum-dolor-sit-amet-"
        );
    }

    #[test]
    fn test_https_becomes_http() {
        assert_eq!(
            normalize("lorem ipsum http://lorem.ipsum/dolor dolor https://lorem.ipsum/dolor sit amet"),
            "lorem ipsum http://lorem.ipsum/dolor dolor http://lorem.ipsum/dolor sit amet"
        );
        // No word boundary: the scheme is rewritten inside larger tokens too
        assert_eq!(normalize("see:https://x"), "see:http://x");
    }

    #[test]
    fn test_copyright_sign() {
        assert_eq!(
            normalize("lorem © ipsum dolor sit (c) amet"),
            "lorem (c) ipsum dolor sit (c) amet"
        );
    }

    #[test]
    fn test_quotes_unified() {
        let input = "«lorem‹ipsum»dolor›sit„amet“‟”’\"❝❞❮❯⹂〝〞〟＂‚‘‛❛❜❟";
        let expected = format!("'lorem'ipsum'dolor'sit'amet{}", "'".repeat(20));
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_each_quote_character() {
        for quote in "«‹»›„“‟”’\"❝❞❮❯⹂〝〞〟＂‚‘‛❛❜❟".chars() {
            assert_eq!(normalize(&quote.to_string()), "'", "quote {quote:?}");
        }
    }

    #[test]
    fn test_lowercase_is_unicode_aware() {
        assert_eq!(
            normalize("LoRem IPSuM dolor sIt amEt ЛорЕм іпСум долОр сІТ аМЕт їЇЬьЎў"),
            "lorem ipsum dolor sit amet лорем іпсум долор сіт амет їїььўў"
        );
    }

    #[test]
    fn test_lowercase_ignores_word_position() {
        assert_eq!(normalize("ΟΔΟΣ"), "οδοσ");
        assert_eq!(normalize("ΣΟΦΟΣ ΟΔΟΣ"), "σοφοσ οδοσ");
    }

    #[test]
    fn test_only_ascii_whitespace_collapses() {
        assert_eq!(
            normalize("copyright\u{a0}holder x"),
            "copyright\u{a0}holder x"
        );
        assert_eq!(normalize("a\u{2003}\u{2003}b"), "a\u{2003}\u{2003}b");
        assert_eq!(normalize("a\x0C\x0C b"), "a b");
        // Vertical tab is not a separator
        assert_eq!(normalize("a\x0Bb"), "a\x0Bb");
    }

    #[test]
    fn test_unicode_whitespace_still_trimmed() {
        assert_eq!(normalize("\u{a0}\u{3000}lorem ipsum\u{2003}"), "lorem ipsum");
    }

    #[test]
    fn test_spelling_equivalence() {
        assert_eq!(normalize("organization"), normalize("organisation"));
        assert_eq!(normalize("Licence"), "license");
        assert_eq!(normalize("The Copyright   Holder"), "the copyright owner");
    }

    #[test]
    fn test_spelling_after_whitespace_collapse() {
        // "sub license" only matches once the newline has been collapsed
        assert_eq!(normalize("Sub\n\tLicense"), "sublicense");
    }

    #[test]
    fn test_idempotent_on_canonical_text() {
        let canonical = normalize(
            "Permission is hereby granted, free of charge, to any person obtaining a copy \
             of this software — see https://example.org © 2024 “Example” Organization",
        );
        assert_eq!(normalize(&canonical), canonical);
    }
}
