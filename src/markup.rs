//! HTML to plain text decoding

use regex::Regex;
use std::borrow::Cow;

static SCRIPT_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

static STYLE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());

static TAG_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static WHITESPACE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Entities decoded by [`html_to_text`], applied in order.
///
/// `&amp;` stays last so `&amp;lt;` decodes to the literal `&lt;`.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&#x27;", "'"),
    ("&#x2F;", "/"),
    ("&#x60;", "`"),
    ("&#x3D;", "="),
    ("&amp;", "&"),
];

/// Convert an HTML fragment to a single line of plain text.
///
/// Script and style blocks are dropped with their content, every other tag
/// becomes a space, a fixed set of entities is decoded and whitespace runs
/// collapse to one space. Never fails; empty input yields an empty string.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let without_scripts = SCRIPT_REGEX.replace_all(html, " ");
    let without_styles = STYLE_REGEX.replace_all(&without_scripts, " ");
    let without_tags = TAG_REGEX.replace_all(&without_styles, " ");

    let decoded = decode_entities(&without_tags);

    collapse_whitespace(&decoded)
}

/// Collapse every whitespace run (newlines included) to one space and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut decoded = text.to_string();
    for (entity, replacement) in ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }
    Cow::Owned(decoded)
}
