//! Preview selection and truncation

use crate::markup::{collapse_whitespace, html_to_text};

/// Preview length used when none is configured
pub const DEFAULT_PREVIEW_LENGTH: usize = 200;

/// Preview when neither a plain nor an HTML body exists
pub const NO_CONTENT: &str = "No content available";

/// Preview when a body exists but holds no visible text
pub const EMPTY_MESSAGE: &str = "Empty message";

const ELLIPSIS: &str = "...";

/// Plain bodies at or below this many characters defer to the HTML body
const MIN_PLAIN_CHARS: usize = 10;

/// Pick the best text for a preview and bound it to `max_length` characters.
///
/// A plain body longer than ten characters wins. Otherwise the HTML body is
/// decoded, and a short plain body is used only when there is no HTML at all.
/// Content over `max_length` is cut at exactly `max_length` characters and
/// gets `"..."` appended.
#[must_use]
pub fn select_preview(html_body: &str, plain_body: &str, max_length: usize) -> String {
    let content = if plain_body.trim().chars().count() > MIN_PLAIN_CHARS {
        collapse_whitespace(plain_body)
    } else if !html_body.is_empty() {
        html_to_text(html_body)
    } else if !plain_body.is_empty() {
        collapse_whitespace(plain_body)
    } else {
        return truncate(NO_CONTENT, max_length);
    };

    if content.is_empty() {
        return truncate(EMPTY_MESSAGE, max_length);
    }

    truncate(&content, max_length)
}

fn truncate(content: &str, max_length: usize) -> String {
    match content.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &content[..cut]),
        None => content.to_string(),
    }
}
