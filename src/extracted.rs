//! Quick-glance facts pulled from subject and body text

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Most links kept per record
pub const MAX_LINKS: usize = 3;

/// Action words looked for, reported in this order
pub const ACTION_WORDS: &[&str] = &["verify", "confirm", "activate", "login", "reset", "update"];

/// Codes, links and action words found in an email
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFacts {
    /// Standalone ASCII 4-8 digit runs, first-seen order, no duplicates
    pub codes: Vec<String>,

    /// `http(s)://` links from the body, first-seen order, at most three
    pub links: Vec<String>,

    /// Action words present, in vocabulary order
    pub actions: Vec<String>,
}

static CODE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?-u:\b)[0-9]{4,8}(?-u:\b)").unwrap());

static URL_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"https?://[^\s<>\[\]{}|\\^]+").unwrap());

impl KeyFacts {
    /// Extract codes and actions from subject and body, links from the body only
    #[must_use]
    pub fn extract(subject: &str, body: &str) -> Self {
        let combined = format!("{subject} {body}");

        let codes = dedup(CODE_REGEX.find_iter(&combined).map(|m| m.as_str()));

        let mut links = dedup(
            URL_REGEX
                .find_iter(body)
                .map(|m| trim_trailing_punctuation(m.as_str()))
                .filter(|url| !url.ends_with("://")),
        );
        links.truncate(MAX_LINKS);

        let lower = combined.to_lowercase();
        let actions = ACTION_WORDS
            .iter()
            .filter(|word| lower.contains(*word))
            .map(|word| (*word).to_string())
            .collect();

        Self {
            codes,
            links,
            actions,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.links.is_empty() && self.actions.is_empty()
    }
}

/// Same as [`KeyFacts::extract`]
#[must_use]
pub fn extract_key_facts(subject: &str, body: &str) -> KeyFacts {
    KeyFacts::extract(subject, body)
}

fn dedup<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

fn trim_trailing_punctuation(url: &str) -> &str {
    url.trim_end_matches(['.', ',', ';', ':', '!', '?', ')', '\'', '"'])
}
