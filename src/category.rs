//! Keyword-based topic classification

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Coarse topic label; exactly one per record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Security,
    Social,
    Work,
    Marketing,
    #[default]
    General,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Social => "social",
            Self::Work => "work",
            Self::Marketing => "marketing",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SECURITY_SUBJECT_KEYWORDS: &[&str] = &["security", "verification", "verify", "code"];
const SOCIAL_SENDERS: &[&str] = &["instagram", "facebook", "linkedin", "twitter"];
const WORK_SUBJECT_KEYWORDS: &[&str] = &["employee", "work", "project"];
const MARKETING_SUBJECT_KEYWORDS: &[&str] = &["update", "launch", "new", "deal"];

static SIX_DIGIT_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?-u:\b)[0-9]{6}(?-u:\b)").unwrap());

/// Rule-ordered classifier; the first matching rule decides.
///
/// Order: security, social, work, marketing, general.
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    organization_tokens: Vec<String>,
}

impl Categorizer {
    /// Build a classifier; senders containing any token classify as work
    #[must_use]
    pub fn new(organization_tokens: &[String]) -> Self {
        Self {
            organization_tokens: organization_tokens
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Classify by subject and sender address. `_body` is accepted for
    /// callers that pass the full record but does not influence any rule.
    #[must_use]
    pub fn categorize(&self, subject: &str, sender_email: &str, _body: &str) -> Category {
        let subject = subject.to_lowercase();
        let sender = sender_email.to_lowercase();

        let category = if contains_any(&subject, SECURITY_SUBJECT_KEYWORDS)
            || SIX_DIGIT_REGEX.is_match(&subject)
        {
            Category::Security
        } else if contains_any(&sender, SOCIAL_SENDERS) {
            Category::Social
        } else if self
            .organization_tokens
            .iter()
            .any(|token| sender.contains(token.as_str()))
            || contains_any(&subject, WORK_SUBJECT_KEYWORDS)
        {
            Category::Work
        } else if contains_any(&subject, MARKETING_SUBJECT_KEYWORDS) {
            Category::Marketing
        } else {
            Category::General
        };

        debug!("Categorized '{}' from {} as {}", subject, sender, category);
        category
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Classify with no organization tokens configured
#[must_use]
pub fn categorize(subject: &str, sender_email: &str, body: &str) -> Category {
    Categorizer::default().categorize(subject, sender_email, body)
}
