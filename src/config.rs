//! Normalizer configuration

use crate::error::{NormalizeError, Result};
use crate::preview::DEFAULT_PREVIEW_LENGTH;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Reading speed used for `estimatedReadTime`
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Tunables for [`crate::Normalizer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Maximum preview length before the ellipsis is appended
    pub max_preview_length: usize,

    /// Words per minute for read time estimation
    pub words_per_minute: usize,

    /// Sender substrings that classify a record as work mail
    pub organization_tokens: Vec<String>,

    /// Attach the raw from-attendee and field inventory to each record
    pub include_diagnostics: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_preview_length: DEFAULT_PREVIEW_LENGTH,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            organization_tokens: Vec::new(),
            include_diagnostics: false,
        }
    }
}

impl NormalizerConfig {
    /// Load configuration from a JSON document; missing keys take defaults
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the normalizer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_preview_length == 0 {
            warn!("Rejected configuration: max_preview_length is zero");
            return Err(NormalizeError::InvalidConfig {
                field: "max_preview_length".into(),
                details: "must be greater than zero".into(),
            });
        }

        if self.words_per_minute == 0 {
            warn!("Rejected configuration: words_per_minute is zero");
            return Err(NormalizeError::InvalidConfig {
                field: "words_per_minute".into(),
                details: "must be greater than zero".into(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn with_organization_token(mut self, token: impl Into<String>) -> Self {
        self.organization_tokens.push(token.into());
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.include_diagnostics = enabled;
        self
    }
}
