//! Assembly of the canonical record from a raw provider payload

use crate::category::Categorizer;
use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::extracted::KeyFacts;
use crate::identity::{extract_identity, extract_identity_list};
use crate::markup::html_to_text;
use crate::preview::select_preview;
use crate::types::{
    Diagnostics, EnrichedEmail, Identity, NO_SUBJECT, NormalizedEmail, RawEmailRecord,
};
use serde_json::Value;
use tracing::debug;

// Provider field names, most common first
const ID_KEYS: &[&str] = &["id"];
const MESSAGE_ID_KEYS: &[&str] = &["message_id"];
const THREAD_ID_KEYS: &[&str] = &["thread_id"];
const PROVIDER_ID_KEYS: &[&str] = &["provider_id"];
const SUBJECT_KEYS: &[&str] = &["subject"];
const DATE_KEYS: &[&str] = &["date"];
const READ_MARKER_KEYS: &[&str] = &["read_date"];
const HAS_ATTACHMENTS_KEYS: &[&str] = &["has_attachments"];
const FROM_KEYS: &[&str] = &["from_attendee", "from", "sender"];
const TO_KEYS: &[&str] = &["to_attendees", "to"];
const CC_KEYS: &[&str] = &["cc_attendees", "cc"];
const BCC_KEYS: &[&str] = &["bcc_attendees", "bcc"];
const REPLY_TO_KEYS: &[&str] = &["reply_to_attendees", "reply_to"];
const HTML_BODY_KEYS: &[&str] = &["body", "body_html", "html"];
const PLAIN_BODY_KEYS: &[&str] = &["body_plain", "text", "text_body"];
const FOLDER_KEYS: &[&str] = &["folders"];
const ATTACHMENT_KEYS: &[&str] = &["attachments"];

/// Stateless record normalizer; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
    categorizer: Categorizer,
}

impl Normalizer {
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        let categorizer = Categorizer::new(&config.organization_tokens);
        Self {
            config,
            categorizer,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Build the canonical record. Missing or malformed fields fall back to
    /// their documented defaults; this never fails.
    #[must_use]
    pub fn normalize(&self, raw: &RawEmailRecord) -> NormalizedEmail {
        let raw_from = raw.first_present(FROM_KEYS).unwrap_or(&Value::Null);
        let sender = extract_identity(raw_from);

        let html_body = string_field(raw, HTML_BODY_KEYS).unwrap_or_default();
        let plain_text_body = string_field(raw, PLAIN_BODY_KEYS)
            .filter(|plain| !plain.is_empty())
            .unwrap_or_else(|| html_to_text(&html_body));

        let preview = select_preview(
            &html_body,
            &plain_text_body,
            self.config.max_preview_length,
        );

        let word_count = plain_text_body.split_whitespace().count();
        let estimated_read_time = word_count
            .div_ceil(self.config.words_per_minute.max(1))
            .max(1);

        let attachments = raw
            .first_present(ATTACHMENT_KEYS)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let has_attachments = raw
            .first_present(HAS_ATTACHMENTS_KEYS)
            .and_then(Value::as_bool)
            .unwrap_or_else(|| !attachments.is_empty());

        let folders = raw
            .first_present(FOLDER_KEYS)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let subject = string_field(raw, SUBJECT_KEYS)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| NO_SUBJECT.to_string());

        let debug = self.config.include_diagnostics.then(|| Diagnostics {
            raw_from: raw_from.clone(),
            field_inventory: raw.field_names(),
        });

        let email = NormalizedEmail {
            id: identifier(raw, ID_KEYS),
            message_id: identifier(raw, MESSAGE_ID_KEYS),
            thread_id: identifier(raw, THREAD_ID_KEYS),
            provider_id: identifier(raw, PROVIDER_ID_KEYS),
            subject,
            date: string_field(raw, DATE_KEYS),
            is_read: raw.first_present(READ_MARKER_KEYS).is_some(),
            has_attachments,
            from: sender.email.clone(),
            from_name: sender.name.clone(),
            sender,
            to: identity_list(raw, TO_KEYS),
            cc: identity_list(raw, CC_KEYS),
            bcc: identity_list(raw, BCC_KEYS),
            reply_to: identity_list(raw, REPLY_TO_KEYS),
            content_length: plain_text_body.chars().count(),
            html_body,
            plain_text_body,
            preview,
            word_count,
            estimated_read_time,
            folders,
            attachments,
            debug,
        };

        debug!(
            "Normalized email {} from {} ({} words)",
            email.id.as_deref().unwrap_or("<no id>"),
            email.from,
            email.word_count
        );

        email
    }

    /// Parse a JSON payload and normalize it
    pub fn normalize_json(&self, json: &str) -> Result<NormalizedEmail> {
        let raw = RawEmailRecord::from_json_str(json)?;
        Ok(self.normalize(&raw))
    }

    /// Attach category and key facts to a canonical record
    #[must_use]
    pub fn enrich(&self, email: NormalizedEmail) -> EnrichedEmail {
        let category = self.categorizer.categorize(
            &email.subject,
            &email.sender.email,
            &email.plain_text_body,
        );
        let key_facts = KeyFacts::extract(&email.subject, &email.plain_text_body);

        EnrichedEmail {
            email,
            category,
            key_facts,
        }
    }

    /// Normalize and enrich in one step
    #[must_use]
    pub fn normalize_enriched(&self, raw: &RawEmailRecord) -> EnrichedEmail {
        self.enrich(self.normalize(raw))
    }
}

/// Normalize with the default configuration
#[must_use]
pub fn normalize(raw: &RawEmailRecord) -> NormalizedEmail {
    Normalizer::default().normalize(raw)
}

fn string_field(raw: &RawEmailRecord, keys: &[&str]) -> Option<String> {
    raw.first_present(keys)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn identifier(raw: &RawEmailRecord, keys: &[&str]) -> Option<String> {
    match raw.first_present(keys)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn identity_list(raw: &RawEmailRecord, keys: &[&str]) -> Vec<Identity> {
    raw.first_present(keys)
        .map(extract_identity_list)
        .unwrap_or_default()
}
