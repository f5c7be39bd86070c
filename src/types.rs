//! Core types for raw and normalized email records

use crate::category::Category;
use crate::error::{NormalizeError, Result};
use crate::extracted::KeyFacts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Address reported when an attendee carries no resolvable email
pub const UNKNOWN_EMAIL: &str = "Unknown";

/// Subject reported when the provider sends none
pub const NO_SUBJECT: &str = "No Subject";

/// Unvalidated provider payload.
///
/// Field names and value shapes vary per provider; nothing is guaranteed
/// beyond being a JSON object. The engine only ever reads from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEmailRecord(Map<String, Value>);

impl RawEmailRecord {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(NormalizeError::NotAnObject(json_kind(&other).into())),
        }
    }

    /// Parse a JSON document into a record
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Raw value for `key`, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// First non-null value among `keys`, in order
    #[must_use]
    pub fn first_present(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }

    /// Sorted list of every key the provider sent
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.keys().cloned().collect();
        names.sort();
        names
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawEmailRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for RawEmailRecord {
    type Error = NormalizeError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolved participant: an address plus a descriptive display name.
///
/// Equality and hashing consider the email only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Email address, or [`UNKNOWN_EMAIL`]
    pub email: String,

    /// Display name, possibly empty
    pub name: String,
}

impl Identity {
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_EMAIL, "")
    }

    /// Display name only, with no resolvable address
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(UNKNOWN_EMAIL, name)
    }

    /// True when no address could be resolved
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.email == UNKNOWN_EMAIL
    }

    /// Name if present, otherwise the address
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::unknown()
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}

/// Canonical email record produced by [`crate::Normalizer`].
///
/// Fields are read through accessors; a record never changes after it is
/// built. Enrichment is attached alongside in [`EnrichedEmail`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEmail {
    pub(crate) id: Option<String>,
    pub(crate) message_id: Option<String>,
    pub(crate) thread_id: Option<String>,
    pub(crate) provider_id: Option<String>,
    pub(crate) subject: String,
    pub(crate) date: Option<String>,
    pub(crate) is_read: bool,
    pub(crate) has_attachments: bool,
    pub(crate) from: String,
    pub(crate) from_name: String,
    pub(crate) sender: Identity,
    pub(crate) to: Vec<Identity>,
    pub(crate) cc: Vec<Identity>,
    pub(crate) bcc: Vec<Identity>,
    pub(crate) reply_to: Vec<Identity>,
    pub(crate) html_body: String,
    pub(crate) plain_text_body: String,
    pub(crate) preview: String,
    pub(crate) content_length: usize,
    pub(crate) word_count: usize,
    pub(crate) estimated_read_time: usize,
    pub(crate) folders: Vec<String>,
    pub(crate) attachments: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) debug: Option<Diagnostics>,
}

impl NormalizedEmail {
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    #[must_use]
    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    #[must_use]
    pub fn provider_id(&self) -> Option<&str> {
        self.provider_id.as_deref()
    }

    #[must_use]
    pub const fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Date exactly as the provider sent it
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Parse the provider date as RFC 3339, then RFC 2822
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        let date = self.date.as_deref()?.trim();
        DateTime::parse_from_rfc3339(date)
            .or_else(|_| DateTime::parse_from_rfc2822(date))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.is_read
    }

    #[must_use]
    pub const fn has_attachments(&self) -> bool {
        self.has_attachments
    }

    /// Sender address (`from`), same as `sender().email`
    #[must_use]
    pub const fn sender_email(&self) -> &str {
        self.from.as_str()
    }

    /// Sender display name (`fromName`)
    #[must_use]
    pub const fn sender_name(&self) -> &str {
        self.from_name.as_str()
    }

    #[must_use]
    pub const fn sender(&self) -> &Identity {
        &self.sender
    }

    #[must_use]
    pub const fn to(&self) -> &[Identity] {
        self.to.as_slice()
    }

    #[must_use]
    pub const fn cc(&self) -> &[Identity] {
        self.cc.as_slice()
    }

    #[must_use]
    pub const fn bcc(&self) -> &[Identity] {
        self.bcc.as_slice()
    }

    #[must_use]
    pub const fn reply_to(&self) -> &[Identity] {
        self.reply_to.as_slice()
    }

    /// Raw markup, possibly empty
    #[must_use]
    pub const fn html_body(&self) -> &str {
        self.html_body.as_str()
    }

    #[must_use]
    pub const fn plain_text_body(&self) -> &str {
        self.plain_text_body.as_str()
    }

    #[must_use]
    pub const fn preview(&self) -> &str {
        self.preview.as_str()
    }

    /// Character count of the plain text body
    #[must_use]
    pub const fn content_length(&self) -> usize {
        self.content_length
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Minutes, never below one
    #[must_use]
    pub const fn estimated_read_time(&self) -> usize {
        self.estimated_read_time
    }

    #[must_use]
    pub const fn folders(&self) -> &[String] {
        self.folders.as_slice()
    }

    #[must_use]
    pub const fn attachments(&self) -> &[Value] {
        self.attachments.as_slice()
    }

    #[must_use]
    pub const fn diagnostics(&self) -> Option<&Diagnostics> {
        self.debug.as_ref()
    }
}

/// Debug side-channel, attached only when diagnostics are enabled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// From-attendee value before resolution
    pub raw_from: Value,

    /// Sorted keys present on the raw record
    pub field_inventory: Vec<String>,
}

/// Canonical record with category and key facts attached
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEmail {
    #[serde(flatten)]
    pub email: NormalizedEmail,

    pub category: Category,

    pub key_facts: KeyFacts,
}
