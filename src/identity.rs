//! Sender and recipient resolution from heterogeneous attendee shapes

use crate::types::{Identity, UNKNOWN_EMAIL};
use regex::Regex;
use serde_json::{Map, Value};
use tracing::trace;

/// Keys probed for an address on object-shaped attendees, in order
pub const EMAIL_KEYS: &[&str] = &["email", "identifier", "address", "mail"];

/// Keys probed for a display name on object-shaped attendees, in order
pub const NAME_KEYS: &[&str] = &["name", "display_name", "personal", "full_name"];

static BARE_EMAIL_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[^\s@<>]+@[^\s@<>]+\.[^\s@<>]+$").unwrap());

/// Shape of a raw attendee field, ordered by resolution priority
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attendee<'a> {
    /// Provider object with fallback keys
    Record(&'a Map<String, Value>),

    /// `Display Name <address@domain>`
    Bracketed { name: &'a str, email: &'a str },

    /// `address@domain`
    Address(&'a str),

    /// Any other non-empty string, taken as a display name
    FreeText(&'a str),

    /// Null, empty, or a type that carries no identity
    Missing,
}

impl<'a> Attendee<'a> {
    /// Decide which shape `field` has
    #[must_use]
    pub fn classify(field: &'a Value) -> Self {
        match field {
            Value::Object(map) => Self::Record(map),
            Value::String(s) => classify_str(s),
            _ => Self::Missing,
        }
    }

    /// Resolve the shape into an [`Identity`]
    #[must_use]
    pub fn resolve(self) -> Identity {
        let identity = match self {
            Self::Record(map) => Identity::new(
                first_non_empty(map, EMAIL_KEYS).unwrap_or(UNKNOWN_EMAIL),
                first_non_empty(map, NAME_KEYS).unwrap_or_default(),
            ),
            Self::Bracketed { name, email } if email.is_empty() => Identity::named(name),
            Self::Bracketed { name, email } => Identity::new(email, name),
            Self::Address(email) => Identity::new(email, ""),
            Self::FreeText(name) => Identity::named(name),
            Self::Missing => Identity::unknown(),
        };

        if identity.is_unknown() {
            trace!("Attendee resolved without an address: {:?}", self);
        }

        identity
    }
}

fn classify_str(s: &str) -> Attendee<'_> {
    let s = s.trim();
    if s.is_empty() {
        return Attendee::Missing;
    }

    // Address comes from the last `<...>` group
    if let Some(end) = s.rfind('>')
        && let Some(start) = s[..end].rfind('<')
    {
        let name = s[..start]
            .trim()
            .trim_matches(['"', '\''])
            .trim();
        let email = s[start + 1..end].trim();
        return Attendee::Bracketed { name, email };
    }

    if BARE_EMAIL_REGEX.is_match(s) {
        return Attendee::Address(s);
    }

    Attendee::FreeText(s)
}

fn first_non_empty<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Resolve one attendee field of any shape. Never fails.
#[must_use]
pub fn extract_identity(field: &Value) -> Identity {
    Attendee::classify(field).resolve()
}

/// Resolve every element of an attendee array, keeping order and duplicates.
///
/// Anything other than an array yields an empty list.
#[must_use]
pub fn extract_identity_list(field: &Value) -> Vec<Identity> {
    field
        .as_array()
        .map(|items| items.iter().map(extract_identity).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_brackets_over_bare_address() {
        assert_eq!(
            classify_str("a@b.com <c@d.com>"),
            Attendee::Bracketed {
                name: "a@b.com",
                email: "c@d.com"
            }
        );
    }

    #[test]
    fn last_bracket_group_holds_the_address() {
        assert_eq!(
            classify_str("A <b> <c@d.com>"),
            Attendee::Bracketed {
                name: "A <b>",
                email: "c@d.com"
            }
        );
        assert_eq!(extract_identity(&serde_json::json!("A <b> <c@d.com>")).email, "c@d.com");
    }

    #[test]
    fn unclosed_bracket_is_free_text() {
        assert_eq!(classify_str("Jane <jane@x.com"), Attendee::FreeText("Jane <jane@x.com"));
    }

    #[test]
    fn address_with_space_is_free_text() {
        assert_eq!(classify_str("jane doe@x.com"), Attendee::FreeText("jane doe@x.com"));
    }
}
