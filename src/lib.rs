// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Normalization Engine
//!
//! Turns loosely-typed provider email payloads into one canonical,
//! fully-decoded record with derived metadata.
//!
//! # Features
//!
//! - HTML to plain text decoding with script/style removal
//! - Sender and recipient resolution from objects, `Name <addr>` strings,
//!   bare addresses, or free text
//! - Bounded previews, word counts and read time estimates
//! - Keyword topic classification
//! - Verification code, link and action word extraction
//!
//! Every operation is pure and synchronous. Missing or malformed fields
//! degrade to documented defaults instead of failing.
//!
//! # Example
//!
//! ```rust
//! use email_normalizer::{Normalizer, RawEmailRecord};
//!
//! let raw = RawEmailRecord::from_json_str(
//!     r#"{"from_attendee": "Jane <jane@x.com>", "body": "<p>Hi <b>there</b></p>"}"#,
//! ).unwrap();
//! let email = Normalizer::default().normalize(&raw);
//!
//! assert_eq!(email.sender().email, "jane@x.com");
//! assert_eq!(email.plain_text_body(), "Hi there");
//! assert_eq!(email.preview(), "Hi there");
//! ```

mod category;
mod config;
mod error;
mod extracted;
mod identity;
mod markup;
mod normalizer;
mod preview;
mod types;

pub use category::{Categorizer, Category, categorize};
pub use config::{DEFAULT_WORDS_PER_MINUTE, NormalizerConfig};
pub use error::{NormalizeError, Result};
pub use extracted::{ACTION_WORDS, KeyFacts, MAX_LINKS, extract_key_facts};
pub use identity::{Attendee, EMAIL_KEYS, NAME_KEYS, extract_identity, extract_identity_list};
pub use markup::{collapse_whitespace, html_to_text};
pub use normalizer::{Normalizer, normalize};
pub use preview::{DEFAULT_PREVIEW_LENGTH, EMPTY_MESSAGE, NO_CONTENT, select_preview};
pub use types::*;
