//! Identifier newtype for messages.
//!
//! Message identifiers are opaque strings so that ids minted by external
//! stores (document ids, UUIDs, database keys) can be carried unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a message within its owning collection.
///
/// # Examples
///
/// ```
/// use whisper::message::domain::MessageId;
///
/// let generated = MessageId::new();
/// assert!(!generated.as_str().is_empty());
///
/// let external = MessageId::from("65f1c0ffee");
/// assert_eq!(external.as_str(), "65f1c0ffee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Note: This implementation generates a new random id on each call.
/// Use `MessageId::new()` when the intent to mint an id should be explicit.
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
