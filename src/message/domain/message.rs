//! The Message aggregate: one user-submitted feedback item.
//!
//! Messages are owned by the collection that lists them and are immutable
//! after construction.

use super::{MessageId, StarRating};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user-submitted message with an optional sender name and star rating.
///
/// # Invariants
///
/// - `content` is never empty (enforced at construction)
/// - `sender_name`, when present, is not blank
/// - `stars`, when present, lies in `1..=5` (enforced by [`StarRating`])
///
/// # Examples
///
/// ```
/// use whisper::message::domain::{Message, StarRating};
/// use mockable::DefaultClock;
///
/// let message = Message::builder("Hello there, this is a test")
///     .with_sender_name("Alice")
///     .with_stars(StarRating::new(4).expect("valid rating"))
///     .build(&DefaultClock)
///     .expect("valid message");
///
/// assert_eq!(message.sender_name(), Some("Alice"));
/// assert_eq!(message.stars().map(StarRating::value), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PersistedMessageData")]
pub struct Message {
    id: MessageId,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stars: Option<StarRating>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a stored message.
///
/// Deserialized messages pass through this type, so stored payloads obey
/// the same invariants as built ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedMessageData {
    /// Stored message identifier.
    pub id: MessageId,
    /// Stored message text.
    pub content: String,
    /// Stored sender name, if any.
    #[serde(default)]
    pub sender_name: Option<String>,
    /// Stored star rating, if any.
    #[serde(default)]
    pub stars: Option<StarRating>,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Returns a builder for a message with the given content.
    #[must_use]
    pub fn builder(content: impl Into<String>) -> MessageBuilder {
        MessageBuilder::new(content)
    }

    /// Reconstructs a message from stored data.
    ///
    /// A blank stored sender name is normalised to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::EmptyContent`] if the content is empty.
    pub fn from_persisted(data: PersistedMessageData) -> Result<Self, MessageBuilderError> {
        if data.content.is_empty() {
            return Err(MessageBuilderError::EmptyContent);
        }
        Ok(Self {
            id: data.id,
            content: data.content,
            sender_name: non_blank(data.sender_name),
            stars: data.stars,
            created_at: data.created_at,
        })
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the sender name, if one was given.
    #[must_use]
    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    /// Returns the star rating, if one was given.
    #[must_use]
    pub const fn stars(&self) -> Option<StarRating> {
        self.stars
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl TryFrom<PersistedMessageData> for Message {
    type Error = MessageBuilderError;

    fn try_from(data: PersistedMessageData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}

/// Builder for constructing messages.
#[derive(Debug)]
pub struct MessageBuilder {
    id: Option<MessageId>,
    content: String,
    sender_name: Option<String>,
    stars: Option<StarRating>,
}

impl MessageBuilder {
    /// Creates a new message builder.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            sender_name: None,
            stars: None,
        }
    }

    /// Sets a specific message ID.
    #[must_use]
    pub fn with_id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the sender name. Blank names are ignored.
    #[must_use]
    pub fn with_sender_name(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = non_blank(Some(sender_name.into()));
        self
    }

    /// Sets the star rating.
    #[must_use]
    pub const fn with_stars(mut self, stars: StarRating) -> Self {
        self.stars = Some(stars);
        self
    }

    /// Builds the message, stamping it with the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::EmptyContent`] if the content is empty.
    pub fn build(self, clock: &impl Clock) -> Result<Message, MessageBuilderError> {
        if self.content.is_empty() {
            return Err(MessageBuilderError::EmptyContent);
        }

        Ok(Message {
            id: self.id.unwrap_or_default(),
            content: self.content,
            sender_name: self.sender_name,
            stars: self.stars,
            created_at: clock.utc(),
        })
    }
}

/// Errors that can occur when building a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageBuilderError {
    /// The message content is empty.
    #[error("message content must not be empty")]
    EmptyContent,
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|name| !name.trim().is_empty())
}
