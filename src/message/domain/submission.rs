//! Candidate message submissions, as received from a submission form.

use super::{Message, MessageBuilderError, StarRating};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Raw star rating as sent by a form: either text or a number.
///
/// HTML forms submit select values as strings while JSON clients usually
/// send integers; both shapes deserialise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StarsInput {
    /// Numeric input such as `4`.
    Number(i64),
    /// Textual input such as `"4"`.
    Text(String),
}

impl From<i64> for StarsInput {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StarsInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// An unvalidated message submission.
///
/// # Examples
///
/// ```
/// use whisper::message::domain::{MessageSubmission, StarsInput};
///
/// let submission: MessageSubmission = serde_json::from_str(
///     r#"{"content": "Loved the talk today", "senderName": "Alice", "stars": "5"}"#,
/// ).expect("valid JSON");
///
/// assert_eq!(submission.stars, Some(StarsInput::Text("5".to_owned())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSubmission {
    /// Message text.
    pub content: String,
    /// Optional sender name.
    #[serde(default)]
    pub sender_name: Option<String>,
    /// Optional star rating.
    #[serde(default)]
    pub stars: Option<StarsInput>,
}

impl MessageSubmission {
    /// Creates a submission with content only.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender_name: None,
            stars: None,
        }
    }

    /// Sets the sender name.
    #[must_use]
    pub fn with_sender_name(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = Some(sender_name.into());
        self
    }

    /// Sets the raw star rating.
    #[must_use]
    pub fn with_stars(mut self, stars: impl Into<StarsInput>) -> Self {
        self.stars = Some(stars.into());
        self
    }
}

/// A submission that passed validation, with normalised fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidSubmission {
    content: String,
    sender_name: Option<String>,
    stars: Option<StarRating>,
}

impl ValidSubmission {
    pub(crate) const fn new(
        content: String,
        sender_name: Option<String>,
        stars: Option<StarRating>,
    ) -> Self {
        Self {
            content,
            sender_name,
            stars,
        }
    }

    /// Returns the validated message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the sender name, if a non-blank one was submitted.
    #[must_use]
    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    /// Returns the parsed star rating, if one was submitted.
    #[must_use]
    pub const fn stars(&self) -> Option<StarRating> {
        self.stars
    }

    /// Converts the submission into a new message stamped with the clock.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError`] if the message cannot be built.
    pub fn into_message(self, clock: &impl Clock) -> Result<Message, MessageBuilderError> {
        let mut builder = Message::builder(self.content);
        if let Some(sender_name) = self.sender_name {
            builder = builder.with_sender_name(sender_name);
        }
        if let Some(stars) = self.stars {
            builder = builder.with_stars(stars);
        }
        builder.build(clock)
    }
}
