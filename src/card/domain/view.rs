//! Display model of a message card.

use crate::message::domain::{Message, STAR_GLYPH};
use serde::Serialize;

/// What a card shows for one message.
///
/// Optional sub-elements are present exactly when the message carries the
/// corresponding field; there is no truthiness involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    sender_name: Option<String>,
    star_row: Option<String>,
    content: String,
    created_at: String,
}

impl CardView {
    /// Builds the view from a message and its already formatted timestamp.
    #[must_use]
    pub fn new(message: &Message, created_at: String) -> Self {
        Self {
            sender_name: message.sender_name().map(str::to_owned),
            star_row: message.stars().map(|stars| stars.glyphs()),
            content: message.content().to_owned(),
            created_at,
        }
    }

    /// Sender name line, if shown.
    #[must_use]
    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    /// Row of star glyphs, if shown.
    #[must_use]
    pub fn star_row(&self) -> Option<&str> {
        self.star_row.as_deref()
    }

    /// Number of star glyphs shown; zero when the row is absent.
    #[must_use]
    pub fn star_count(&self) -> usize {
        self.star_row
            .as_deref()
            .map_or(0, |row| row.chars().filter(|c| *c == STAR_GLYPH).count())
    }

    /// Message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Formatted creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}
