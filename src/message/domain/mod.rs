//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are immutable after construction and serialisable via serde.

mod ids;
mod message;
mod rating;
mod submission;

pub use ids::MessageId;
pub(crate) use message::non_blank;
pub use message::{Message, MessageBuilder, MessageBuilderError, PersistedMessageData};
pub use rating::{STAR_GLYPH, StarRating, StarRatingError};
pub use submission::{MessageSubmission, StarsInput, ValidSubmission};
