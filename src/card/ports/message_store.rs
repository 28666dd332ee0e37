//! Message store port: the remote endpoint that deletes messages.
//!
//! The transport (for example `DELETE /api/delete-message/{id}`) is an
//! adapter concern; the card only needs the outcome.

use crate::message::domain::MessageId;
use async_trait::async_trait;
use thiserror::Error;

/// Description shown when a failed delete carries no explanation.
pub const DEFAULT_DELETE_FAILURE: &str = "Failed to delete message";

/// Result type for message store operations.
pub type MessageStoreResult<T> = Result<T, DeleteRequestError>;

/// Port for deleting messages from the owning store.
///
/// # Implementation Notes
///
/// Implementations must:
/// - Resolve exactly once per call, with either a receipt or an error
/// - Leave the message in place when returning an error
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Deletes the message identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteRequestError`] when the store rejects the request or
    /// cannot be reached.
    async fn delete(&self, id: &MessageId) -> MessageStoreResult<DeleteReceipt>;
}

/// Successful delete response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReceipt {
    message: String,
}

impl DeleteReceipt {
    /// Creates a receipt carrying the store's confirmation text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the store's confirmation text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failed delete response.
///
/// # Examples
///
/// ```
/// use whisper::card::ports::message_store::DeleteRequestError;
///
/// let error = DeleteRequestError::without_description();
/// assert_eq!(error.user_message(), "Failed to delete message");
///
/// let error = DeleteRequestError::new("Message not found");
/// assert_eq!(error.user_message(), "Message not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe_failure(.description))]
pub struct DeleteRequestError {
    description: Option<String>,
}

impl DeleteRequestError {
    /// Creates an error with the store's description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// Creates an error for a response that carried no description.
    #[must_use]
    pub const fn without_description() -> Self {
        Self { description: None }
    }

    /// Returns the store's description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the text to show the user, falling back to
    /// [`DEFAULT_DELETE_FAILURE`].
    #[must_use]
    pub fn user_message(&self) -> &str {
        describe_failure(&self.description)
    }
}

fn describe_failure(description: &Option<String>) -> &str {
    description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(DEFAULT_DELETE_FAILURE)
}
