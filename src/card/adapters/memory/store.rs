//! In-memory message store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    card::ports::{DeleteReceipt, DeleteRequestError, MessageStore, MessageStoreResult},
    message::domain::{Message, MessageId},
};

/// Confirmation text returned for a successful delete.
pub const MESSAGE_DELETED: &str = "Message deleted";

/// Description returned when the id is unknown.
pub const MESSAGE_NOT_FOUND: &str = "Message not found or already deleted";

/// Thread-safe in-memory message store.
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    messages: HashMap<MessageId, Message>,
    forced_failure: Option<DeleteRequestError>,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `messages`.
    #[must_use]
    pub fn with_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        let store = Self::new();
        for message in messages {
            store.insert(message);
        }
        store
    }

    /// Adds or replaces a message.
    pub fn insert(&self, message: Message) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        state.messages.insert(message.id().clone(), message);
    }

    /// Makes every subsequent delete fail with `error`, as an unreachable
    /// server would.
    pub fn fail_with(&self, error: DeleteRequestError) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        state.forced_failure = Some(error);
    }

    /// Returns `true` if the store holds a message with `id`.
    #[must_use]
    pub fn contains(&self, id: &MessageId) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .messages
            .contains_key(id)
    }

    /// Returns the number of stored messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .messages
            .len()
    }

    /// Returns `true` if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn delete(&self, id: &MessageId) -> MessageStoreResult<DeleteReceipt> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DeleteRequestError::new(err.to_string()))?;

        if let Some(error) = state.forced_failure.clone() {
            return Err(error);
        }

        state
            .messages
            .remove(id)
            .map(|_| DeleteReceipt::new(MESSAGE_DELETED))
            .ok_or_else(|| DeleteRequestError::new(MESSAGE_NOT_FOUND))
    }
}
