//! In-memory list of displayed messages: the collection that owns cards.

use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    card::ports::MessageRemovalListener,
    message::domain::{Message, MessageId},
};

/// Ordered list of messages currently shown to the user.
///
/// Cards receive shared handles to the messages and report deletions back
/// through [`MessageRemovalListener`].
#[derive(Debug, Default)]
pub struct MessageList {
    messages: RwLock<Vec<Arc<Message>>>,
}

impl MessageList {
    /// Creates a list displaying `messages` in order.
    #[must_use]
    pub fn new(messages: impl IntoIterator<Item = Message>) -> Self {
        Self {
            messages: RwLock::new(messages.into_iter().map(Arc::new).collect()),
        }
    }

    /// Returns shared handles to the displayed messages.
    #[must_use]
    pub fn messages(&self) -> Vec<Arc<Message>> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the handle for `id`, if displayed.
    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<Arc<Message>> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|message| message.id() == id)
            .cloned()
    }

    /// Returns `true` if a message with `id` is displayed.
    #[must_use]
    pub fn contains(&self, id: &MessageId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of displayed messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageRemovalListener for MessageList {
    fn message_removed(&self, id: &MessageId) {
        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|message| message.id() != id);
    }
}
