//! Callback from a card to the collection that owns its message.

use crate::message::domain::MessageId;

/// Receives removal requests after a message was deleted.
///
/// Closures taking a `&MessageId` implement this trait, so a parent list can
/// pass `|id| ...` directly.
pub trait MessageRemovalListener: Send + Sync {
    /// Removes the message from the displayed collection.
    fn message_removed(&self, id: &MessageId);
}

impl<F> MessageRemovalListener for F
where
    F: Fn(&MessageId) + Send + Sync,
{
    fn message_removed(&self, id: &MessageId) {
        self(id);
    }
}
