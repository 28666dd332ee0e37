//! Port trait definitions for message cards.
//!
//! Every collaborator a card talks to is a port: the message store, the
//! clipboard, the notification channel, the owning collection and the
//! timestamp formatter. Adapters in [`crate::card::adapters`] implement them
//! in memory.

pub mod clipboard;
pub mod message_store;
pub mod notifier;
pub mod removal;
pub mod timestamp;

pub use clipboard::{ClipboardError, ClipboardSink};
pub use message_store::{DeleteReceipt, DeleteRequestError, MessageStore, MessageStoreResult};
pub use notifier::Notifier;
pub use removal::MessageRemovalListener;
pub use timestamp::TimestampFormatter;
