//! In-memory adapters for every card port.
//!
//! Used by tests and by hosts that render cards without a browser.

mod clipboard;
mod list;
mod notifier;
mod store;

pub use clipboard::InMemoryClipboard;
pub use list::MessageList;
pub use notifier::RecordingNotifier;
pub use store::{InMemoryMessageStore, MESSAGE_DELETED, MESSAGE_NOT_FOUND};
