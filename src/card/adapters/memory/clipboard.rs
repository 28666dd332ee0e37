//! In-memory clipboard.

use std::sync::{Mutex, PoisonError};

use crate::card::ports::{ClipboardError, ClipboardSink};

/// Clipboard that keeps the last written text.
///
/// A clipboard created with [`InMemoryClipboard::denied`] rejects every
/// write, like a browser without clipboard permission.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    contents: Mutex<Option<String>>,
    denied: bool,
}

impl InMemoryClipboard {
    /// Creates an empty, writable clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that rejects writes.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            contents: Mutex::new(None),
            denied: true,
        }
    }

    /// Returns the current clipboard contents.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ClipboardSink for InMemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::Unavailable(
                "clipboard access denied".to_owned(),
            ));
        }
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_owned());
        Ok(())
    }
}
