//! Clipboard port.

use thiserror::Error;

/// Port for writing text to the system clipboard.
pub trait ClipboardSink: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the clipboard cannot be written,
    /// for example when the page lacks clipboard permission.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Errors raised by clipboard sinks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The clipboard is not available or access was denied.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
