//! Notification events emitted by card controllers.
//!
//! The controller only emits events; the UI shell owns rendering and the
//! lifetime of any toast.

use serde::Serialize;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational notice.
    #[default]
    Normal,
    /// Error or destructive outcome.
    Destructive,
}

/// A user-facing notification.
///
/// # Examples
///
/// ```
/// use whisper::card::domain::{Notification, Severity};
///
/// let notice = Notification::new("Error")
///     .with_description("Failed to delete message")
///     .destructive();
/// assert_eq!(notice.severity, Severity::Destructive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Headline.
    pub title: String,
    /// Optional body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Visual weight.
    pub severity: Severity,
}

impl Notification {
    /// Creates a normal notification with a title only.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: Severity::Normal,
        }
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the notification as destructive.
    #[must_use]
    pub const fn destructive(mut self) -> Self {
        self.severity = Severity::Destructive;
        self
    }

    /// Returns `true` for destructive notifications.
    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self.severity, Severity::Destructive)
    }
}
