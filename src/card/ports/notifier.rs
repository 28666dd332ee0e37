//! Notification channel port.

use crate::card::domain::Notification;

/// Fire-and-forget sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    /// Emits a notification. No response is expected.
    fn notify(&self, notification: Notification);
}
