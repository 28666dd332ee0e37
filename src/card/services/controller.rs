//! Message card controller: the UI-state logic behind one displayed message.

use std::sync::Arc;
use thiserror::Error;

use crate::{
    card::{
        domain::{
            CardView, ConfirmationError, ConfirmationPrompt, DeleteConfirmationState,
            Notification, TemplateFormat,
        },
        ports::{ClipboardSink, MessageRemovalListener, MessageStore, Notifier, TimestampFormatter},
        services::{
            template::{TemplateError, generate_template},
            view::render_card,
        },
    },
    message::domain::Message,
};

/// Title of the notification shown after a successful copy.
pub const COPY_SUCCESS_TITLE: &str = "Code Copied";

/// Title of destructive notifications.
pub const ERROR_TITLE: &str = "Error";

/// Description shown when the clipboard rejects a write.
pub const COPY_FAILURE_DESCRIPTION: &str = "Failed to copy template code.";

/// Service-level errors for card operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardError {
    /// The confirmation flow rejected the requested move.
    #[error(transparent)]
    Confirmation(#[from] ConfirmationError),
    /// The template could not be generated.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Result type for card controller operations.
pub type CardResult<T> = Result<T, CardError>;

/// How a confirmed delete resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The store deleted the message and the owning collection was told to
    /// drop it.
    Deleted {
        /// The store's confirmation text.
        notice: String,
    },
    /// The store rejected the request; the message stays displayed.
    Failed {
        /// Description shown to the user.
        description: String,
    },
}

/// How a copy attempt resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The snippet was written to the clipboard.
    Copied(String),
    /// The clipboard rejected the write.
    Failed,
}

/// External collaborators used by a card.
///
/// Shared across cards through `Arc` handles.
pub struct CardPorts<S, N, K, F> {
    /// Store that performs deletes.
    pub store: Arc<S>,
    /// Notification channel.
    pub notifier: Arc<N>,
    /// Clipboard sink.
    pub clipboard: Arc<K>,
    /// Timestamp formatter.
    pub formatter: Arc<F>,
}

impl<S, N, K, F> Clone for CardPorts<S, N, K, F> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
            clipboard: Arc::clone(&self.clipboard),
            formatter: Arc::clone(&self.formatter),
        }
    }
}

/// Controller for a single message card.
///
/// Reads its message, exports templates, and runs the delete confirmation
/// flow. It never mutates the message; removal is requested from the owning
/// collection through the [`MessageRemovalListener`].
pub struct MessageCardController<S, N, K, F>
where
    S: MessageStore,
    N: Notifier,
    K: ClipboardSink,
    F: TimestampFormatter,
{
    message: Arc<Message>,
    ports: CardPorts<S, N, K, F>,
    on_delete: Arc<dyn MessageRemovalListener>,
    confirmation: DeleteConfirmationState,
    selected_format: TemplateFormat,
}

impl<S, N, K, F> MessageCardController<S, N, K, F>
where
    S: MessageStore,
    N: Notifier,
    K: ClipboardSink,
    F: TimestampFormatter,
{
    /// Creates a card for `message` in the `Idle` state with the plain
    /// markup format selected.
    #[must_use]
    pub fn new(
        message: Arc<Message>,
        ports: CardPorts<S, N, K, F>,
        on_delete: Arc<dyn MessageRemovalListener>,
    ) -> Self {
        Self {
            message,
            ports,
            on_delete,
            confirmation: DeleteConfirmationState::Idle,
            selected_format: TemplateFormat::default(),
        }
    }

    /// Returns the displayed message.
    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Returns the current delete confirmation state.
    #[must_use]
    pub const fn confirmation_state(&self) -> DeleteConfirmationState {
        self.confirmation
    }

    /// Renders the card's display model.
    #[must_use]
    pub fn render(&self) -> CardView {
        render_card(&self.message, &*self.ports.formatter)
    }

    /// Generates the message template in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the template engine fails.
    pub fn generate_template(&self, format: TemplateFormat) -> Result<String, TemplateError> {
        generate_template(&self.message, format, &*self.ports.formatter)
    }

    /// Returns the format selected in the copy dialog.
    #[must_use]
    pub const fn selected_format(&self) -> TemplateFormat {
        self.selected_format
    }

    /// Selects the format previewed and copied by the copy dialog.
    pub const fn select_format(&mut self, format: TemplateFormat) {
        self.selected_format = format;
    }

    /// Generates the template in the selected format, for the dialog preview.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the template engine fails.
    pub fn preview_template(&self) -> Result<String, TemplateError> {
        self.generate_template(self.selected_format)
    }

    /// Copies the template in `format` to the clipboard and notifies the
    /// outcome.
    ///
    /// Clipboard failures are reported through the notifier and returned as
    /// [`CopyOutcome::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Template`] if the template cannot be generated;
    /// nothing is written or notified in that case.
    pub fn copy_template(&self, format: TemplateFormat) -> CardResult<CopyOutcome> {
        let snippet = self.generate_template(format)?;

        match self.ports.clipboard.write_text(&snippet) {
            Ok(()) => {
                tracing::info!(message_id = %self.message.id(), %format, "template copied");
                self.ports.notifier.notify(
                    Notification::new(COPY_SUCCESS_TITLE).with_description(format!(
                        "The {} template code has been copied to your clipboard.",
                        format.label()
                    )),
                );
                Ok(CopyOutcome::Copied(snippet))
            }
            Err(error) => {
                tracing::warn!(
                    message_id = %self.message.id(),
                    %format,
                    %error,
                    "template copy failed"
                );
                self.ports.notifier.notify(
                    Notification::new(ERROR_TITLE)
                        .with_description(COPY_FAILURE_DESCRIPTION)
                        .destructive(),
                );
                Ok(CopyOutcome::Failed)
            }
        }
    }

    /// Copies the template in the selected format.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Template`] if the template cannot be generated.
    pub fn copy_selected_template(&self) -> CardResult<CopyOutcome> {
        self.copy_template(self.selected_format)
    }

    /// Opens the delete confirmation: `Idle -> PendingConfirmation`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Confirmation`] when a delete flow is already
    /// active.
    pub fn request_delete(&mut self) -> CardResult<ConfirmationPrompt> {
        self.confirmation.request()?;
        tracing::debug!(message_id = %self.message.id(), "delete confirmation requested");
        Ok(ConfirmationPrompt::DELETE_MESSAGE)
    }

    /// Closes the confirmation without deleting: `PendingConfirmation -> Idle`.
    ///
    /// No request is issued and nothing is notified.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Confirmation`] when no confirmation is pending.
    pub fn cancel_delete(&mut self) -> CardResult<()> {
        self.confirmation.cancel()?;
        tracing::debug!(message_id = %self.message.id(), "delete confirmation cancelled");
        Ok(())
    }

    /// Confirms the pending delete and issues the request to the store.
    ///
    /// On success the store's message is notified and the owning collection
    /// is asked to remove the message. On failure a destructive notification
    /// carries the store's description, or "Failed to delete message" when
    /// there is none, and the message stays. The card returns to `Idle` in
    /// both cases, and also when the returned future is dropped before the
    /// store resolves.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Confirmation`] when no confirmation is pending;
    /// no request is issued in that case. Store failures are not errors.
    #[tracing::instrument(skip(self), fields(message_id = %self.message.id()))]
    pub async fn confirm_delete(&mut self) -> CardResult<DeleteOutcome> {
        self.confirmation.confirm()?;
        let mut in_flight = InFlightDelete::new(&mut self.confirmation);

        let id = self.message.id().clone();
        let outcome = match self.ports.store.delete(&id).await {
            Ok(receipt) => {
                tracing::info!("message deleted");
                self.ports
                    .notifier
                    .notify(Notification::new(receipt.message()));
                self.on_delete.message_removed(&id);
                DeleteOutcome::Deleted {
                    notice: receipt.message().to_owned(),
                }
            }
            Err(error) => {
                let description = error.user_message().to_owned();
                tracing::warn!(%description, "message delete failed");
                self.ports.notifier.notify(
                    Notification::new(ERROR_TITLE)
                        .with_description(description.clone())
                        .destructive(),
                );
                DeleteOutcome::Failed { description }
            }
        };

        in_flight.resolve();
        Ok(outcome)
    }
}

/// Holds the card in `Confirmed` while the store request runs and settles
/// it back to `Idle` when dropped.
struct InFlightDelete<'a> {
    state: &'a mut DeleteConfirmationState,
    resolved: bool,
}

impl<'a> InFlightDelete<'a> {
    const fn new(state: &'a mut DeleteConfirmationState) -> Self {
        Self {
            state,
            resolved: false,
        }
    }

    const fn resolve(&mut self) {
        self.resolved = true;
    }
}

impl Drop for InFlightDelete<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            tracing::warn!("delete request abandoned before the store responded");
        }
        if let Err(error) = self.state.settle() {
            tracing::debug!(%error, "delete confirmation already settled");
        }
    }
}
