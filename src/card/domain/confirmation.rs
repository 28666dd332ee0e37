//! Delete confirmation state machine.
//!
//! Destructive actions on a card go through a two-step flow: the user asks
//! to delete, then confirms or cancels. The state is transient UI state and
//! is never persisted.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// State of a card's delete confirmation flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteConfirmationState {
    /// No delete in progress. Initial and resting state.
    #[default]
    Idle,
    /// The user asked to delete and the confirmation prompt is open.
    PendingConfirmation,
    /// The user confirmed; the delete request is in flight.
    Confirmed,
}

impl DeleteConfirmationState {
    /// Returns the canonical name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PendingConfirmation => "pending_confirmation",
            Self::Confirmed => "confirmed",
        }
    }

    /// Returns `true` when no delete flow is active.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns whether moving from `self` to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Idle, Self::PendingConfirmation)
                | (Self::PendingConfirmation, Self::Idle | Self::Confirmed)
                | (Self::Confirmed, Self::Idle)
        )
    }

    /// Moves to `target`, leaving the state unchanged when the move is not
    /// allowed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::InvalidTransition`] for disallowed moves.
    pub fn transition_to(&mut self, target: Self) -> Result<(), ConfirmationError> {
        if !self.can_transition_to(target) {
            return Err(ConfirmationError::InvalidTransition {
                from: *self,
                to: target,
            });
        }
        *self = target;
        Ok(())
    }

    /// The user asked to delete: `Idle -> PendingConfirmation`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::InvalidTransition`] outside `Idle`.
    pub fn request(&mut self) -> Result<(), ConfirmationError> {
        self.transition_to(Self::PendingConfirmation)
    }

    /// The user cancelled: `PendingConfirmation -> Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::InvalidTransition`] outside
    /// `PendingConfirmation`.
    pub fn cancel(&mut self) -> Result<(), ConfirmationError> {
        if !matches!(self, Self::PendingConfirmation) {
            return Err(ConfirmationError::InvalidTransition {
                from: *self,
                to: Self::Idle,
            });
        }
        self.transition_to(Self::Idle)
    }

    /// The user confirmed: `PendingConfirmation -> Confirmed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::InvalidTransition`] outside
    /// `PendingConfirmation`.
    pub fn confirm(&mut self) -> Result<(), ConfirmationError> {
        self.transition_to(Self::Confirmed)
    }

    /// The delete request resolved: `Confirmed -> Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmationError::InvalidTransition`] outside `Confirmed`.
    pub fn settle(&mut self) -> Result<(), ConfirmationError> {
        if !matches!(self, Self::Confirmed) {
            return Err(ConfirmationError::InvalidTransition {
                from: *self,
                to: Self::Idle,
            });
        }
        self.transition_to(Self::Idle)
    }
}

impl fmt::Display for DeleteConfirmationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the confirmation state machine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfirmationError {
    /// The requested move is not in the transition table.
    #[error("cannot move delete confirmation from {from} to {to}")]
    InvalidTransition {
        /// Current state.
        from: DeleteConfirmationState,
        /// Requested state.
        to: DeleteConfirmationState,
    },
}

/// Copy shown in the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfirmationPrompt {
    /// Prompt heading.
    pub title: &'static str,
    /// Prompt body.
    pub description: &'static str,
}

impl ConfirmationPrompt {
    /// Prompt shown before permanently deleting a message.
    pub const DELETE_MESSAGE: Self = Self {
        title: "Are you absolutely sure?",
        description: "This action cannot be undone. This will permanently delete this message.",
    };
}
