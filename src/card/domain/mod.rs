//! Domain types for message cards.
//!
//! Pure values with no infrastructure dependencies: the template format
//! selector, the delete confirmation state machine, notifications and the
//! card display model.

mod confirmation;
mod notification;
mod template_format;
mod view;

pub use confirmation::{ConfirmationError, ConfirmationPrompt, DeleteConfirmationState};
pub use notification::{Notification, Severity};
pub use template_format::{ParseTemplateFormatError, TemplateFormat};
pub use view::CardView;
