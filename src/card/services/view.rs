//! Card rendering.

use crate::{
    card::{domain::CardView, ports::TimestampFormatter},
    message::domain::Message,
};

/// Renders the display model for `message`.
///
/// Missing optional fields suppress their sub-elements; this never fails.
#[must_use]
pub fn render_card(message: &Message, formatter: &impl TimestampFormatter) -> CardView {
    CardView::new(message, formatter.format(message.created_at()))
}
