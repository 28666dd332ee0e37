//! Card services: rendering, template export and the card controller.

pub mod controller;
pub mod template;
pub mod view;

pub use controller::{
    CardError, CardPorts, CardResult, CopyOutcome, DeleteOutcome, MessageCardController,
};
pub use template::{TemplateError, generate_template};
pub use view::render_card;
