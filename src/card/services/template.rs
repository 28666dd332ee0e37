//! Template export: reproduces a card's markup as copy-paste snippets.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use thiserror::Error;

use crate::{
    card::{domain::TemplateFormat, ports::TimestampFormatter},
    message::domain::Message,
};

const PLAIN_MARKUP_TEMPLATE: &str = r#"<div class="message-card" style="border: 1px solid #ccc; border-radius: 8px; padding: 16px; background-color: #f9f9f9;">
  <div class="card-header">
    {% if sender_name %}
    <p class="text-sm font-semibold">{{ sender_name }}</p>
    {% endif %}
    {% if stars %}
    <div class="stars" style="color: goldenrod; font-size: 1.25rem;">{{ stars }}</div>
    {% endif %}
    <h3 style="margin: 0; font-size: 1.25rem; color: #333;">{{ content }}</h3>
    <p style="margin: 8px 0 0 0; font-size: 0.875rem; color: #666;">{{ created_at }}</p>
  </div>
</div>
"#;

const COMPONENT_MARKUP_TEMPLATE: &str = r#"<div className="message-card" style={% raw %}{{ border: '1px solid #ccc', borderRadius: '8px', padding: '16px', backgroundColor: '#f9f9f9' }}{% endraw %}>
  <div className="card-header">
    {% if sender_name %}
    <p className="text-sm font-semibold">{{ sender_name }}</p>
    {% endif %}
    {% if stars %}
    <div className="stars" style={% raw %}{{ color: 'goldenrod', fontSize: '1.25rem' }}{% endraw %}>{{ stars }}</div>
    {% endif %}
    <h3 style={% raw %}{{ margin: 0, fontSize: '1.25rem', color: '#333' }}{% endraw %}>{{ content }}</h3>
    <p style={% raw %}{{ margin: '8px 0 0 0', fontSize: '0.875rem', color: '#666' }}{% endraw %}>{{ created_at }}</p>
  </div>
</div>
"#;

/// Errors raised while generating a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template engine failed to render.
    #[error("failed to render {format} template: {reason}")]
    Render {
        /// Format being rendered.
        format: TemplateFormat,
        /// Engine error description.
        reason: String,
    },
}

#[derive(Serialize)]
struct TemplateContext<'a> {
    sender_name: Option<&'a str>,
    stars: Option<String>,
    content: &'a str,
    created_at: String,
}

/// Renders `message` as a markup snippet in `format`.
///
/// Both formats share one conditional structure: the sender line appears
/// only with a sender name and the star row only with a rating. Output is
/// deterministic for a given message, format and formatter.
///
/// # Errors
///
/// Returns [`TemplateError::Render`] if the template engine fails.
///
/// # Examples
///
/// ```
/// use whisper::card::adapters::timestamp::PatternTimestampFormatter;
/// use whisper::card::domain::TemplateFormat;
/// use whisper::card::services::template::generate_template;
/// use whisper::message::domain::Message;
/// use mockable::DefaultClock;
///
/// let message = Message::builder("Hello there, this is a test")
///     .with_sender_name("Alice")
///     .build(&DefaultClock)
///     .expect("valid message");
/// let snippet = generate_template(
///     &message,
///     TemplateFormat::PlainMarkup,
///     &PatternTimestampFormatter::new(),
/// )
/// .expect("template renders");
///
/// assert!(snippet.contains(r#"<p class="text-sm font-semibold">Alice</p>"#));
/// assert!(!snippet.contains("stars"));
/// ```
pub fn generate_template(
    message: &Message,
    format: TemplateFormat,
    formatter: &impl TimestampFormatter,
) -> Result<String, TemplateError> {
    let context = TemplateContext {
        sender_name: message.sender_name(),
        stars: message.stars().map(|stars| stars.glyphs()),
        content: message.content(),
        created_at: formatter.format(message.created_at()),
    };

    template_environment()
        .render_str(template_source(format), context)
        .map_err(|error| TemplateError::Render {
            format,
            reason: error.to_string(),
        })
}

const fn template_source(format: TemplateFormat) -> &'static str {
    match format {
        TemplateFormat::PlainMarkup => PLAIN_MARKUP_TEMPLATE,
        TemplateFormat::ComponentMarkup => COMPONENT_MARKUP_TEMPLATE,
    }
}

fn template_environment() -> Environment<'static> {
    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    // Snippets are pasted as source; values are embedded verbatim.
    environment.set_auto_escape_callback(|_| AutoEscape::None);
    environment
}
