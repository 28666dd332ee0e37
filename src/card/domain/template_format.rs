//! Template formats offered by the copy-template dialog.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Markup syntax used when exporting a message card as a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateFormat {
    /// Plain HTML markup with inline `style` attributes.
    #[default]
    PlainMarkup,
    /// Component (JSX) markup with `className` and style objects.
    ComponentMarkup,
}

impl TemplateFormat {
    /// All formats, in the order the dialog offers them.
    pub const ALL: [Self; 2] = [Self::PlainMarkup, Self::ComponentMarkup];

    /// Returns the short name used by UI toggles (`html` or `react`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainMarkup => "html",
            Self::ComponentMarkup => "react",
        }
    }

    /// Returns the label shown in notifications (`HTML` or `REACT`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlainMarkup => "HTML",
            Self::ComponentMarkup => "REACT",
        }
    }
}

impl TryFrom<&str> for TemplateFormat {
    type Error = ParseTemplateFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "html" | "plain_markup" => Ok(Self::PlainMarkup),
            "react" | "component_markup" => Ok(Self::ComponentMarkup),
            _ => Err(ParseTemplateFormatError(value.to_owned())),
        }
    }
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a template format name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown template format: {0}")]
pub struct ParseTemplateFormatError(pub String);
