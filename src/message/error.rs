//! Error types for message submission validation.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers. Each variant maps to one form field so
//! the UI can show messages next to the offending input.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionField {
    /// The message text.
    Content,
    /// The optional sender name.
    SenderName,
    /// The optional star rating.
    Stars,
}

impl SubmissionField {
    /// Returns the field name as used by submission payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::SenderName => "senderName",
            Self::Stars => "stars",
        }
    }
}

impl fmt::Display for SubmissionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during submission validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The content is shorter than the configured minimum.
    #[error("Content must be at least {min} characters.")]
    ContentTooShort {
        /// Minimum number of characters.
        min: usize,
        /// Actual number of characters.
        actual: usize,
    },

    /// The content is longer than the configured maximum.
    #[error("Content must not be longer than {max} characters.")]
    ContentTooLong {
        /// Maximum number of characters.
        max: usize,
        /// Actual number of characters.
        actual: usize,
    },

    /// The star rating could not be read as a whole number.
    #[error("Stars must be a whole number.")]
    InvalidStars(String),

    /// The star rating lies outside the accepted range.
    #[error("Stars must be between {min} and {max}.")]
    StarsOutOfRange {
        /// Lowest accepted value.
        min: u8,
        /// Highest accepted value.
        max: u8,
        /// The submitted value.
        actual: i64,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines multiple validation errors into a single error.
    ///
    /// If only one error is provided, returns it directly rather than wrapping.
    /// Nested `Multiple` values are flattened.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this indicates
    /// a logic error in the caller. In release builds, returns an empty
    /// `Multiple`.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        let mut flat: Vec<Self> = errors.into_iter().flat_map(Self::into_errors).collect();
        debug_assert!(!flat.is_empty(), "multiple() called with empty errors vector");
        if flat.len() == 1 {
            if let Some(single) = flat.pop() {
                return single;
            }
        }
        Self::Multiple(flat)
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns the form field this error belongs to.
    ///
    /// `Multiple` spans several fields and returns `None`.
    #[must_use]
    pub const fn field(&self) -> Option<SubmissionField> {
        match self {
            Self::ContentTooShort { .. } | Self::ContentTooLong { .. } => {
                Some(SubmissionField::Content)
            }
            Self::InvalidStars(_) | Self::StarsOutOfRange { .. } => Some(SubmissionField::Stars),
            Self::Multiple(_) => None,
        }
    }

    /// Returns one human-readable message per violated field.
    ///
    /// When a field has several violations the first one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use whisper::message::error::{SubmissionField, ValidationError};
    ///
    /// let error = ValidationError::ContentTooShort { min: 10, actual: 5 };
    /// let fields = error.field_errors();
    /// assert_eq!(
    ///     fields.get(&SubmissionField::Content).map(String::as_str),
    ///     Some("Content must be at least 10 characters."),
    /// );
    /// ```
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<SubmissionField, String> {
        let mut fields = BTreeMap::new();
        self.collect_field_errors(&mut fields);
        fields
    }

    fn collect_field_errors(&self, fields: &mut BTreeMap<SubmissionField, String>) {
        if let Self::Multiple(errors) = self {
            for error in errors {
                error.collect_field_errors(fields);
            }
        } else if let Some(field) = self.field() {
            fields.entry(field).or_insert_with(|| self.to_string());
        }
    }

    fn into_errors(self) -> Vec<Self> {
        match self {
            Self::Multiple(inner) => inner,
            other => vec![other],
        }
    }
}
