//! Validator port for message submissions.
//!
//! Defines the abstract interface for checking a candidate submission before
//! it is accepted into the system.

use crate::message::{
    domain::{MessageSubmission, StarRating, ValidSubmission},
    error::ValidationError,
};
use serde::Deserialize;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for submission validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all field errors before returning (not fail-fast)
/// - Use `ValidationError::multiple` to combine errors
/// - Be stateless and free of side effects
pub trait SubmissionValidator: Send + Sync {
    /// Validates a submission against every rule and normalises it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails. Failures on different
    /// fields are combined using `ValidationError::Multiple`.
    fn validate(&self, submission: &MessageSubmission) -> ValidationResult<ValidSubmission>;

    /// Validates only the message text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the content length is out of bounds.
    fn validate_content(&self, content: &str) -> ValidationResult<()>;

    /// Validates and parses the optional star rating.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the rating is not a whole number within
    /// the configured range.
    fn validate_stars(
        &self,
        submission: &MessageSubmission,
    ) -> ValidationResult<Option<StarRating>>;
}

/// Configuration for validation rules.
///
/// Star ratings are always bounded by [`StarRating::MIN`] and
/// [`StarRating::MAX`]; only the content bounds are configurable.
///
/// # Examples
///
/// ```
/// use whisper::message::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_content_chars, 10);
/// assert_eq!(config.max_content_chars, 300);
///
/// let lenient = ValidationConfig::lenient();
/// assert_eq!(lenient.min_content_chars, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum content length in characters.
    pub min_content_chars: usize,
    /// Maximum content length in characters.
    pub max_content_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_content_chars: 10,
            max_content_chars: 300,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration that accepts any non-empty content.
    ///
    /// Useful for short replies or tests.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            min_content_chars: 1,
            ..Default::default()
        }
    }
}
