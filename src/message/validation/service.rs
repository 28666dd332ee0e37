//! Validation service implementation.
//!
//! Provides the default implementation of the `SubmissionValidator` port,
//! combining individual validation rules into a form-level validator.

use crate::message::{
    domain::{MessageSubmission, StarRating, ValidSubmission},
    error::ValidationError,
    ports::validator::{SubmissionValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Default implementation of the submission validator.
///
/// Applies every rule, collecting errors to provide feedback on all fields at
/// once rather than failing on the first error.
///
/// # Examples
///
/// ```
/// use whisper::message::domain::MessageSubmission;
/// use whisper::message::ports::validator::SubmissionValidator;
/// use whisper::message::validation::service::DefaultSubmissionValidator;
///
/// let validator = DefaultSubmissionValidator::new();
/// let submission = MessageSubmission::new("Hello there, this is a test")
///     .with_sender_name("Alice")
///     .with_stars(4_i64);
///
/// let valid = validator.validate(&submission).expect("submission should pass");
/// assert_eq!(valid.sender_name(), Some("Alice"));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultSubmissionValidator {
    config: ValidationConfig,
}

impl DefaultSubmissionValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl Default for DefaultSubmissionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionValidator for DefaultSubmissionValidator {
    fn validate(&self, submission: &MessageSubmission) -> ValidationResult<ValidSubmission> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_content(&submission.content) {
            errors.push(e);
        }

        let stars = self.validate_stars(submission).unwrap_or_else(|e| {
            errors.push(e);
            None
        });

        if !errors.is_empty() {
            let error = ValidationError::multiple(errors);
            tracing::debug!(
                fields = ?error.field_errors().keys().collect::<Vec<_>>(),
                "submission rejected"
            );
            return Err(error);
        }

        Ok(ValidSubmission::new(
            submission.content.clone(),
            rules::normalize_sender_name(submission.sender_name.as_deref()),
            stars,
        ))
    }

    fn validate_content(&self, content: &str) -> ValidationResult<()> {
        rules::validate_content_length(content, &self.config)
    }

    fn validate_stars(
        &self,
        submission: &MessageSubmission,
    ) -> ValidationResult<Option<StarRating>> {
        rules::validate_stars(submission.stars.as_ref())
    }
}

// Note: Unit tests for DefaultSubmissionValidator are located in
// src/message/tests/validation_tests.rs with rstest fixtures.
