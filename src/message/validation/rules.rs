//! Individual validation rule implementations.
//!
//! Each rule is implemented as a pure function that validates one field of a
//! submission. Rules return `Ok` on success or a specific `ValidationError`
//! on failure.

use crate::message::{
    domain::{StarRating, StarsInput, non_blank},
    error::ValidationError,
    ports::validator::ValidationConfig,
};

/// Validates that the content length lies within the configured bounds.
///
/// Length is measured in Unicode scalar values, so an emoji counts once.
///
/// # Errors
///
/// Returns `ValidationError::ContentTooShort` or
/// `ValidationError::ContentTooLong` when the length is out of bounds.
///
/// # Examples
///
/// ```
/// use whisper::message::ports::validator::ValidationConfig;
/// use whisper::message::validation::rules::validate_content_length;
///
/// let config = ValidationConfig::default();
/// assert!(validate_content_length("Hello there, this is a test", &config).is_ok());
/// assert!(validate_content_length("short", &config).is_err());
/// ```
pub fn validate_content_length(
    content: &str,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let actual = content.chars().count();
    if actual < config.min_content_chars {
        return Err(ValidationError::ContentTooShort {
            min: config.min_content_chars,
            actual,
        });
    }
    if actual > config.max_content_chars {
        return Err(ValidationError::ContentTooLong {
            max: config.max_content_chars,
            actual,
        });
    }
    Ok(())
}

/// Normalises the optional sender name.
///
/// Any text is accepted; blank names are treated as absent.
#[must_use]
pub fn normalize_sender_name(sender_name: Option<&str>) -> Option<String> {
    non_blank(sender_name.map(str::to_owned))
}

/// Parses and range-checks the optional star rating.
///
/// Text input is trimmed before parsing; empty text counts as no rating.
///
/// # Errors
///
/// Returns `ValidationError::InvalidStars` for text that is not a whole
/// number and `ValidationError::StarsOutOfRange` for values outside `1..=5`.
pub fn validate_stars(stars: Option<&StarsInput>) -> Result<Option<StarRating>, ValidationError> {
    let Some(input) = stars else {
        return Ok(None);
    };

    let value = match input {
        StarsInput::Number(value) => *value,
        StarsInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidStars(text.clone()))?
        }
    };

    u8::try_from(value)
        .ok()
        .and_then(|stars| StarRating::new(stars).ok())
        .map(Some)
        .ok_or(ValidationError::StarsOutOfRange {
            min: StarRating::MIN,
            max: StarRating::MAX,
            actual: value,
        })
}
