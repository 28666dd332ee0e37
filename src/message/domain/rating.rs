//! Star rating attached to a message.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Glyph used when a rating is displayed as a row of stars.
pub const STAR_GLYPH: char = '★';

/// A star rating between [`StarRating::MIN`] and [`StarRating::MAX`].
///
/// Absence of a rating is expressed with `Option<StarRating>`; zero is not a
/// valid rating.
///
/// # Examples
///
/// ```
/// use whisper::message::domain::StarRating;
///
/// let rating = StarRating::new(3).expect("3 is within range");
/// assert_eq!(rating.value(), 3);
/// assert_eq!(rating.glyphs(), "★★★");
/// assert!(StarRating::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Creates a rating, rejecting values outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`StarRatingError::OutOfRange`] for values outside the range.
    pub const fn new(value: u8) -> Result<Self, StarRatingError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(StarRatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the number of stars.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the rating as a string of repeated star glyphs.
    #[must_use]
    pub fn glyphs(self) -> String {
        std::iter::repeat_n(STAR_GLYPH, usize::from(self.0)).collect()
    }
}

impl TryFrom<u8> for StarRating {
    type Error = StarRatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when constructing a [`StarRating`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StarRatingError {
    /// The value lies outside `1..=5`.
    #[error("star rating {0} is outside the range 1 to 5")]
    OutOfRange(u8),
}
