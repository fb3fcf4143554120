//! StarRating value object for buddy reviews (0 to 5 stars).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::ValidationError;

/// Average review score of a buddy, between 0.0 and 5.0 inclusive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct StarRating(f32);

impl StarRating {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 5.0;

    /// Creates a StarRating, returning error if out of range or NaN.
    pub fn try_new(value: f32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl PartialEq for StarRating {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for StarRating {}

impl PartialOrd for StarRating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StarRating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f32> for StarRating {
    type Error = ValidationError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<StarRating> for f32 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
