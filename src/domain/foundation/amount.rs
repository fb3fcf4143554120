//! Amount value object for monetary values in whole rupees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

use super::ValidationError;

/// A non-negative monetary value in whole rupees.
///
/// Values never exceed `i64::MAX`, so the signed wire form is lossless.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(u64);

impl Amount {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(i64::MAX as u64);

    /// Creates an Amount from an unsigned value, clamped to `Amount::MAX`.
    pub const fn new(rupees: u64) -> Self {
        if rupees > Self::MAX.0 {
            Self::MAX
        } else {
            Self(rupees)
        }
    }

    /// Creates an Amount, returning error if negative.
    pub fn try_new(rupees: i64) -> Result<Self, ValidationError> {
        u64::try_from(rupees)
            .map(Self)
            .map_err(|_| ValidationError::out_of_range("amount", 0, i64::MAX, rupees))
    }

    /// Returns the value in rupees.
    pub fn rupees(&self) -> u64 {
        self.0
    }

    /// Adds two amounts, saturating at the maximum representable value.
    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount::new(self.0.saturating_add(other.0))
    }
}

impl TryFrom<i64> for Amount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        i64::try_from(amount.0).unwrap_or(i64::MAX)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Amount::saturating_add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}
