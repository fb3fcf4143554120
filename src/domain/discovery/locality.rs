//! Locality reference data and the Delhi zone vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{LocalityId, ValidationError};

/// Coarse geographic grouping of localities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    North,
    South,
    East,
    West,
    Central,
    #[serde(rename = "New Delhi")]
    NewDelhi,
    #[serde(rename = "North East")]
    NorthEast,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "South West")]
    SouthWest,
    #[serde(rename = "South East")]
    SouthEast,
}

impl Zone {
    const ALL: [Zone; 10] = [
        Zone::North,
        Zone::South,
        Zone::East,
        Zone::West,
        Zone::Central,
        Zone::NewDelhi,
        Zone::NorthEast,
        Zone::NorthWest,
        Zone::SouthWest,
        Zone::SouthEast,
    ];

    /// All zones in canonical order.
    pub fn all() -> &'static [Zone] {
        &Self::ALL
    }

    /// Short label as stored on a locality ("South", "North East").
    pub fn label(&self) -> &'static str {
        match self {
            Zone::North => "North",
            Zone::South => "South",
            Zone::East => "East",
            Zone::West => "West",
            Zone::Central => "Central",
            Zone::NewDelhi => "New Delhi",
            Zone::NorthEast => "North East",
            Zone::NorthWest => "North West",
            Zone::SouthWest => "South West",
            Zone::SouthEast => "South East",
        }
    }

    /// Display name of the region ("South Delhi").
    pub fn region_name(&self) -> &'static str {
        match self {
            Zone::North => "North Delhi",
            Zone::South => "South Delhi",
            Zone::East => "East Delhi",
            Zone::West => "West Delhi",
            Zone::Central => "Central Delhi",
            Zone::NewDelhi => "New Delhi",
            Zone::NorthEast => "North East Delhi",
            Zone::NorthWest => "North West Delhi",
            Zone::SouthWest => "South West Delhi",
            Zone::SouthEast => "South East Delhi",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = ValidationError;

    /// Accepts either the label or the region name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|zone| {
                zone.label().eq_ignore_ascii_case(wanted)
                    || zone.region_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ValidationError::invalid_format("zone", format!("unknown zone '{}'", s)))
    }
}

/// A named geographic sub-area used for search and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locality {
    pub id: LocalityId,
    pub name: String,
    pub zone: Zone,
    pub district: String,
    /// Display-only range such as "₹25,000 - ₹50,000".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_rent: Option<String>,
    pub postal_codes: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub metro_connectivity: bool,
}

impl Locality {
    /// Case-insensitive substring match against name, zone or district.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.zone.label().to_lowercase().contains(needle)
            || self.district.to_lowercase().contains(needle)
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|a| a.eq_ignore_ascii_case(amenity))
    }
}
