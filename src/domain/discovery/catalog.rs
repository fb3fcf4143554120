//! Validated, read-only catalogs of localities and buddies.
//!
//! Catalogs are built once from reference data and then shared. Lookups
//! and helper views never reorder entries: catalog order is the order the
//! source supplied.

use std::collections::{BTreeSet, HashSet};

use super::{BuddyRecommendation, CatalogError, Locality, Zone};

/// All known localities, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalityCatalog {
    localities: Vec<Locality>,
}

impl LocalityCatalog {
    /// Validates and wraps locality reference data.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if two entries share an id
    /// - `EmptyField` if a name or district is blank
    /// - `MissingPostalCode` if an entry lists no postal code
    pub fn new(localities: Vec<Locality>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for loc in &localities {
            let id = loc.id.as_str();
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId {
                    kind: "locality",
                    id: id.to_string(),
                });
            }
            if loc.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    kind: "locality",
                    id: id.to_string(),
                    field: "name",
                });
            }
            if loc.district.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    kind: "locality",
                    id: id.to_string(),
                    field: "district",
                });
            }
            if loc.postal_codes.iter().all(|p| p.trim().is_empty()) {
                return Err(CatalogError::MissingPostalCode { id: id.to_string() });
            }
        }
        Ok(Self { localities })
    }

    pub fn all(&self) -> &[Locality] {
        &self.localities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locality> {
        self.localities.iter()
    }

    pub fn len(&self) -> usize {
        self.localities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.localities.is_empty()
    }

    /// Featured localities.
    pub fn popular(&self) -> Vec<&Locality> {
        self.iter().filter(|l| l.popular).collect()
    }

    pub fn in_zone(&self, zone: Zone) -> Vec<&Locality> {
        self.iter().filter(|l| l.zone == zone).collect()
    }

    pub fn metro_connected(&self) -> Vec<&Locality> {
        self.iter().filter(|l| l.metro_connectivity).collect()
    }

    pub fn find(&self, id: &str) -> Option<&Locality> {
        self.iter().find(|l| l.id.as_str() == id)
    }

    /// Distinct district names, sorted.
    pub fn districts(&self) -> Vec<&str> {
        self.iter()
            .map(|l| l.district.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// All listed buddies, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuddyCatalog {
    buddies: Vec<BuddyRecommendation>,
}

impl BuddyCatalog {
    /// Validates and wraps buddy reference data.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if two entries share an id
    /// - `EmptyField` if a name or city is blank
    pub fn new(buddies: Vec<BuddyRecommendation>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for buddy in &buddies {
            let id = buddy.id.as_str();
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId {
                    kind: "buddy",
                    id: id.to_string(),
                });
            }
            for (field, value) in [("name", &buddy.name), ("city", &buddy.city)] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyField {
                        kind: "buddy",
                        id: id.to_string(),
                        field,
                    });
                }
            }
        }
        Ok(Self { buddies })
    }

    pub fn all(&self) -> &[BuddyRecommendation] {
        &self.buddies
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuddyRecommendation> {
        self.buddies.iter()
    }

    pub fn len(&self) -> usize {
        self.buddies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buddies.is_empty()
    }

    /// Every buddy in `city` (case-insensitive), unranked.
    pub fn in_city(&self, city: &str) -> Vec<&BuddyRecommendation> {
        self.iter().filter(|b| b.is_in_city(city)).collect()
    }

    pub fn find(&self, id: &str) -> Option<&BuddyRecommendation> {
        self.iter().find(|b| b.id.as_str() == id)
    }

    /// Distinct city names, sorted.
    pub fn cities(&self) -> Vec<&str> {
        self.iter()
            .map(|b| b.city.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
