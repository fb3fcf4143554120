//! Locality search over a catalog.

use super::{Locality, LocalityCatalog, Zone};

/// Filters for a locality search. Every active filter must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalityQuery {
    query: Option<String>,
    zone: Option<Zone>,
    district: Option<String>,
    metro_only: bool,
    popular_first: bool,
}

impl LocalityQuery {
    /// An empty query: matches every locality.
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text filter against name, zone or district. Blank text is ignored.
    pub fn text(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query.trim().to_lowercase())
        };
        self
    }

    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Exact, case-sensitive district filter. Blank text is ignored.
    pub fn district(mut self, district: impl Into<String>) -> Self {
        let district = district.into();
        self.district = (!district.trim().is_empty()).then_some(district);
        self
    }

    pub fn metro_only(mut self, metro_only: bool) -> Self {
        self.metro_only = metro_only;
        self
    }

    /// Moves popular localities ahead of the rest, keeping catalog order
    /// within each group.
    pub fn popular_first(mut self, popular_first: bool) -> Self {
        self.popular_first = popular_first;
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_none() && self.zone.is_none() && self.district.is_none() && !self.metro_only
    }

    /// Returns true if `locality` satisfies every active filter.
    pub fn matches(&self, locality: &Locality) -> bool {
        if let Some(needle) = &self.query {
            if !locality.matches_text(needle) {
                return false;
            }
        }
        if let Some(zone) = self.zone {
            if locality.zone != zone {
                return false;
            }
        }
        if let Some(district) = &self.district {
            if &locality.district != district {
                return false;
            }
        }
        !self.metro_only || locality.metro_connectivity
    }
}

/// Filters `catalog` by `query`.
///
/// Results keep catalog order unless `popular_first` is set, in which case
/// popular entries come first and ties keep catalog order.
pub fn search_localities<'a>(catalog: &'a LocalityCatalog, query: &LocalityQuery) -> Vec<&'a Locality> {
    let matched = catalog.iter().filter(|l| query.matches(l));
    if !query.popular_first {
        return matched.collect();
    }
    let (mut popular, rest): (Vec<_>, Vec<_>) = matched.partition(|l| l.popular);
    popular.extend(rest);
    popular
}
