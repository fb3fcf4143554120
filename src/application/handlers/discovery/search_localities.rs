//! SearchLocalitiesHandler - Query handler for the locality search page.

use tracing::debug;

use crate::domain::discovery::{search_localities, Locality, LocalityQuery, Zone};

use super::CatalogSnapshot;

/// Locality search filters. Every supplied filter must match.
#[derive(Debug, Clone, Default)]
pub struct SearchLocalitiesQuery {
    pub text: Option<String>,
    pub zone: Option<Zone>,
    pub district: Option<String>,
    pub metro_only: bool,
    pub popular_first: bool,
}

impl SearchLocalitiesQuery {
    pub fn to_locality_query(&self) -> LocalityQuery {
        let mut query = LocalityQuery::new()
            .metro_only(self.metro_only)
            .popular_first(self.popular_first);
        if let Some(text) = &self.text {
            query = query.text(text.as_str());
        }
        if let Some(zone) = self.zone {
            query = query.zone(zone);
        }
        if let Some(district) = &self.district {
            query = query.district(district.as_str());
        }
        query
    }
}

pub type SearchLocalitiesResult = Vec<Locality>;

pub struct SearchLocalitiesHandler {
    catalog: CatalogSnapshot,
}

impl SearchLocalitiesHandler {
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: &SearchLocalitiesQuery) -> SearchLocalitiesResult {
        let matches: Vec<Locality> =
            search_localities(self.catalog.localities(), &query.to_locality_query())
                .into_iter()
                .cloned()
                .collect();

        debug!(
            text = query.text.as_deref().unwrap_or("-"),
            zone = ?query.zone,
            metro_only = query.metro_only,
            results = matches.len(),
            "Searched localities"
        );

        matches
    }
}
