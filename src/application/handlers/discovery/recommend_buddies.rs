//! RecommendBuddiesHandler - Query handler for the finder welcome page.
//!
//! Turns raw finder preferences into recommendation criteria and ranks
//! buddies from the shared catalog snapshot.

use tracing::debug;

use crate::domain::discovery::{recommend_buddies, BuddyRecommendation, RecommendationCriteria};

use super::CatalogSnapshot;

/// Finder preferences as entered. Missing or blank fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct RecommendBuddiesQuery {
    pub city: Option<String>,
    /// Free-form range such as "₹2,000 - ₹5,000" or "₹10,000+".
    pub budget: Option<String>,
    pub language: Option<String>,
}

impl RecommendBuddiesQuery {
    pub fn criteria(&self) -> RecommendationCriteria {
        let mut criteria = RecommendationCriteria::new();
        if let Some(city) = &self.city {
            criteria = criteria.city(city.as_str());
        }
        if let Some(budget) = &self.budget {
            criteria = criteria.budget_range(budget);
        }
        if let Some(language) = &self.language {
            criteria = criteria.language(language.as_str());
        }
        criteria
    }
}

pub type RecommendBuddiesResult = Vec<BuddyRecommendation>;

pub struct RecommendBuddiesHandler {
    catalog: CatalogSnapshot,
}

impl RecommendBuddiesHandler {
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: &RecommendBuddiesQuery) -> RecommendBuddiesResult {
        let criteria = query.criteria();
        let picks: Vec<BuddyRecommendation> = recommend_buddies(self.catalog.buddies(), &criteria)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            city = query.city.as_deref().unwrap_or("-"),
            budget = ?criteria.budget(),
            language = query.language.as_deref().unwrap_or("-"),
            results = picks.len(),
            "Recommended buddies"
        );

        picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeededCatalogSource;
    use crate::domain::discovery::MAX_RECOMMENDATIONS;
    use crate::domain::foundation::Amount;

    async fn handler() -> RecommendBuddiesHandler {
        RecommendBuddiesHandler::new(
            CatalogSnapshot::load(&SeededCatalogSource::new()).await.unwrap(),
        )
    }

    fn ids(results: &[BuddyRecommendation]) -> Vec<&str> {
        results.iter().map(|b| b.id.as_str()).collect()
    }

    #[tokio::test]
    async fn delhi_top_four_in_catalog_tie_order() {
        let results = handler().await.handle(&RecommendBuddiesQuery {
            city: Some("delhi".to_string()),
            ..Default::default()
        });
        // Five Delhi buddies are rated 4.9; the first four in catalog order win.
        assert_eq!(ids(&results), vec!["1", "4", "7", "11"]);
    }

    #[tokio::test]
    async fn budget_range_caps_starting_price() {
        let results = handler().await.handle(&RecommendBuddiesQuery {
            city: Some("Delhi".to_string()),
            budget: Some("₹1,000 - ₹2,200".to_string()),
            language: None,
        });
        assert_eq!(ids(&results), vec!["3", "12", "13"]);
        assert!(results.iter().all(|b| b.starting_price <= Amount::new(2200)));
    }

    #[tokio::test]
    async fn language_and_city_combine() {
        let results = handler().await.handle(&RecommendBuddiesQuery {
            city: Some("Bangalore".to_string()),
            budget: None,
            language: Some("tamil".to_string()),
        });
        assert_eq!(ids(&results), vec!["101"]);
    }

    #[tokio::test]
    async fn unparseable_budget_applies_no_filter() {
        let results = handler().await.handle(&RecommendBuddiesQuery {
            budget: Some("flexible".to_string()),
            ..Default::default()
        });
        assert_eq!(results.len(), MAX_RECOMMENDATIONS);
    }
}
