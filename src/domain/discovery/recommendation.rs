//! Buddy recommendation - filter, rank and truncate.
//!
//! Filters combine with AND. Survivors are ranked by rating, highest
//! first; equal ratings keep catalog order. At most
//! [`MAX_RECOMMENDATIONS`] entries are returned and results are never
//! padded. With no criteria the call acts as "browse": the whole catalog,
//! ranked and truncated.

use super::{BudgetCeiling, BuddyCatalog, BuddyRecommendation};
use crate::domain::foundation::Amount;

/// Upper bound on the number of buddies returned by [`recommend_buddies`].
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Finder preferences used to pick buddies. Blank strings are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationCriteria {
    city: Option<String>,
    budget: Option<BudgetCeiling>,
    language: Option<String>,
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl RecommendationCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = non_blank(city.into());
        self
    }

    pub fn max_budget(mut self, max: Amount) -> Self {
        self.budget = Some(BudgetCeiling::UpTo(max));
        self
    }

    /// Sets the budget from a free-form range string such as
    /// "₹2,000 - ₹5,000". Unparseable text leaves the budget unset.
    pub fn budget_range(mut self, range: &str) -> Self {
        self.budget = BudgetCeiling::parse_lenient(range);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = non_blank(language.into());
        self
    }

    pub fn budget(&self) -> Option<BudgetCeiling> {
        self.budget
    }

    pub fn is_browse(&self) -> bool {
        self.city.is_none() && self.budget.is_none() && self.language.is_none()
    }

    /// Returns true if `buddy` satisfies every active criterion.
    pub fn matches(&self, buddy: &BuddyRecommendation) -> bool {
        if let Some(city) = &self.city {
            if !buddy.is_in_city(city) {
                return false;
            }
        }
        if let Some(budget) = self.budget {
            if !budget.admits(buddy.starting_price) {
                return false;
            }
        }
        match &self.language {
            Some(language) => buddy.speaks(language),
            None => true,
        }
    }
}

/// Picks up to [`MAX_RECOMMENDATIONS`] buddies for `criteria`.
pub fn recommend_buddies<'a>(
    catalog: &'a BuddyCatalog,
    criteria: &RecommendationCriteria,
) -> Vec<&'a BuddyRecommendation> {
    let mut ranked: Vec<_> = catalog.iter().filter(|b| criteria.matches(b)).collect();
    // `sort_by` is stable, so equal ratings keep catalog order.
    ranked.sort_by(|a, b| b.rating.cmp(&a.rating));
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}
