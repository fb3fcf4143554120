//! Discovery module - Locality search and buddy recommendation.
//!
//! Catalogs are immutable reference data passed in explicitly. The search
//! functions are pure and deterministic over their inputs.

mod budget;
mod buddy;
mod catalog;
mod errors;
mod locality;
mod locality_search;
mod recommendation;

pub use budget::BudgetCeiling;
pub use buddy::BuddyRecommendation;
pub use catalog::{BuddyCatalog, LocalityCatalog};
pub use errors::CatalogError;
pub use locality::{Locality, Zone};
pub use locality_search::{search_localities, LocalityQuery};
pub use recommendation::{recommend_buddies, RecommendationCriteria, MAX_RECOMMENDATIONS};
