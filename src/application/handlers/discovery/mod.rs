//! Discovery query handlers.
//!
//! Both handlers read from a [`CatalogSnapshot`] loaded once at startup,
//! so they need no locking and perform no I/O.

mod catalog_snapshot;
mod recommend_buddies;
mod search_localities;

pub use catalog_snapshot::CatalogSnapshot;
pub use recommend_buddies::{RecommendBuddiesHandler, RecommendBuddiesQuery, RecommendBuddiesResult};
pub use search_localities::{SearchLocalitiesHandler, SearchLocalitiesQuery, SearchLocalitiesResult};
