//! Catalog source port.
//!
//! Supplies the locality and buddy reference data. Sources are read once
//! at startup; the loaded catalogs are immutable afterwards.

use crate::domain::discovery::{BuddyRecommendation, Locality};
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Port for loading reference catalogs.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every locality, in source order.
    ///
    /// # Errors
    ///
    /// - `CatalogUnavailable` if the source cannot be read
    /// - `CatalogInvalid` if the data cannot be decoded
    async fn load_localities(&self) -> Result<Vec<Locality>, DomainError>;

    /// Load every buddy, in source order.
    ///
    /// # Errors
    ///
    /// - `CatalogUnavailable` if the source cannot be read
    /// - `CatalogInvalid` if the data cannot be decoded
    async fn load_buddies(&self) -> Result<Vec<BuddyRecommendation>, DomainError>;

    /// Short description for logs ("seeded", a file path).
    fn describe(&self) -> String;
}
