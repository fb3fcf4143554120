//! CatalogSnapshot - Validated catalogs loaded once and shared read-only.

use std::sync::Arc;

use tracing::info;

use crate::domain::discovery::{BuddyCatalog, CatalogError, LocalityCatalog};
use crate::ports::CatalogSource;

/// Immutable locality and buddy catalogs. Cloning shares the data.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    localities: Arc<LocalityCatalog>,
    buddies: Arc<BuddyCatalog>,
}

impl CatalogSnapshot {
    /// Loads and validates both catalogs from `source`.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let localities = LocalityCatalog::new(source.load_localities().await?)?;
        let buddies = BuddyCatalog::new(source.load_buddies().await?)?;

        info!(
            source = %source.describe(),
            localities = localities.len(),
            buddies = buddies.len(),
            "Catalogs loaded"
        );

        Ok(Self::from_catalogs(localities, buddies))
    }

    pub fn from_catalogs(localities: LocalityCatalog, buddies: BuddyCatalog) -> Self {
        Self {
            localities: Arc::new(localities),
            buddies: Arc::new(buddies),
        }
    }

    pub fn localities(&self) -> &LocalityCatalog {
        &self.localities
    }

    pub fn buddies(&self) -> &BuddyCatalog {
        &self.buddies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeededCatalogSource;
    use crate::domain::discovery::{BuddyRecommendation, Locality};
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    struct UnreachableSource;

    #[async_trait]
    impl CatalogSource for UnreachableSource {
        async fn load_localities(&self) -> Result<Vec<Locality>, DomainError> {
            Err(DomainError::new(ErrorCode::CatalogUnavailable, "connection refused"))
        }

        async fn load_buddies(&self) -> Result<Vec<BuddyRecommendation>, DomainError> {
            Ok(vec![])
        }

        fn describe(&self) -> String {
            "unreachable".to_string()
        }
    }

    #[tokio::test]
    async fn loads_seeded_catalogs() {
        let snapshot = CatalogSnapshot::load(&SeededCatalogSource::new()).await.unwrap();
        assert_eq!(snapshot.localities().len(), 29);
        assert_eq!(snapshot.buddies().len(), 18);
    }

    #[tokio::test]
    async fn clones_share_catalogs() {
        let snapshot = CatalogSnapshot::load(&SeededCatalogSource::new()).await.unwrap();
        let copy = snapshot.clone();
        assert!(std::ptr::eq(snapshot.buddies(), copy.buddies()));
    }

    #[tokio::test]
    async fn source_failure_is_unavailable() {
        let err = CatalogSnapshot::load(&UnreachableSource).await.unwrap_err();
        assert_eq!(err, CatalogError::Unavailable("connection refused".to_string()));
    }
}
