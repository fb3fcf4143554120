//! Built-in Delhi catalog, compiled into the binary.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::discovery::{BuddyRecommendation, Locality};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CatalogSource;

const LOCALITIES_JSON: &str = include_str!("../../../data/delhi_localities.json");
const BUDDIES_JSON: &str = include_str!("../../../data/buddies.json");

/// Serves the seeded localities and buddies shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededCatalogSource;

impl SeededCatalogSource {
    pub fn new() -> Self {
        Self
    }

    fn decode<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>, DomainError> {
        serde_json::from_str(raw).map_err(|e| {
            DomainError::new(
                ErrorCode::CatalogInvalid,
                format!("seeded {} data is malformed: {}", name, e),
            )
        })
    }
}

#[async_trait]
impl CatalogSource for SeededCatalogSource {
    async fn load_localities(&self) -> Result<Vec<Locality>, DomainError> {
        Self::decode("locality", LOCALITIES_JSON)
    }

    async fn load_buddies(&self) -> Result<Vec<BuddyRecommendation>, DomainError> {
        Self::decode("buddy", BUDDIES_JSON)
    }

    fn describe(&self) -> String {
        "seeded".to_string()
    }
}
