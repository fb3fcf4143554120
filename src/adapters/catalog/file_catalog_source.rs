//! File-based Catalog Source Adapter
//!
//! Reads locality and buddy catalogs from JSON or YAML files. The format
//! is chosen by file extension (`.json`, `.yaml`, `.yml`).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::discovery::{BuddyRecommendation, Locality};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CatalogSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, DomainError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => Err(DomainError::new(
                ErrorCode::CatalogInvalid,
                format!("unsupported catalog file type: {}", path.display()),
            )),
        }
    }
}

/// Catalog source backed by two files on disk
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    localities_path: PathBuf,
    buddies_path: PathBuf,
}

impl FileCatalogSource {
    /// Create a file source
    ///
    /// # Example
    /// ```ignore
    /// let source = FileCatalogSource::new("./data/localities.yaml", "./data/buddies.json");
    /// ```
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(localities_path: P, buddies_path: Q) -> Self {
        Self {
            localities_path: localities_path.as_ref().to_path_buf(),
            buddies_path: buddies_path.as_ref().to_path_buf(),
        }
    }

    async fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DomainError> {
        let format = Format::from_path(path)?;

        let raw = fs::read_to_string(path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::CatalogUnavailable,
                format!("cannot read {}: {}", path.display(), e),
            )
        })?;

        let decoded = match format {
            Format::Json => serde_json::from_str(&raw).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(&raw).map_err(|e| e.to_string()),
        };

        decoded.map_err(|reason| {
            DomainError::new(
                ErrorCode::CatalogInvalid,
                format!("cannot decode {}: {}", path.display(), reason),
            )
        })
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load_localities(&self) -> Result<Vec<Locality>, DomainError> {
        Self::read(&self.localities_path).await
    }

    async fn load_buddies(&self) -> Result<Vec<BuddyRecommendation>, DomainError> {
        Self::read(&self.buddies_path).await
    }

    fn describe(&self) -> String {
        format!(
            "files({}, {})",
            self.localities_path.display(),
            self.buddies_path.display()
        )
    }
}
