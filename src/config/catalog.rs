//! Catalog source configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where locality and buddy reference data comes from.
///
/// With neither path set the built-in seeded catalog is used. Setting one
/// path requires the other.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Locality catalog file (`.json`, `.yaml` or `.yml`)
    pub localities_path: Option<PathBuf>,

    /// Buddy catalog file (`.json`, `.yaml` or `.yml`)
    pub buddies_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Both file paths, if file-backed catalogs are configured.
    pub fn file_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.localities_path, &self.buddies_path) {
            (Some(localities), Some(buddies)) => Some((localities.as_path(), buddies.as_path())),
            _ => None,
        }
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (&self.localities_path, &self.buddies_path) {
            (None, None) => Ok(()),
            (Some(_), None) => Err(ValidationError::MissingRequired("catalog.buddies_path")),
            (None, Some(_)) => Err(ValidationError::MissingRequired("catalog.localities_path")),
            (Some(localities), Some(buddies)) => {
                for path in [localities, buddies] {
                    if !path.exists() {
                        return Err(ValidationError::CatalogFileMissing(path.clone()));
                    }
                }
                Ok(())
            }
        }
    }
}
