//! Catalog Adapters
//!
//! Implementations of the CatalogSource port.
//!
//! - **SeededCatalogSource** - Built-in Delhi dataset
//! - **FileCatalogSource** - JSON or YAML files on disk

mod file_catalog_source;
mod seeded_catalog_source;

pub use file_catalog_source::FileCatalogSource;
pub use seeded_catalog_source::SeededCatalogSource;
