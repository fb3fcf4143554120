//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Booking persistence (in-memory)
//! - `catalog` - Reference data sources (seeded, files)

pub mod catalog;
pub mod storage;

pub use catalog::{FileCatalogSource, SeededCatalogSource};
pub use storage::InMemoryBookingRepository;
