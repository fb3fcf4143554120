//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `BookingRepository` - Booking persistence
//! - `CatalogSource` - Locality and buddy reference data

mod booking_repository;
mod catalog_source;

pub use booking_repository::BookingRepository;
pub use catalog_source::CatalogSource;
