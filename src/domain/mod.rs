//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `booking` - Booking aggregate, milestones, progress and dashboard views
//! - `discovery` - Locality and buddy catalogs, search and recommendation

pub mod booking;
pub mod discovery;
pub mod foundation;
