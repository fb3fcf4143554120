//! Booking repository port.
//!
//! Defines the contract for persisting and retrieving Booking aggregates.
//! Implementations handle the actual storage.

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, BuddyId, DomainError, FinderId};
use async_trait::async_trait;

/// Repository port for Booking aggregate persistence.
///
/// Listings return bookings in the order they were first saved.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Save a new booking.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Replace an existing booking.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if the booking was never saved
    /// - `StorageError` on persistence failure
    async fn update(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Find a booking by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError>;

    /// All bookings made by a finder.
    async fn find_by_finder(&self, finder_id: &FinderId) -> Result<Vec<Booking>, DomainError>;

    /// All bookings addressed to a buddy.
    async fn find_by_buddy(&self, buddy_id: &BuddyId) -> Result<Vec<Booking>, DomainError>;
}
