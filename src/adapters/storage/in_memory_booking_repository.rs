//! In-Memory Booking Repository Adapter
//!
//! Stores bookings in memory. Useful for testing, development and the
//! demo binary.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, BuddyId, DomainError, ErrorCode, FinderId};
use crate::ports::BookingRepository;

#[derive(Debug, Default)]
struct Store {
    bookings: HashMap<BookingId, Booking>,
    /// First-save order, used for listings.
    order: Vec<BookingId>,
}

/// Stored copy without pending domain events, which are never persisted.
fn stored_copy(booking: &Booking) -> Booking {
    let mut copy = booking.clone();
    copy.take_events();
    copy
}

impl Store {
    fn ordered(&self, mut keep: impl FnMut(&Booking) -> bool) -> Vec<Booking> {
        self.order
            .iter()
            .filter_map(|id| self.bookings.get(id))
            .filter(|b| keep(b))
            .cloned()
            .collect()
    }
}

/// In-memory storage for bookings
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryBookingRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored bookings
    pub async fn count(&self) -> usize {
        self.store.read().await.bookings.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.bookings.clear();
        store.order.clear();
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        if store.bookings.insert(booking.id(), stored_copy(booking)).is_none() {
            store.order.push(booking.id());
        }
        Ok(())
    }

    async fn update(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        match store.bookings.get_mut(&booking.id()) {
            Some(existing) => {
                *existing = stored_copy(booking);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking.id()),
            )
            .with_detail("booking_id", booking.id().to_string())),
        }
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        Ok(self.store.read().await.bookings.get(id).cloned())
    }

    async fn find_by_finder(&self, finder_id: &FinderId) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .store
            .read()
            .await
            .ordered(|b| b.finder_id() == finder_id))
    }

    async fn find_by_buddy(&self, buddy_id: &BuddyId) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .store
            .read()
            .await
            .ordered(|b| b.buddy_id() == buddy_id))
    }
}
