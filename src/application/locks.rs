//! Per-booking serialization of read-modify-write sequences.
//!
//! Mutating handlers hold the booking's lock across load, domain call and
//! store, so two commands against the same booking never interleave.
//! Different bookings proceed independently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::BookingId;

/// Registry of one async mutex per booking id.
///
/// Entries are created on first use and never removed, so the map grows
/// with the number of distinct bookings ever mutated. Bookings are never
/// deleted from the repository, which bounds it by the stored bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingLocks {
    locks: Arc<Mutex<HashMap<BookingId, Arc<Mutex<()>>>>>,
}

impl BookingLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `id`. Access ends when the guard drops.
    pub async fn acquire(&self, id: BookingId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(id).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of bookings that have been locked at least once.
    pub async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
