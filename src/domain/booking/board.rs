//! Dashboard views over a set of bookings.
//!
//! `BookingBoard` buckets bookings by status for the finder and buddy
//! dashboards. `BuddyStats` computes the buddy's headline numbers.

use serde::Serialize;

use crate::domain::foundation::{Amount, BookingStatus};

use super::Booking;

/// Bookings grouped by lifecycle stage, each group in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingBoard {
    pub upcoming: Vec<Booking>,
    pub accepted: Vec<Booking>,
    pub active: Vec<Booking>,
    pub past: Vec<Booking>,
    pub cancelled: Vec<Booking>,
}

impl BookingBoard {
    pub fn from_bookings(bookings: impl IntoIterator<Item = Booking>) -> Self {
        let mut board = Self::default();
        for booking in bookings {
            let bucket = match booking.status() {
                BookingStatus::Pending => &mut board.upcoming,
                BookingStatus::Accepted => &mut board.accepted,
                BookingStatus::InProgress => &mut board.active,
                BookingStatus::Completed => &mut board.past,
                BookingStatus::Cancelled => &mut board.cancelled,
            };
            bucket.push(booking);
        }
        board
    }

    pub fn len(&self) -> usize {
        self.upcoming.len()
            + self.accepted.len()
            + self.active.len()
            + self.past.len()
            + self.cancelled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Headline numbers for a buddy's dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuddyStats {
    pub active_bookings: usize,
    pub pending_requests: usize,
    pub completed_bookings: usize,
    pub total_earnings: Amount,
    /// Percent of decided requests that were accepted, rounded down.
    /// `None` until at least one request has left `pending`.
    pub acceptance_rate: Option<u8>,
}

impl BuddyStats {
    pub fn from_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        let mut stats = Self::default();
        let mut decided = 0usize;
        let mut accepted = 0usize;

        for booking in bookings {
            match booking.status() {
                BookingStatus::Pending => stats.pending_requests += 1,
                BookingStatus::InProgress => stats.active_bookings += 1,
                BookingStatus::Completed => {
                    stats.completed_bookings += 1;
                    stats.total_earnings = stats.total_earnings.saturating_add(booking.amount());
                }
                BookingStatus::Accepted | BookingStatus::Cancelled => {}
            }
            if booking.status() != BookingStatus::Pending {
                decided += 1;
                if booking.accepted_at().is_some() {
                    accepted += 1;
                }
            }
        }

        if decided > 0 {
            stats.acceptance_rate = Some(((accepted * 100) / decided) as u8);
        }
        stats
    }
}
