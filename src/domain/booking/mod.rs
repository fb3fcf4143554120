//! Booking module - Finder/buddy engagement lifecycle.
//!
//! A Booking moves through `pending -> accepted -> in-progress` and ends
//! either `completed` or `cancelled`. Bookings own an ordered list of
//! milestones whose completion drives progress.

mod aggregate;
mod board;
mod errors;
mod events;
mod milestone;
mod progress;

pub use aggregate::{Booking, BookingRecord, NewBooking};
pub use board::{BookingBoard, BuddyStats};
pub use errors::BookingError;
pub use events::BookingEvent;
pub use milestone::{Milestone, NewMilestone};
pub use progress::{BookingProgress, ProgressSummary};
