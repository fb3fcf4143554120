//! Booking command and query handlers.
//!
//! Mutating handlers serialize on the booking id through [`BookingLocks`]
//! and persist the new booking value returned by the domain.
//!
//! [`BookingLocks`]: crate::application::BookingLocks

use crate::domain::booking::{Booking, BookingError, BookingEvent};
use crate::domain::foundation::BookingId;
use crate::ports::BookingRepository;

// Command handlers
mod add_milestone;
mod complete_milestone;
mod create_booking;
mod start_milestone;
mod transition_booking;

// Query handlers
mod get_booking;
mod get_booking_board;

pub use add_milestone::{AddMilestoneCommand, AddMilestoneHandler, AddMilestoneResult};
pub use complete_milestone::{
    CompleteMilestoneCommand, CompleteMilestoneHandler, CompleteMilestoneResult,
};
pub use create_booking::{CreateBookingCommand, CreateBookingHandler, CreateBookingResult};
pub use get_booking::{GetBookingHandler, GetBookingQuery, GetBookingResult};
pub use get_booking_board::{GetBookingBoardHandler, GetBookingBoardQuery, GetBookingBoardResult};
pub use start_milestone::{StartMilestoneCommand, StartMilestoneHandler, StartMilestoneResult};
pub use transition_booking::{
    TransitionBookingCommand, TransitionBookingHandler, TransitionBookingResult,
};

/// Outcome of a successful booking mutation.
#[derive(Debug, Clone)]
pub struct BookingUpdate {
    /// The booking as stored after the change.
    pub booking: Booking,
    /// Domain events raised by the change.
    pub events: Vec<BookingEvent>,
}

impl BookingUpdate {
    fn from_booking(mut booking: Booking) -> Self {
        let events = booking.take_events();
        Self { booking, events }
    }
}

async fn load_booking(
    repository: &dyn BookingRepository,
    id: BookingId,
) -> Result<Booking, BookingError> {
    repository
        .find_by_id(&id)
        .await?
        .ok_or(BookingError::BookingNotFound(id))
}
