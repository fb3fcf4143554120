//! CreateBookingHandler - Command handler for booking a buddy.
//!
//! Creates a pending booking, optionally with planned milestones, and
//! stores it.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::booking::{Booking, BookingError, NewBooking, NewMilestone};
use crate::ports::BookingRepository;

use super::BookingUpdate;

/// Command to create a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub booking: NewBooking,
    /// Milestones planned up front, in order.
    pub milestones: Vec<NewMilestone>,
}

pub type CreateBookingResult = BookingUpdate;

/// Handler for creating bookings.
pub struct CreateBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateBookingCommand,
    ) -> Result<CreateBookingResult, BookingError> {
        let booking = Self::plan(cmd).map_err(|err| {
            warn!(error = %err, "Rejected booking request");
            err
        })?;

        let update = BookingUpdate::from_booking(booking);
        self.repository.save(&update.booking).await?;

        info!(
            booking_id = %update.booking.id(),
            finder_id = %update.booking.finder_id(),
            buddy_id = %update.booking.buddy_id(),
            milestones = update.booking.milestones().len(),
            "Booking created"
        );

        Ok(update)
    }

    fn plan(cmd: CreateBookingCommand) -> Result<Booking, BookingError> {
        let booking = Booking::create(cmd.booking)?;
        cmd.milestones
            .into_iter()
            .try_fold(booking, |booking, milestone| booking.add_milestone(milestone))
    }
}
