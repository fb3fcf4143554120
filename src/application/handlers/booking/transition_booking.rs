//! TransitionBookingHandler - Command handler for booking status changes.
//!
//! Accepting, starting, completing and cancelling all go through the
//! booking state machine. Illegal moves leave the stored booking untouched.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::BookingLocks;
use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, BookingStatus};
use crate::ports::BookingRepository;

use super::{load_booking, BookingUpdate};

/// Command to move a booking to a new status.
#[derive(Debug, Clone)]
pub struct TransitionBookingCommand {
    pub booking_id: BookingId,
    pub target: BookingStatus,
}

pub type TransitionBookingResult = BookingUpdate;

/// Handler for booking status transitions.
pub struct TransitionBookingHandler {
    repository: Arc<dyn BookingRepository>,
    locks: BookingLocks,
}

impl TransitionBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>, locks: BookingLocks) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: TransitionBookingCommand,
    ) -> Result<TransitionBookingResult, BookingError> {
        let _guard = self.locks.acquire(cmd.booking_id).await;

        let booking = load_booking(self.repository.as_ref(), cmd.booking_id).await?;
        let from = booking.status();

        let updated = booking.transition(cmd.target).map_err(|err| {
            warn!(
                booking_id = %cmd.booking_id,
                from = %from,
                to = %cmd.target,
                error = %err,
                "Rejected booking transition"
            );
            err
        })?;

        let update = BookingUpdate::from_booking(updated);
        self.repository.update(&update.booking).await?;

        info!(
            booking_id = %cmd.booking_id,
            from = %from,
            status = %update.booking.status(),
            "Booking status changed"
        );

        Ok(update)
    }
}
