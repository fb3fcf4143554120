//! GetBookingHandler - Query handler for a single booking with progress.

use std::sync::Arc;

use tracing::debug;

use crate::domain::booking::{Booking, BookingError, ProgressSummary};
use crate::domain::foundation::BookingId;
use crate::ports::BookingRepository;

use super::load_booking;

/// Query to get a booking by ID.
#[derive(Debug, Clone)]
pub struct GetBookingQuery {
    pub booking_id: BookingId,
}

/// A booking together with its milestone progress.
#[derive(Debug, Clone)]
pub struct GetBookingResult {
    pub booking: Booking,
    pub progress: ProgressSummary,
}

/// Handler for retrieving booking details.
pub struct GetBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl GetBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetBookingQuery) -> Result<GetBookingResult, BookingError> {
        let booking = load_booking(self.repository.as_ref(), query.booking_id).await?;
        let progress = booking.progress().summary();
        debug!(
            booking_id = %query.booking_id,
            status = %booking.status(),
            percent = progress.percent,
            "Loaded booking"
        );
        Ok(GetBookingResult { booking, progress })
    }
}
