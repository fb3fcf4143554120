//! StartMilestoneHandler - Command handler for beginning work on a milestone.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::BookingLocks;
use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, MilestoneId};
use crate::ports::BookingRepository;

use super::{load_booking, BookingUpdate};

#[derive(Debug, Clone)]
pub struct StartMilestoneCommand {
    pub booking_id: BookingId,
    pub milestone_id: MilestoneId,
}

pub type StartMilestoneResult = BookingUpdate;

pub struct StartMilestoneHandler {
    repository: Arc<dyn BookingRepository>,
    locks: BookingLocks,
}

impl StartMilestoneHandler {
    pub fn new(repository: Arc<dyn BookingRepository>, locks: BookingLocks) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: StartMilestoneCommand,
    ) -> Result<StartMilestoneResult, BookingError> {
        let _guard = self.locks.acquire(cmd.booking_id).await;

        let booking = load_booking(self.repository.as_ref(), cmd.booking_id).await?;
        let updated = booking.start_milestone(cmd.milestone_id).map_err(|err| {
            warn!(
                booking_id = %cmd.booking_id,
                milestone_id = %cmd.milestone_id,
                error = %err,
                "Rejected milestone start"
            );
            err
        })?;

        let update = BookingUpdate::from_booking(updated);
        // Starting an in-progress milestone changes nothing.
        if update.events.is_empty() {
            return Ok(update);
        }

        self.repository.update(&update.booking).await?;
        info!(
            booking_id = %cmd.booking_id,
            milestone_id = %cmd.milestone_id,
            "Milestone started"
        );

        Ok(update)
    }
}
