//! CompleteMilestoneHandler - Command handler for resolving a milestone.
//!
//! Completing an already-completed milestone is an explicit
//! `AlreadyCompleted` error; the stored booking is not changed.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::BookingLocks;
use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, MilestoneId};
use crate::ports::BookingRepository;

use super::{load_booking, BookingUpdate};

/// Command to mark a milestone completed.
#[derive(Debug, Clone)]
pub struct CompleteMilestoneCommand {
    pub booking_id: BookingId,
    pub milestone_id: MilestoneId,
}

pub type CompleteMilestoneResult = BookingUpdate;

/// Handler for completing milestones.
pub struct CompleteMilestoneHandler {
    repository: Arc<dyn BookingRepository>,
    locks: BookingLocks,
}

impl CompleteMilestoneHandler {
    pub fn new(repository: Arc<dyn BookingRepository>, locks: BookingLocks) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: CompleteMilestoneCommand,
    ) -> Result<CompleteMilestoneResult, BookingError> {
        let _guard = self.locks.acquire(cmd.booking_id).await;

        let booking = load_booking(self.repository.as_ref(), cmd.booking_id).await?;
        let updated = booking.complete_milestone(cmd.milestone_id).map_err(|err| {
            warn!(
                booking_id = %cmd.booking_id,
                milestone_id = %cmd.milestone_id,
                error = %err,
                "Rejected milestone completion"
            );
            err
        })?;

        let update = BookingUpdate::from_booking(updated);
        self.repository.update(&update.booking).await?;

        let progress = update.booking.progress();
        info!(
            booking_id = %cmd.booking_id,
            milestone_id = %cmd.milestone_id,
            completed = progress.completed_count(),
            total = progress.total_count(),
            "Milestone completed"
        );

        Ok(update)
    }
}
