//! AddMilestoneHandler - Command handler for planning a milestone.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::BookingLocks;
use crate::domain::booking::{BookingError, NewMilestone};
use crate::domain::foundation::BookingId;
use crate::ports::BookingRepository;

use super::{load_booking, BookingUpdate};

/// Command to append a milestone to a booking.
#[derive(Debug, Clone)]
pub struct AddMilestoneCommand {
    pub booking_id: BookingId,
    pub milestone: NewMilestone,
}

pub type AddMilestoneResult = BookingUpdate;

/// Handler for adding milestones.
pub struct AddMilestoneHandler {
    repository: Arc<dyn BookingRepository>,
    locks: BookingLocks,
}

impl AddMilestoneHandler {
    pub fn new(repository: Arc<dyn BookingRepository>, locks: BookingLocks) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: AddMilestoneCommand) -> Result<AddMilestoneResult, BookingError> {
        let _guard = self.locks.acquire(cmd.booking_id).await;

        let booking = load_booking(self.repository.as_ref(), cmd.booking_id).await?;
        let updated = booking.add_milestone(cmd.milestone).map_err(|err| {
            warn!(booking_id = %cmd.booking_id, error = %err, "Rejected milestone");
            err
        })?;

        let update = BookingUpdate::from_booking(updated);
        self.repository.update(&update.booking).await?;

        if let Some(milestone) = update.booking.milestones().last() {
            info!(
                booking_id = %cmd.booking_id,
                milestone_id = %milestone.id(),
                title = milestone.title(),
                "Milestone added"
            );
        }

        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryBookingRepository;
    use crate::application::handlers::booking::test_support::{in_progress_with, pending};
    use crate::domain::foundation::{BookingStatus, MilestoneStatus};

    #[tokio::test]
    async fn appends_pending_milestone() {
        let booking = in_progress_with(&["Consultation"]);
        let repo = Arc::new(InMemoryBookingRepository::new());
        repo.save(&booking).await.unwrap();
        let handler = AddMilestoneHandler::new(repo.clone(), BookingLocks::new());

        let result = handler
            .handle(AddMilestoneCommand {
                booking_id: booking.id(),
                milestone: NewMilestone::new("City Tour", "Explore the neighbourhood"),
            })
            .await
            .unwrap();

        let titles: Vec<_> = result.booking.milestones().iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["Consultation", "City Tour"]);
        assert_eq!(result.booking.milestones()[1].status(), MilestoneStatus::Pending);

        let stored = repo.find_by_id(&booking.id()).await.unwrap().unwrap();
        assert_eq!(stored.milestones().len(), 2);
    }

    #[tokio::test]
    async fn closed_booking_rejects_milestone() {
        let booking = pending().cancel().unwrap();
        let repo = Arc::new(InMemoryBookingRepository::new());
        repo.save(&booking).await.unwrap();
        let handler = AddMilestoneHandler::new(repo, BookingLocks::new());

        let err = handler
            .handle(AddMilestoneCommand {
                booking_id: booking.id(),
                milestone: NewMilestone::new("Too late", ""),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::BookingClosed {
                status: BookingStatus::Cancelled
            }
        );
    }
}
