//! GetBookingBoardHandler - Query handler for the finder and buddy dashboards.
//!
//! Groups a party's bookings by lifecycle stage. Buddies also get their
//! headline stats.

use std::sync::Arc;

use tracing::debug;

use crate::domain::booking::{BookingBoard, BookingError, BuddyStats};
use crate::domain::foundation::{BuddyId, FinderId};
use crate::ports::BookingRepository;

/// Whose dashboard to build.
#[derive(Debug, Clone)]
pub enum GetBookingBoardQuery {
    ForFinder(FinderId),
    ForBuddy(BuddyId),
}

#[derive(Debug, Clone)]
pub struct GetBookingBoardResult {
    pub board: BookingBoard,
    /// Present for buddy dashboards only.
    pub stats: Option<BuddyStats>,
}

pub struct GetBookingBoardHandler {
    repository: Arc<dyn BookingRepository>,
}

impl GetBookingBoardHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetBookingBoardQuery,
    ) -> Result<GetBookingBoardResult, BookingError> {
        let result = match query {
            GetBookingBoardQuery::ForFinder(finder_id) => {
                let bookings = self.repository.find_by_finder(&finder_id).await?;
                debug!(finder_id = %finder_id, count = bookings.len(), "Built finder board");
                GetBookingBoardResult {
                    board: BookingBoard::from_bookings(bookings),
                    stats: None,
                }
            }
            GetBookingBoardQuery::ForBuddy(buddy_id) => {
                let bookings = self.repository.find_by_buddy(&buddy_id).await?;
                debug!(buddy_id = %buddy_id, count = bookings.len(), "Built buddy board");
                let stats = BuddyStats::from_bookings(&bookings);
                GetBookingBoardResult {
                    board: BookingBoard::from_bookings(bookings),
                    stats: Some(stats),
                }
            }
        };
        Ok(result)
    }
}
