//! Booking domain events.

use crate::domain::foundation::{
    BookingId, BookingStatus, BuddyId, FinderId, MilestoneId, Timestamp,
};
use serde::{Deserialize, Serialize};

/// Events that can occur during a booking's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingEvent {
    /// A finder booked a buddy.
    Created {
        booking_id: BookingId,
        finder_id: FinderId,
        buddy_id: BuddyId,
        created_at: Timestamp,
    },

    /// The booking moved along its state machine.
    StatusChanged {
        booking_id: BookingId,
        from: BookingStatus,
        to: BookingStatus,
        changed_at: Timestamp,
    },

    /// A milestone was appended to the plan.
    MilestoneAdded {
        booking_id: BookingId,
        milestone_id: MilestoneId,
    },

    /// Work began on a milestone.
    MilestoneStarted {
        booking_id: BookingId,
        milestone_id: MilestoneId,
    },

    /// A milestone was resolved.
    MilestoneCompleted {
        booking_id: BookingId,
        milestone_id: MilestoneId,
        completed_at: Timestamp,
    },
}

impl BookingEvent {
    /// Returns the booking the event belongs to.
    pub fn booking_id(&self) -> BookingId {
        match self {
            BookingEvent::Created { booking_id, .. }
            | BookingEvent::StatusChanged { booking_id, .. }
            | BookingEvent::MilestoneAdded { booking_id, .. }
            | BookingEvent::MilestoneStarted { booking_id, .. }
            | BookingEvent::MilestoneCompleted { booking_id, .. } => *booking_id,
        }
    }

    /// Stable event type name, versioned for downstream consumers.
    pub fn event_type(&self) -> &'static str {
        match self {
            BookingEvent::Created { .. } => "booking.created.v1",
            BookingEvent::StatusChanged { .. } => "booking.status_changed.v1",
            BookingEvent::MilestoneAdded { .. } => "booking.milestone_added.v1",
            BookingEvent::MilestoneStarted { .. } => "booking.milestone_started.v1",
            BookingEvent::MilestoneCompleted { .. } => "booking.milestone_completed.v1",
        }
    }
}
