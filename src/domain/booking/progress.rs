//! BookingProgress value object - milestone completion for a booking.
//!
//! A read-only snapshot of milestone statuses in insertion order, with
//! helpers for the progress bar and the "next milestone" hint.

use serde::Serialize;

use crate::domain::foundation::{MilestoneId, MilestoneStatus};

use super::Milestone;

/// Snapshot of milestone progress within a single booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingProgress {
    steps: Vec<(MilestoneId, MilestoneStatus)>,
}

impl BookingProgress {
    /// Builds a snapshot from milestones in their booking order.
    pub fn from_milestones<'a>(milestones: impl IntoIterator<Item = &'a Milestone>) -> Self {
        Self {
            steps: milestones.into_iter().map(|m| (m.id(), m.status())).collect(),
        }
    }

    pub fn total_count(&self) -> usize {
        self.steps.len()
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|(_, s)| s.is_completed()).count()
    }

    /// Completed over total, in `[0, 1]`. Zero when there are no milestones.
    pub fn ratio(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.total_count() as f64
    }

    /// Completion percentage (0-100), rounded down.
    pub fn percent_complete(&self) -> u8 {
        if self.steps.is_empty() {
            return 0;
        }
        ((self.completed_count() * 100) / self.total_count()) as u8
    }

    /// True iff there is at least one milestone and all are completed.
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|(_, s)| s.is_completed())
    }

    /// Number of milestones that still block completion.
    pub fn remaining(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    /// First non-completed milestone in sequence order.
    pub fn next_milestone(&self) -> Option<MilestoneId> {
        self.steps
            .iter()
            .find(|(_, s)| !s.is_completed())
            .map(|(id, _)| *id)
    }

    /// First milestone currently being worked on.
    pub fn current_in_progress(&self) -> Option<MilestoneId> {
        self.steps
            .iter()
            .find(|(_, s)| matches!(s, MilestoneStatus::InProgress))
            .map(|(id, _)| *id)
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            completed: self.completed_count(),
            total: self.total_count(),
            percent: self.percent_complete(),
            next_milestone: self.next_milestone(),
        }
    }
}

/// Serializable view of [`BookingProgress`] for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub next_milestone: Option<MilestoneId>,
}
