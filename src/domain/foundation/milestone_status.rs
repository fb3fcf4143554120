//! MilestoneStatus enum for tracking a unit of work inside a booking.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Progress of a single milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    /// Returns true if the milestone is finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, MilestoneStatus::Completed)
    }

    /// Returns true if work has begun or finished.
    pub fn is_started(&self) -> bool {
        !matches!(self, MilestoneStatus::Pending)
    }
}

impl StateMachine for MilestoneStatus {
    fn valid_transitions(&self) -> &'static [Self] {
        use MilestoneStatus::*;
        match self {
            Pending => &[InProgress, Completed],
            InProgress => &[Completed],
            Completed => &[],
        }
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::InProgress => "in-progress",
            MilestoneStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}
