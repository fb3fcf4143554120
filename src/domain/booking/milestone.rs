//! Milestone entity - a discrete unit of work inside a booking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    IllegalTransition, MilestoneId, MilestoneStatus, StateMachine, Timestamp, ValidationError,
};

/// Parameters for planning a new milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMilestone {
    pub title: String,
    pub description: String,
    pub due_date: Option<Timestamp>,
}

impl NewMilestone {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: None,
        }
    }

    pub fn due(mut self, due_date: Timestamp) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// A milestone owned by exactly one booking.
///
/// Invariant: `completed_date` is `Some` if and only if `status` is
/// `Completed`. Only the owning booking changes a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    id: MilestoneId,
    title: String,
    description: String,
    status: MilestoneStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_date: Option<Timestamp>,
}

impl Milestone {
    /// Plans a new pending milestone.
    pub(crate) fn plan(new: NewMilestone) -> Result<Self, ValidationError> {
        if new.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id: MilestoneId::new(),
            title: new.title.trim().to_string(),
            description: new.description,
            status: MilestoneStatus::Pending,
            due_date: new.due_date,
            completed_date: None,
        })
    }

    pub fn id(&self) -> MilestoneId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> MilestoneStatus {
        self.status
    }

    pub fn due_date(&self) -> Option<Timestamp> {
        self.due_date
    }

    pub fn completed_date(&self) -> Option<Timestamp> {
        self.completed_date
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Returns true if the milestone is past due at `now` and not finished.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due.is_before(&now))
    }

    /// Checks the completedDate/status invariant.
    pub(crate) fn check_invariant(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.is_completed() != self.completed_date.is_some() {
            return Err(ValidationError::invalid_format(
                "completed_date",
                format!(
                    "milestone {} is {} but completed date is {}",
                    self.id,
                    self.status,
                    if self.completed_date.is_some() { "set" } else { "missing" }
                ),
            ));
        }
        Ok(())
    }

    pub(crate) fn started(&self) -> Result<Self, IllegalTransition<MilestoneStatus>> {
        let status = self.status.transition_to(MilestoneStatus::InProgress)?;
        Ok(Self {
            status,
            ..self.clone()
        })
    }

    pub(crate) fn completed(
        &self,
        at: Timestamp,
    ) -> Result<Self, IllegalTransition<MilestoneStatus>> {
        let status = self.status.transition_to(MilestoneStatus::Completed)?;
        Ok(Self {
            status,
            completed_date: Some(at),
            ..self.clone()
        })
    }
}
