//! Booking aggregate - The root entity for a finder/buddy engagement.
//!
//! A Booking owns its milestones and enforces the booking state machine.
//! Every operation takes `&self` and returns a new `Booking`, so a failed
//! operation never leaves a partially updated value behind.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Amount, BookingId, BookingStatus, BuddyId, FinderId, MilestoneId, StateMachine, Timestamp,
    ValidationError,
};

use super::{BookingError, BookingEvent, BookingProgress, Milestone, NewMilestone};

/// Parameters for creating a booking.
///
/// `amount` is signed so that a negative request can be rejected with
/// `InvalidInput` rather than being unrepresentable at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub finder_id: FinderId,
    pub finder_name: String,
    pub buddy_id: BuddyId,
    pub buddy_name: String,
    pub service: String,
    pub amount: i64,
    pub move_date: Timestamp,
}

/// The Booking aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BookingRecord")]
pub struct Booking {
    id: BookingId,
    finder_id: FinderId,
    finder_name: String,
    buddy_id: BuddyId,
    buddy_name: String,
    service: String,
    status: BookingStatus,
    amount: Amount,
    booked_date: Timestamp,
    move_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accepted_at: Option<Timestamp>,
    milestones: Vec<Milestone>,
    #[serde(skip)]
    domain_events: Vec<BookingEvent>,
}

/// Stored shape of a booking, validated on the way back into the domain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: BookingId,
    pub finder_id: FinderId,
    pub finder_name: String,
    pub buddy_id: BuddyId,
    pub buddy_name: String,
    pub service: String,
    pub status: BookingStatus,
    pub amount: Amount,
    pub booked_date: Timestamp,
    pub move_date: Timestamp,
    #[serde(default)]
    pub accepted_at: Option<Timestamp>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl TryFrom<BookingRecord> for Booking {
    type Error = BookingError;

    fn try_from(record: BookingRecord) -> Result<Self, Self::Error> {
        Booking::reconstitute(record)
    }
}

fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

impl Booking {
    /// Creates a pending booking with no milestones, booked now.
    pub fn create(new: NewBooking) -> Result<Self, BookingError> {
        Self::create_at(new, Timestamp::now())
    }

    /// Creates a pending booking with an explicit booking time.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the amount is negative, the move date precedes
    ///   the booking date, or a name/service is blank.
    pub fn create_at(new: NewBooking, booked_at: Timestamp) -> Result<Self, BookingError> {
        let amount = Amount::try_new(new.amount)?;
        if new.move_date.is_before(&booked_at) {
            return Err(BookingError::invalid_input(
                "move_date",
                "move date must not precede the booking date",
            ));
        }
        let service = require_text("service", &new.service)?;
        let finder_name = require_text("finder_name", &new.finder_name)?;
        let buddy_name = require_text("buddy_name", &new.buddy_name)?;

        let mut booking = Self {
            id: BookingId::new(),
            finder_id: new.finder_id,
            finder_name,
            buddy_id: new.buddy_id,
            buddy_name,
            service,
            status: BookingStatus::Pending,
            amount,
            booked_date: booked_at,
            move_date: new.move_date,
            accepted_at: None,
            milestones: Vec::new(),
            domain_events: Vec::new(),
        };

        booking.record_event(BookingEvent::Created {
            booking_id: booking.id,
            finder_id: booking.finder_id.clone(),
            buddy_id: booking.buddy_id.clone(),
            created_at: booked_at,
        });

        Ok(booking)
    }

    /// Rebuilds a booking from stored data, re-checking every invariant.
    ///
    /// Bypasses domain event recording.
    pub fn reconstitute(record: BookingRecord) -> Result<Self, BookingError> {
        if record.move_date.is_before(&record.booked_date) {
            return Err(BookingError::invalid_input(
                "move_date",
                "move date must not precede the booking date",
            ));
        }
        for milestone in &record.milestones {
            milestone.check_invariant()?;
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = record.milestones.iter().find(|m| !seen.insert(m.id())) {
            return Err(BookingError::invalid_input(
                "milestones",
                format!("duplicate milestone id {}", dup.id()),
            ));
        }

        Ok(Self {
            id: record.id,
            finder_id: record.finder_id,
            finder_name: require_text("finder_name", &record.finder_name)?,
            buddy_id: record.buddy_id,
            buddy_name: require_text("buddy_name", &record.buddy_name)?,
            service: require_text("service", &record.service)?,
            status: record.status,
            amount: record.amount,
            booked_date: record.booked_date,
            move_date: record.move_date,
            accepted_at: record.accepted_at,
            milestones: record.milestones,
            domain_events: Vec::new(),
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn finder_id(&self) -> &FinderId {
        &self.finder_id
    }

    pub fn finder_name(&self) -> &str {
        &self.finder_name
    }

    pub fn buddy_id(&self) -> &BuddyId {
        &self.buddy_id
    }

    pub fn buddy_name(&self) -> &str {
        &self.buddy_name
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn booked_date(&self) -> Timestamp {
        self.booked_date
    }

    pub fn move_date(&self) -> Timestamp {
        self.move_date
    }

    /// When the buddy accepted, if they did.
    pub fn accepted_at(&self) -> Option<Timestamp> {
        self.accepted_at
    }

    /// Milestones in insertion order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id() == id)
    }

    /// Progress snapshot over the milestones.
    pub fn progress(&self) -> BookingProgress {
        BookingProgress::from_milestones(&self.milestones)
    }

    /// First milestone that is not completed yet.
    pub fn next_milestone(&self) -> Option<&Milestone> {
        self.milestones.iter().find(|m| !m.is_completed())
    }

    /// Events recorded since creation or the last `take_events`.
    pub fn pending_events(&self) -> &[BookingEvent] {
        &self.domain_events
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<BookingEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Status transitions
    // ───────────────────────────────────────────────────────────────

    /// Moves the booking to `target` if the transition table allows it.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the edge is not in the table
    /// - `MilestonesOutstanding` when completing with unresolved milestones
    pub fn transition(&self, target: BookingStatus) -> Result<Self, BookingError> {
        self.transition_at(target, Timestamp::now())
    }

    pub fn transition_at(
        &self,
        target: BookingStatus,
        at: Timestamp,
    ) -> Result<Self, BookingError> {
        let status = self.status.transition_to(target)?;

        if status == BookingStatus::Completed {
            let remaining = self.progress().remaining();
            if remaining > 0 {
                return Err(BookingError::MilestonesOutstanding { remaining });
            }
        }

        let mut next = self.clone();
        next.status = status;
        if status == BookingStatus::Accepted {
            next.accepted_at = Some(at);
        }
        next.record_event(BookingEvent::StatusChanged {
            booking_id: self.id,
            from: self.status,
            to: status,
            changed_at: at,
        });
        Ok(next)
    }

    /// Buddy accepts a pending request.
    pub fn accept(&self) -> Result<Self, BookingError> {
        self.transition(BookingStatus::Accepted)
    }

    /// Work begins on an accepted booking.
    pub fn start(&self) -> Result<Self, BookingError> {
        self.transition(BookingStatus::InProgress)
    }

    /// Closes an in-progress booking whose milestones are all resolved.
    pub fn complete(&self) -> Result<Self, BookingError> {
        self.transition(BookingStatus::Completed)
    }

    /// Either party declines or abandons the booking.
    pub fn cancel(&self) -> Result<Self, BookingError> {
        self.transition(BookingStatus::Cancelled)
    }

    // ───────────────────────────────────────────────────────────────
    // Milestones
    // ───────────────────────────────────────────────────────────────

    /// Appends a pending milestone to the end of the plan.
    ///
    /// The new milestone is `milestones().last()` of the returned booking.
    pub fn add_milestone(&self, new: NewMilestone) -> Result<Self, BookingError> {
        self.ensure_open()?;
        let milestone = Milestone::plan(new)?;
        let milestone_id = milestone.id();

        let mut next = self.clone();
        next.milestones.push(milestone);
        next.record_event(BookingEvent::MilestoneAdded {
            booking_id: self.id,
            milestone_id,
        });
        Ok(next)
    }

    /// Marks a pending milestone as in progress.
    ///
    /// Starting a milestone that is already in progress returns an
    /// unchanged copy.
    pub fn start_milestone(&self, id: MilestoneId) -> Result<Self, BookingError> {
        self.ensure_open()?;
        let index = self.milestone_index(id)?;
        let current = &self.milestones[index];
        if current.is_completed() {
            return Err(BookingError::AlreadyCompleted(id));
        }
        if current.status().is_started() {
            return Ok(self.clone());
        }

        let started = current
            .started()
            .map_err(|_| BookingError::AlreadyCompleted(id))?;
        let mut next = self.clone();
        next.milestones[index] = started;
        next.record_event(BookingEvent::MilestoneStarted {
            booking_id: self.id,
            milestone_id: id,
        });
        Ok(next)
    }

    /// Marks a milestone completed, stamping the current time.
    ///
    /// # Errors
    ///
    /// - `BookingClosed` if the booking is completed or cancelled
    /// - `MilestoneNotFound` if the id is not part of this booking
    /// - `AlreadyCompleted` if the milestone was completed before
    pub fn complete_milestone(&self, id: MilestoneId) -> Result<Self, BookingError> {
        self.complete_milestone_at(id, Timestamp::now())
    }

    pub fn complete_milestone_at(
        &self,
        id: MilestoneId,
        at: Timestamp,
    ) -> Result<Self, BookingError> {
        self.ensure_open()?;
        let index = self.milestone_index(id)?;
        let completed = self.milestones[index]
            .completed(at)
            .map_err(|_| BookingError::AlreadyCompleted(id))?;

        let mut next = self.clone();
        next.milestones[index] = completed;
        next.record_event(BookingEvent::MilestoneCompleted {
            booking_id: self.id,
            milestone_id: id,
            completed_at: at,
        });
        Ok(next)
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn ensure_open(&self) -> Result<(), BookingError> {
        if self.status.is_closed() {
            return Err(BookingError::BookingClosed {
                status: self.status,
            });
        }
        Ok(())
    }

    fn milestone_index(&self, id: MilestoneId) -> Result<usize, BookingError> {
        self.milestones
            .iter()
            .position(|m| m.id() == id)
            .ok_or(BookingError::MilestoneNotFound(id))
    }

    fn record_event(&mut self, event: BookingEvent) {
        self.domain_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, MilestoneStatus};

    fn booked_at() -> Timestamp {
        Timestamp::from_ymd(2024, 12, 4).unwrap()
    }

    fn new_booking() -> NewBooking {
        NewBooking {
            finder_id: FinderId::new("finder-3").unwrap(),
            finder_name: "Sneha Reddy".to_string(),
            buddy_id: BuddyId::new("buddy-1").unwrap(),
            buddy_name: "Rahul Sharma".to_string(),
            service: "House Hunting".to_string(),
            amount: 3000,
            move_date: booked_at().plus_days(10),
        }
    }

    fn pending_booking() -> Booking {
        Booking::create_at(new_booking(), booked_at()).unwrap()
    }

    fn in_progress_with(titles: &[&str]) -> Booking {
        let mut booking = pending_booking().accept().unwrap().start().unwrap();
        for title in titles {
            booking = booking
                .add_milestone(NewMilestone::new(*title, "planned"))
                .unwrap();
        }
        booking
    }

    // ───────────────────────────────────────────────────────────────
    // Creation
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn create_starts_pending_with_no_milestones() {
        let booking = pending_booking();
        assert_eq!(booking.status(), BookingStatus::Pending);
        assert!(booking.milestones().is_empty());
        assert_eq!(booking.progress().ratio(), 0.0);
        assert_eq!(booking.amount(), Amount::new(3000));
        assert_eq!(booking.booked_date(), booked_at());
    }

    #[test]
    fn create_records_created_event() {
        let mut booking = pending_booking();
        let events = booking.take_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], BookingEvent::Created { .. }));
        assert!(booking.take_events().is_empty());
    }

    #[test]
    fn create_rejects_negative_amount() {
        let new = NewBooking {
            amount: -1,
            ..new_booking()
        };
        let err = Booking::create_at(new, booked_at()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn create_rejects_move_date_before_booking() {
        let new = NewBooking {
            move_date: booked_at().minus_days(1),
            ..new_booking()
        };
        match Booking::create_at(new, booked_at()).unwrap_err() {
            BookingError::InvalidInput { field, .. } => assert_eq!(field, "move_date"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn create_rejects_move_earlier_on_the_booking_day() {
        use chrono::{TimeZone, Utc};
        let afternoon = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 12, 4, 15, 0, 0).unwrap());
        let early_morning =
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 12, 4, 1, 0, 0).unwrap());

        let new = NewBooking {
            move_date: early_morning,
            ..new_booking()
        };
        match Booking::create_at(new, afternoon).unwrap_err() {
            BookingError::InvalidInput { field, .. } => assert_eq!(field, "move_date"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }

        let new = NewBooking {
            move_date: afternoon,
            ..new_booking()
        };
        assert!(Booking::create_at(new, afternoon).is_ok());
    }

    #[test]
    fn create_allows_same_day_move() {
        let new = NewBooking {
            move_date: booked_at(),
            ..new_booking()
        };
        assert!(Booking::create_at(new, booked_at()).is_ok());
    }

    #[test]
    fn create_rejects_blank_service() {
        let new = NewBooking {
            service: "   ".to_string(),
            ..new_booking()
        };
        match Booking::create_at(new, booked_at()).unwrap_err() {
            BookingError::InvalidInput { field, .. } => assert_eq!(field, "service"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn happy_path_reaches_in_progress() {
        let accepted = pending_booking().accept().unwrap();
        assert_eq!(accepted.status(), BookingStatus::Accepted);
        assert!(accepted.accepted_at().is_some());

        let started = accepted.start().unwrap();
        assert_eq!(started.status(), BookingStatus::InProgress);
    }

    #[test]
    fn pending_cannot_complete_directly() {
        let booking = pending_booking();
        let err = booking.complete().unwrap_err();
        assert_eq!(
            err,
            BookingError::InvalidTransition {
                from: BookingStatus::Pending,
                to: BookingStatus::Completed,
            }
        );
        assert_eq!(booking.status(), BookingStatus::Pending);
    }

    #[test]
    fn accepted_cannot_be_cancelled() {
        let err = pending_booking().accept().unwrap().cancel().unwrap_err();
        assert!(matches!(err, BookingError::InvalidTransition { .. }));
    }

    #[test]
    fn terminal_states_reject_every_transition() {
        let cancelled = pending_booking().cancel().unwrap();
        for target in BookingStatus::ALL {
            assert!(matches!(
                cancelled.transition(target),
                Err(BookingError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn transition_records_status_change() {
        let mut accepted = pending_booking().accept().unwrap();
        let events = accepted.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            BookingEvent::StatusChanged {
                from: BookingStatus::Pending,
                to: BookingStatus::Accepted,
                ..
            }
        )));
    }

    #[test]
    fn completion_requires_all_milestones_resolved() {
        let booking = in_progress_with(&["Consultation", "Shortlist"]);
        let first = booking.milestones()[0].id();
        let booking = booking.complete_milestone(first).unwrap();

        assert_eq!(
            booking.complete().unwrap_err(),
            BookingError::MilestonesOutstanding { remaining: 1 }
        );

        let second = booking.milestones()[1].id();
        let done = booking.complete_milestone(second).unwrap().complete().unwrap();
        assert_eq!(done.status(), BookingStatus::Completed);
    }

    #[test]
    fn booking_without_milestones_can_complete() {
        let done = in_progress_with(&[]).complete().unwrap();
        assert_eq!(done.status(), BookingStatus::Completed);
    }

    // ───────────────────────────────────────────────────────────────
    // Milestones
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn add_milestone_appends_in_order() {
        let booking = in_progress_with(&["Initial Consultation", "Property Shortlist"]);
        let titles: Vec<_> = booking.milestones().iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["Initial Consultation", "Property Shortlist"]);
        assert!(booking
            .milestones()
            .iter()
            .all(|m| m.status() == MilestoneStatus::Pending));
    }

    #[test]
    fn add_milestone_allowed_while_pending() {
        let booking = pending_booking()
            .add_milestone(NewMilestone::new("Initial Consultation", ""))
            .unwrap();
        assert_eq!(booking.milestones().len(), 1);
    }

    #[test]
    fn add_milestone_rejected_on_closed_booking() {
        let cancelled = pending_booking().cancel().unwrap();
        let err = cancelled
            .add_milestone(NewMilestone::new("Too late", ""))
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::BookingClosed {
                status: BookingStatus::Cancelled
            }
        );
    }

    #[test]
    fn complete_milestone_sets_date_and_status() {
        let booking = in_progress_with(&["City Tour"]);
        let id = booking.milestones()[0].id();
        let at = booked_at().plus_days(2);

        let updated = booking.complete_milestone_at(id, at).unwrap();
        let milestone = updated.milestone(id).unwrap();
        assert_eq!(milestone.status(), MilestoneStatus::Completed);
        assert_eq!(milestone.completed_date(), Some(at));

        // Original value is untouched.
        assert_eq!(booking.milestone(id).unwrap().status(), MilestoneStatus::Pending);
    }

    #[test]
    fn complete_milestone_twice_is_an_error_and_leaves_state() {
        let booking = in_progress_with(&["City Tour"]);
        let id = booking.milestones()[0].id();
        let once = booking.complete_milestone(id).unwrap();

        assert_eq!(
            once.complete_milestone(id).unwrap_err(),
            BookingError::AlreadyCompleted(id)
        );
        assert_eq!(once.progress().completed_count(), 1);
    }

    #[test]
    fn complete_unknown_milestone_is_not_found() {
        let booking = in_progress_with(&["City Tour"]);
        let unknown = MilestoneId::new();
        assert_eq!(
            booking.complete_milestone(unknown).unwrap_err(),
            BookingError::MilestoneNotFound(unknown)
        );
    }

    #[test]
    fn start_milestone_moves_pending_to_in_progress() {
        let booking = in_progress_with(&["Shortlist"]);
        let id = booking.milestones()[0].id();
        let started = booking.start_milestone(id).unwrap();
        assert_eq!(
            started.milestone(id).unwrap().status(),
            MilestoneStatus::InProgress
        );
        assert_eq!(started.progress().current_in_progress(), Some(id));

        // Starting again is a no-op.
        let again = started.start_milestone(id).unwrap();
        assert_eq!(again.milestones(), started.milestones());
    }

    #[test]
    fn start_completed_milestone_is_rejected() {
        let booking = in_progress_with(&["Shortlist"]);
        let id = booking.milestones()[0].id();
        let done = booking.complete_milestone(id).unwrap();
        assert_eq!(
            done.start_milestone(id).unwrap_err(),
            BookingError::AlreadyCompleted(id)
        );
    }

    #[test]
    fn next_milestone_is_first_incomplete() {
        let booking = in_progress_with(&["One", "Two", "Three"]);
        let first = booking.milestones()[0].id();
        let booking = booking.complete_milestone(first).unwrap();
        assert_eq!(booking.next_milestone().unwrap().title(), "Two");
    }

    // ───────────────────────────────────────────────────────────────
    // Serialization
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(pending_booking()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["buddyName"], "Rahul Sharma");
        assert_eq!(json["amount"], 3000);
        assert!(json.get("bookedDate").is_some());
        assert!(json.get("domainEvents").is_none());
    }

    #[test]
    fn json_round_trip_preserves_milestones() {
        let booking = in_progress_with(&["One", "Two"]);
        let id = booking.milestones()[0].id();
        let booking = booking.complete_milestone(id).unwrap();

        let json = serde_json::to_string(&booking).unwrap();
        let restored: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.milestones(), booking.milestones());
        assert!(restored.pending_events().is_empty());
    }

    #[test]
    fn deserialization_rejects_inverted_dates() {
        let mut json = serde_json::to_value(pending_booking()).unwrap();
        json["moveDate"] = serde_json::to_value(booked_at().minus_days(3)).unwrap();
        assert!(serde_json::from_value::<Booking>(json).is_err());
    }

    #[test]
    fn deserialization_rejects_move_hours_before_booking() {
        let mut json = serde_json::to_value(pending_booking()).unwrap();
        json["bookedDate"] = serde_json::json!("2024-12-04T15:00:00Z");
        json["moveDate"] = serde_json::json!("2024-12-04T01:00:00Z");
        assert!(serde_json::from_value::<Booking>(json).is_err());
    }
}
