//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, status enums, and error types
//! that form the vocabulary of the ShiftBuddy domain.

mod amount;
mod booking_status;
mod errors;
mod ids;
mod milestone_status;
mod star_rating;
mod state_machine;
mod timestamp;

pub use amount::Amount;
pub use booking_status::BookingStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BookingId, BuddyId, FinderId, LocalityId, MilestoneId};
pub use milestone_status::MilestoneStatus;
pub use star_rating::StarRating;
pub use state_machine::{IllegalTransition, StateMachine};
pub use timestamp::Timestamp;
