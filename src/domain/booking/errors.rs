//! Booking-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    BookingId, BookingStatus, DomainError, ErrorCode, IllegalTransition, MilestoneId,
    ValidationError,
};

/// Errors raised by booking and milestone operations.
///
/// Every failing operation leaves the original booking value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Malformed creation parameters.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Status change not listed in the booking transition table.
    #[error("Cannot transition booking from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Mutation attempted on a completed or cancelled booking.
    #[error("Booking is {status} and can no longer be modified")]
    BookingClosed { status: BookingStatus },

    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("Milestone not found: {0}")]
    MilestoneNotFound(MilestoneId),

    #[error("Milestone already completed: {0}")]
    AlreadyCompleted(MilestoneId),

    /// Completion requested while milestones are still open.
    #[error("Cannot complete booking: {remaining} milestone(s) not completed")]
    MilestonesOutstanding { remaining: usize },

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl BookingError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BookingError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BookingError::Infrastructure(message.into())
    }

    /// Returns true for the "not found" family (booking or milestone).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BookingError::BookingNotFound(_) | BookingError::MilestoneNotFound(_)
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::InvalidInput { .. } => ErrorCode::InvalidInput,
            BookingError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            BookingError::BookingClosed { .. } => ErrorCode::BookingClosed,
            BookingError::BookingNotFound(_) => ErrorCode::BookingNotFound,
            BookingError::MilestoneNotFound(_) => ErrorCode::MilestoneNotFound,
            BookingError::AlreadyCompleted(_) => ErrorCode::MilestoneAlreadyCompleted,
            BookingError::MilestonesOutstanding { .. } => ErrorCode::MilestonesOutstanding,
            BookingError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::InvalidInput {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<IllegalTransition<BookingStatus>> for BookingError {
    fn from(err: IllegalTransition<BookingStatus>) -> Self {
        BookingError::InvalidTransition {
            from: err.from,
            to: err.to,
        }
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::BookingNotFound => err
                .details
                .get("booking_id")
                .and_then(|id| id.parse().ok())
                .map(BookingError::BookingNotFound)
                .unwrap_or_else(|| BookingError::Infrastructure(err.to_string())),
            ErrorCode::InvalidInput => BookingError::InvalidInput {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                reason: err.message,
            },
            _ => BookingError::Infrastructure(err.to_string()),
        }
    }
}
