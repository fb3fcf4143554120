//! State machine trait for lifecycle status enums.
//!
//! Booking and milestone statuses both implement [`StateMachine`]; the
//! transition table lives in `valid_transitions` and everything else is
//! derived from it.

use std::fmt;

/// A rejected status change, carrying both ends of the attempted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalTransition<S> {
    pub from: S,
    pub to: S,
}

impl<S: fmt::Display> fmt::Display for IllegalTransition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot transition from {} to {}", self.from, self.to)
    }
}

impl<S: fmt::Debug + fmt::Display> std::error::Error for IllegalTransition<S> {}

/// Trait for status enums that represent state machines.
///
/// Implementors only list their outgoing edges; validated transitions and
/// terminal detection come for free.
///
/// ```ignore
/// let next = BookingStatus::Pending.transition_to(BookingStatus::Accepted)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> &'static [Self];

    /// Returns true if the transition from self to target is listed.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs the transition, or reports it as illegal.
    fn transition_to(&self, target: Self) -> Result<Self, IllegalTransition<Self>> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(IllegalTransition {
                from: *self,
                to: target,
            })
        }
    }

    /// Checks if the current state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
