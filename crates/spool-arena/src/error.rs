//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use crate::handle::SlotId;

/// Errors that can occur during arena operations.
///
/// The infallible entry points ([`Arena::allocate`](crate::Arena::allocate),
/// [`Arena::deallocate`](crate::Arena::deallocate)) treat these conditions
/// as precondition violations and panic with the same message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Every slot is live and the free list is empty.
    CapacityExceeded {
        /// Number of slots requested.
        requested: usize,
        /// Total slot capacity of the arena.
        capacity: usize,
    },
    /// The slot exists but holds no value.
    VacantSlot {
        /// The vacant slot.
        slot: SlotId,
    },
    /// The slot index lies outside the used region of the arena.
    SlotOutOfRange {
        /// The offending slot.
        slot: SlotId,
        /// Number of slots handed out so far (the bump offset).
        offset: usize,
    },
    /// An [`ArenaConfig`](crate::ArenaConfig) failed validation.
    InvalidConfig {
        /// What was wrong with it.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} slots, capacity {capacity} slots"
                )
            }
            Self::VacantSlot { slot } => {
                write!(f, "slot {slot} is vacant")
            }
            Self::SlotOutOfRange { slot, offset } => {
                write!(f, "slot {slot} out of range: only {offset} slots in use")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_message_names_both_sizes() {
        let err = ArenaError::CapacityExceeded {
            requested: 1,
            capacity: 24,
        };
        assert_eq!(
            err.to_string(),
            "arena capacity exceeded: requested 1 slots, capacity 24 slots"
        );
    }

    #[test]
    fn out_of_range_message() {
        let err = ArenaError::SlotOutOfRange {
            slot: SlotId(9),
            offset: 4,
        };
        assert_eq!(err.to_string(), "slot 9 out of range: only 4 slots in use");
    }
}
