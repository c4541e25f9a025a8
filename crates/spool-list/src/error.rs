//! List error types.

use std::error::Error;
use std::fmt;

use spool_arena::{ArenaError, SlotId};

use crate::id::ListId;

/// Errors reported by list construction and cursor validation.
///
/// Mutating operations treat the cursor variants as precondition
/// violations and panic with this message rather than returning them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The cursor was produced by a different list.
    ForeignCursor {
        /// Id of the list the cursor was used with.
        expected: ListId,
        /// Id recorded in the cursor.
        found: ListId,
    },
    /// The list relocated its nodes after the cursor was produced.
    StaleCursor {
        /// Epoch recorded in the cursor.
        cursor_epoch: u32,
        /// Current epoch of the list.
        list_epoch: u32,
    },
    /// The cursor names a node that has since been removed.
    DetachedCursor {
        /// Slot the cursor points at.
        slot: SlotId,
    },
    /// The operation needs an element but the cursor is at the end.
    EndCursor,
    /// The backing arena rejected the request.
    Arena(ArenaError),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignCursor { expected, found } => {
                write!(f, "cursor belongs to list {found}, used with list {expected}")
            }
            Self::StaleCursor {
                cursor_epoch,
                list_epoch,
            } => {
                write!(
                    f,
                    "stale cursor: epoch {cursor_epoch}, list is at epoch {list_epoch}"
                )
            }
            Self::DetachedCursor { slot } => {
                write!(f, "cursor names removed node in slot {slot}")
            }
            Self::EndCursor => write!(f, "cursor is at the end of the list"),
            Self::Arena(e) => write!(f, "arena error: {e}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for ListError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_error_is_source() {
        let err = ListError::from(ArenaError::InvalidConfig {
            reason: "bad".into(),
        });
        assert_eq!(err.to_string(), "arena error: invalid arena config: bad");
        assert!(err.source().is_some());
    }

    #[test]
    fn stale_message_names_epochs() {
        let err = ListError::StaleCursor {
            cursor_epoch: 1,
            list_epoch: 3,
        };
        assert_eq!(err.to_string(), "stale cursor: epoch 1, list is at epoch 3");
        assert!(err.source().is_none());
    }
}
