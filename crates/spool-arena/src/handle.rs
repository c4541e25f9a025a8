//! Slot handles.
//!
//! A [`SlotId`] names one slot of an [`Arena`](crate::Arena). It carries
//! no generation: a handle to a freed slot may later name an unrelated
//! value once the slot is reused. Owners that hand handles to callers
//! track their own validity window.

use std::fmt;

/// Index of a slot within an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct SlotId(pub u32);

impl SlotId {
    /// The slot index as a `usize`, for indexing backing storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
