//! List node layout.

use spool_arena::SlotId;

/// One element plus the slot of its successor.
///
/// Nodes only ever live inside the owning list's arena.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<SlotId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<SlotId>) -> Self {
        Self { value, next }
    }
}
