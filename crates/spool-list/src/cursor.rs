//! Predecessor-carrying list positions.
//!
//! A [`Cursor`] names a position in a [`List`] as a `(previous, current)`
//! slot pair. It borrows nothing: every movement takes the owning list
//! explicitly, and dereferencing goes through [`List::get`].

use spool_arena::SlotId;

use crate::id::ListId;
use crate::list::List;

/// A position in a [`List`].
///
/// When `prev` is present, `prev.next == current` held at the time the
/// cursor was produced. `current == None` is the end position, whose
/// `prev` is the tail.
///
/// A cursor stays usable across inserts and erases elsewhere in the list
/// as long as the node it names is not itself removed. If a node is
/// inserted directly in front of it, the recorded predecessor goes stale;
/// the list detects this and rescans for the true predecessor.
///
/// Equality compares the list and the current node only, so a cursor
/// obtained by walking compares equal to [`List::end`] once exhausted.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    pub(crate) list: ListId,
    pub(crate) epoch: u32,
    pub(crate) prev: Option<SlotId>,
    pub(crate) current: Option<SlotId>,
}

impl Cursor {
    pub(crate) fn new(
        list: ListId,
        epoch: u32,
        prev: Option<SlotId>,
        current: Option<SlotId>,
    ) -> Self {
        Self {
            list,
            epoch,
            prev,
            current,
        }
    }

    /// Id of the list that produced this cursor.
    pub fn list_id(&self) -> ListId {
        self.list
    }

    /// Storage epoch the cursor was produced in.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Slot of the node this cursor names, or `None` at the end.
    pub fn current(&self) -> Option<SlotId> {
        self.current
    }

    /// Slot of the recorded predecessor, or `None` at the head.
    pub fn prev(&self) -> Option<SlotId> {
        self.prev
    }

    /// Whether this is the end position.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Whether this cursor was produced by `list`.
    pub fn belongs_to<T>(&self, list: &List<T>) -> bool {
        self.list == list.id()
    }

    /// Step to the following node. Stays put at the end.
    ///
    /// # Panics
    ///
    /// Panics if the cursor fails [`List::check_cursor`] against `list`.
    pub fn move_next<T>(&mut self, list: &List<T>) {
        list.expect_cursor(*self);
        self.step(list);
    }

    /// The cursor `k` nodes further on, stopping at the end. O(k).
    ///
    /// # Panics
    ///
    /// Panics if the cursor fails [`List::check_cursor`] against `list`.
    pub fn advanced_by<T>(mut self, list: &List<T>, k: usize) -> Cursor {
        list.expect_cursor(self);
        for _ in 0..k {
            if self.is_end() {
                break;
            }
            self.step(list);
        }
        self
    }

    fn step<T>(&mut self, list: &List<T>) {
        if let Some(slot) = self.current {
            self.prev = Some(slot);
            self.current = list.next_of(slot);
        }
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list && self.current == other.current
    }
}

impl Eq for Cursor {}
