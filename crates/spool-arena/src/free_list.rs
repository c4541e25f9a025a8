//! LIFO stack of reclaimed slots.

use crate::handle::SlotId;

/// Stack of slots returned to an arena and awaiting reuse.
///
/// Sized for the arena's full capacity up front, so pushes never
/// reallocate. Reuse is last-in, first-out: the most recently freed slot
/// is the next one handed out, which keeps allocation near memory that
/// was touched last.
#[derive(Debug, Default)]
pub struct FreeList {
    slots: Vec<SlotId>,
}

impl FreeList {
    /// Create an empty free list able to hold `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Push a reclaimed slot.
    pub fn push(&mut self, slot: SlotId) {
        self.slots.push(slot);
    }

    /// Pop the most recently reclaimed slot.
    pub fn pop(&mut self) -> Option<SlotId> {
        self.slots.pop()
    }

    /// Number of slots awaiting reuse.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is awaiting reuse.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Forget every reclaimed slot, keeping the backing allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut free = FreeList::with_capacity(4);
        free.push(SlotId(1));
        free.push(SlotId(3));
        free.push(SlotId(2));
        assert_eq!(free.len(), 3);
        assert_eq!(free.pop(), Some(SlotId(2)));
        assert_eq!(free.pop(), Some(SlotId(3)));
        assert_eq!(free.pop(), Some(SlotId(1)));
        assert_eq!(free.pop(), None);
        assert!(free.is_empty());
    }

    #[test]
    fn clear_empties_stack() {
        let mut free = FreeList::with_capacity(2);
        free.push(SlotId(0));
        free.clear();
        assert!(free.is_empty());
    }
}
