//! The fixed-capacity slot arena.
//!
//! An [`Arena`] owns storage for up to `capacity` values of one type.
//! Slots below the bump offset have been handed out at least once; each
//! of them is either live or sitting on the [`FreeList`].

use crate::error::ArenaError;
use crate::free_list::FreeList;
use crate::handle::SlotId;
use crate::stats::ArenaStats;

/// Bump-allocated slot storage with LIFO slot reuse.
///
/// `Arena` is move-only: it does not implement `Clone`. Moving it out of
/// an owner with [`std::mem::take`] leaves an empty, zero-capacity arena
/// behind.
///
/// Invariants:
/// - `offset <= capacity`
/// - `free_count <= offset`
/// - a slot is never live and on the free list at the same time
#[derive(Debug)]
pub struct Arena<T> {
    /// Bump region. `slots.len()` is the bump offset; the backing
    /// allocation is reserved for `capacity` slots at construction.
    slots: Vec<Option<T>>,
    /// Total slots this arena may hand out.
    capacity: usize,
    /// Reclaimed slots, reused before the bump offset advances.
    free: FreeList,
}

impl<T> Arena<T> {
    /// Create an arena with room for `capacity` values.
    ///
    /// Both the slot storage and the free list are reserved up front.
    /// Slot indices are `u32`, so at most `u32::MAX` slots are ever
    /// handed out whatever `capacity` says.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            free: FreeList::with_capacity(capacity),
        }
    }

    /// Store `value` in a slot and return its handle.
    ///
    /// Pops the most recently freed slot when one exists, otherwise takes
    /// the next never-used slot.
    ///
    /// # Panics
    ///
    /// Panics if the arena is full. Owners must check capacity first (see
    /// [`check_available`](Self::check_available)).
    pub fn allocate(&mut self, value: T) -> SlotId {
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot.index()];
            debug_assert!(entry.is_none(), "free list held live slot {slot}");
            *entry = Some(value);
            return slot;
        }

        if let Err(err) = self.check_available(1) {
            panic!("{err}");
        }
        let Ok(index) = u32::try_from(self.slots.len()) else {
            panic!(
                "{}",
                ArenaError::CapacityExceeded {
                    requested: 1,
                    capacity: u32::MAX as usize,
                }
            );
        };
        let slot = SlotId(index);
        self.slots.push(Some(value));
        slot
    }

    /// Move the value out of `slot` and put the slot on the free list.
    ///
    /// # Panics
    ///
    /// Panics if `slot` was never handed out or is already vacant.
    pub fn deallocate(&mut self, slot: SlotId) -> T {
        match self.try_deallocate(slot) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`deallocate`](Self::deallocate).
    pub fn try_deallocate(&mut self, slot: SlotId) -> Result<T, ArenaError> {
        let offset = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot.index())
            .ok_or(ArenaError::SlotOutOfRange { slot, offset })?;
        let value = entry.take().ok_or(ArenaError::VacantSlot { slot })?;
        self.free.push(slot);
        Ok(value)
    }

    /// Verify that `n` more values fit without growth.
    pub fn check_available(&self, n: usize) -> Result<(), ArenaError> {
        if n > self.available() {
            return Err(ArenaError::CapacityExceeded {
                requested: n,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Shared access to the value in `slot`, if live.
    pub fn get(&self, slot: SlotId) -> Option<&T> {
        self.slots.get(slot.index()).and_then(Option::as_ref)
    }

    /// Mutable access to the value in `slot`, if live.
    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut T> {
        self.slots.get_mut(slot.index()).and_then(Option::as_mut)
    }

    /// Mutable access to every live value, in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, entry)| entry.as_mut().map(|value| (SlotId(i as u32), value)))
    }

    /// Whether `slot` currently holds a value.
    pub fn is_live(&self, slot: SlotId) -> bool {
        self.get(slot).is_some()
    }

    /// Drop every live value and release both backing allocations.
    ///
    /// The arena is left with zero capacity; it has to be replaced (not
    /// refilled) before further use.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free = FreeList::default();
        self.capacity = 0;
    }

    /// Drop every live value but keep the reserved storage.
    ///
    /// The bump offset returns to zero and the free list is emptied.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Total slots this arena may hand out.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots handed out at least once.
    pub fn offset(&self) -> usize {
        self.slots.len()
    }

    /// Reclaimed slots awaiting reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Slots currently holding a value.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Slots that can still be allocated.
    pub fn available(&self) -> usize {
        self.capacity - self.live()
    }

    /// Whether every slot is live.
    pub fn is_full(&self) -> bool {
        self.available() == 0
    }

    /// Snapshot of the slot accounting.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            capacity: self.capacity,
            offset: self.offset(),
            free_count: self.free_count(),
            live: self.live(),
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
