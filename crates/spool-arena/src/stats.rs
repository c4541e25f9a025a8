//! Point-in-time arena occupancy figures.

/// Snapshot of an arena's slot accounting.
///
/// `live == offset - free_count` always holds: every slot below the bump
/// offset is either live or waiting on the free list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Total slots reserved.
    pub capacity: usize,
    /// Slots handed out at least once (the bump offset).
    pub offset: usize,
    /// Reclaimed slots awaiting reuse.
    pub free_count: usize,
    /// Slots currently holding a value.
    pub live: usize,
}

impl ArenaStats {
    /// Slots that can still be allocated without growth.
    pub fn available(&self) -> usize {
        self.capacity - self.live
    }
}
