//! The arena-backed list: construction, queries, growth and the core
//! insert/erase operations.
//!
//! Algorithmic operations (search, dedup, sort, merge, filter) live in a
//! sibling module and are documented on [`List`] alongside these.

use smallvec::SmallVec;
use spool_arena::{Arena, ArenaConfig, ArenaStats, GrowthPolicy, SlotId};

use crate::cursor::Cursor;
use crate::error::ListError;
use crate::id::ListId;
use crate::node::Node;

/// Singly linked list whose nodes live in a private arena.
///
/// Invariants:
/// - `len` equals the number of nodes reachable from `head` by following
///   `next`, and that walk ends exactly at `tail`.
/// - `head.is_none() == (len == 0) == tail.is_none()`.
/// - The arena holds exactly `len` live nodes.
/// - Capacity never shrinks.
pub struct List<T> {
    pub(crate) id: ListId,
    /// Bumped whenever nodes are relocated to new slots.
    pub(crate) epoch: u32,
    pub(crate) arena: Arena<Node<T>>,
    pub(crate) growth: GrowthPolicy,
    pub(crate) head: Option<SlotId>,
    pub(crate) tail: Option<SlotId>,
    pub(crate) len: usize,
}

impl<T> List<T> {
    /// Create an empty list with the default capacity (24 nodes).
    pub fn new() -> Self {
        Self::with_capacity(ArenaConfig::DEFAULT_CAPACITY)
    }

    /// Create an empty list with room for `capacity` nodes before growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(capacity, GrowthPolicy::default())
    }

    /// Create an empty list from a validated config.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ListError> {
        config.validate()?;
        Ok(Self::from_parts(config.initial_capacity, config.growth))
    }

    fn from_parts(capacity: usize, growth: GrowthPolicy) -> Self {
        Self {
            id: ListId::next(),
            epoch: 0,
            arena: Arena::with_capacity(capacity),
            growth,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// An empty list sized and configured like `self`.
    pub(crate) fn empty_like<U>(&self) -> List<U> {
        List::from_parts(self.capacity(), self.growth)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes the current arena can hold.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// The list's current configuration (capacity and growth policy).
    pub fn config(&self) -> ArenaConfig {
        ArenaConfig::new(self.capacity()).with_growth(self.growth)
    }

    /// Slot accounting of the backing arena.
    pub fn stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    /// This list's identity, recorded in every cursor it produces.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Current storage epoch.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.node(slot).value)
    }

    /// Mutable first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let slot = self.head?;
        Some(&mut self.node_mut(slot).value)
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.node(slot).value)
    }

    /// Mutable last element, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let slot = self.tail?;
        Some(&mut self.node_mut(slot).value)
    }

    /// The element `at` names, or `None` at the end.
    ///
    /// # Panics
    ///
    /// Panics if `at` fails [`check_cursor`](Self::check_cursor).
    pub fn get(&self, at: Cursor) -> Option<&T> {
        self.expect_cursor(at);
        at.current.map(|slot| &self.node(slot).value)
    }

    /// Mutable form of [`get`](Self::get).
    pub fn get_mut(&mut self, at: Cursor) -> Option<&mut T> {
        self.expect_cursor(at);
        let slot = at.current?;
        Some(&mut self.node_mut(slot).value)
    }

    // ── Cursors ─────────────────────────────────────────────────

    /// Cursor at the first element (equal to [`end`](Self::end) when empty).
    pub fn begin(&self) -> Cursor {
        self.cursor(None, self.head)
    }

    /// The end position. Its predecessor is the tail.
    pub fn end(&self) -> Cursor {
        self.cursor(self.tail, None)
    }

    /// Cursor `offset` nodes from the head, clamped to the end. O(offset).
    pub fn cursor_at(&self, offset: usize) -> Cursor {
        self.begin().advanced_by(self, offset)
    }

    /// Distance of `at` from the head; `len()` for the end. O(n).
    ///
    /// # Panics
    ///
    /// Panics if `at` fails [`check_cursor`](Self::check_cursor).
    pub fn offset_of(&self, at: Cursor) -> usize {
        self.expect_cursor(at);
        let Some(target) = at.current else {
            return self.len;
        };
        let mut offset = 0;
        let mut walk = self.head;
        while let Some(slot) = walk {
            if slot == target {
                return offset;
            }
            offset += 1;
            walk = self.next_of(slot);
        }
        panic!("{}", ListError::DetachedCursor { slot: target });
    }

    /// Verify that `at` was produced by this list in its current epoch and
    /// still names a live node (or the end).
    pub fn check_cursor(&self, at: Cursor) -> Result<(), ListError> {
        if at.list != self.id {
            return Err(ListError::ForeignCursor {
                expected: self.id,
                found: at.list,
            });
        }
        if at.epoch != self.epoch {
            return Err(ListError::StaleCursor {
                cursor_epoch: at.epoch,
                list_epoch: self.epoch,
            });
        }
        if let Some(slot) = at.current {
            if !self.arena.is_live(slot) {
                return Err(ListError::DetachedCursor { slot });
            }
        }
        Ok(())
    }

    pub(crate) fn cursor(&self, prev: Option<SlotId>, current: Option<SlotId>) -> Cursor {
        Cursor::new(self.id, self.epoch, prev, current)
    }

    pub(crate) fn expect_cursor(&self, at: Cursor) {
        if let Err(err) = self.check_cursor(at) {
            panic!("{err}");
        }
    }

    /// The true predecessor of `at.current`: `None` at the head, the tail
    /// at the end. Falls back to a scan if the recorded one went stale.
    pub(crate) fn predecessor(&self, at: Cursor) -> Option<SlotId> {
        let Some(target) = at.current else {
            return self.tail;
        };
        if self.head == Some(target) {
            return None;
        }
        if let Some(prev) = at.prev {
            if self.arena.get(prev).is_some_and(|n| n.next == Some(target)) {
                return Some(prev);
            }
        }
        let mut walk = self.head;
        while let Some(slot) = walk {
            let next = self.next_of(slot);
            if next == Some(target) {
                return Some(slot);
            }
            walk = next;
        }
        panic!("{}", ListError::DetachedCursor { slot: target });
    }

    // ── Node access ─────────────────────────────────────────────

    pub(crate) fn node(&self, slot: SlotId) -> &Node<T> {
        match self.arena.get(slot) {
            Some(node) => node,
            None => panic!("{}", ListError::DetachedCursor { slot }),
        }
    }

    pub(crate) fn node_mut(&mut self, slot: SlotId) -> &mut Node<T> {
        match self.arena.get_mut(slot) {
            Some(node) => node,
            None => panic!("{}", ListError::DetachedCursor { slot }),
        }
    }

    pub(crate) fn next_of(&self, slot: SlotId) -> Option<SlotId> {
        self.node(slot).next
    }

    fn link(&mut self, prev: Option<SlotId>, next: Option<SlotId>) {
        match prev {
            Some(slot) => self.node_mut(slot).next = next,
            None => self.head = next,
        }
    }

    /// Remove `slot`, whose predecessor is `prev`, and return its node.
    pub(crate) fn unlink(&mut self, prev: Option<SlotId>, slot: SlotId) -> Node<T> {
        let node = self.arena.deallocate(slot);
        self.link(prev, node.next);
        if self.tail == Some(slot) {
            self.tail = prev;
        }
        self.len -= 1;
        node
    }

    // ── Capacity ────────────────────────────────────────────────

    /// Make room for `additional` more nodes, growing per the list's
    /// [`GrowthPolicy`] if they do not fit. Invalidates cursors on growth.
    pub fn reserve(&mut self, additional: usize) {
        if additional > self.arena.available() {
            let target = self.growth.grow(self.capacity(), additional);
            self.relocate(target);
        }
    }

    /// Migrate every node into a fresh arena of `max(new_capacity,
    /// capacity())` slots, in traversal order.
    ///
    /// Capacity never shrinks; calling this with a smaller value still
    /// compacts the nodes and empties the free list. Always invalidates
    /// cursors.
    pub fn resize(&mut self, new_capacity: usize) {
        let target = new_capacity.max(self.capacity());
        self.relocate(target);
    }

    /// Grow if `n` more nodes would not fit, returning `at` rebuilt for
    /// the new storage (or unchanged if no growth happened).
    pub(crate) fn confirm_capacity(&mut self, n: usize, at: Cursor) -> Cursor {
        if n <= self.arena.available() {
            return at;
        }
        let offset = self.offset_of(at);
        self.reserve(n);
        self.cursor_at(offset)
    }

    fn relocate(&mut self, capacity: usize) {
        let old_capacity = self.capacity();
        let mut old = std::mem::replace(&mut self.arena, Arena::with_capacity(capacity));

        let mut walk = self.head;
        let mut prev: Option<SlotId> = None;
        self.head = None;
        while let Some(slot) = walk {
            let node = old.deallocate(slot);
            walk = node.next;
            let moved = self.arena.allocate(Node::new(node.value, None));
            self.link(prev, Some(moved));
            prev = Some(moved);
        }
        self.tail = prev;
        self.epoch = self.epoch.wrapping_add(1);

        log::debug!(
            "list {} relocated {} nodes: capacity {} -> {}, epoch {}",
            self.id,
            self.len,
            old_capacity,
            capacity,
            self.epoch
        );
    }

    // ── Insertion ───────────────────────────────────────────────

    /// Prepend `value`. O(1) unless the arena grows.
    ///
    /// Returns the position just after the new element (the old head).
    pub fn insert_front(&mut self, value: T) -> Cursor {
        self.reserve(1);
        let slot = self.arena.allocate(Node::new(value, self.head));
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
        self.len += 1;
        self.cursor(Some(slot), self.next_of(slot))
    }

    /// Append `value`. O(1) unless the arena grows.
    ///
    /// Returns the end position, whose predecessor is the new element.
    pub fn insert_back(&mut self, value: T) -> Cursor {
        self.reserve(1);
        let slot = self.arena.allocate(Node::new(value, None));
        self.link(self.tail, Some(slot));
        self.tail = Some(slot);
        self.len += 1;
        self.end()
    }

    /// Insert `value` in front of the node `at` names (at the end when
    /// `at` is the end position). O(1) unless the arena grows.
    ///
    /// Returns the position just after the new element, valid for the
    /// list's storage after any growth.
    ///
    /// # Panics
    ///
    /// Panics if `at` fails [`check_cursor`](Self::check_cursor).
    pub fn insert(&mut self, at: Cursor, value: T) -> Cursor {
        self.expect_cursor(at);
        let at = self.confirm_capacity(1, at);
        if at.current == self.head {
            return self.insert_front(value);
        }
        if at.is_end() {
            return self.insert_back(value);
        }

        let prev = self.predecessor(at);
        let slot = self.arena.allocate(Node::new(value, at.current));
        self.link(prev, Some(slot));
        self.len += 1;
        self.cursor(Some(slot), at.current)
    }

    /// Insert every value of `values` in front of `at`, in order.
    ///
    /// The new nodes are chained together first and spliced in with a
    /// single relink, so the list is never rescanned per element.
    /// Returns the position just after the last inserted element; `at`
    /// itself (rebuilt if the arena grew) when `values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `at` fails [`check_cursor`](Self::check_cursor).
    pub fn insert_range<I>(&mut self, at: Cursor, values: I) -> Cursor
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.expect_cursor(at);
        let values = values.into_iter();
        let n = values.len();
        if n == 0 {
            return at;
        }
        let at = self.confirm_capacity(n, at);
        let prev = self.predecessor(at);

        // Build the detached sub-chain; head and tail are untouched until
        // the single splice below. If `values` panics, the guard frees
        // whatever was already allocated.
        let mut chain = PendingChain {
            arena: &mut self.arena,
            first: None,
        };
        let mut last: Option<SlotId> = None;
        let mut count = 0;
        for value in values.take(n) {
            let slot = chain.arena.allocate(Node::new(value, None));
            match last {
                Some(chain_tail) => {
                    if let Some(node) = chain.arena.get_mut(chain_tail) {
                        node.next = Some(slot);
                    }
                }
                None => chain.first = Some(slot),
            }
            last = Some(slot);
            count += 1;
        }
        let first = chain.first.take();
        drop(chain);
        let Some(last) = last else {
            return at;
        };

        self.node_mut(last).next = at.current;
        self.link(prev, first);
        if at.is_end() {
            self.tail = Some(last);
        }
        self.len += count;

        log::trace!("list {} spliced {count} nodes", self.id);
        self.cursor(Some(last), at.current)
    }

    /// Insert a fixed set of values in front of `at`.
    pub fn insert_values<const N: usize>(&mut self, at: Cursor, values: [T; N]) -> Cursor {
        self.insert_range(at, values)
    }

    /// Insert `n` values produced by `generator(0..n)` in front of `at`.
    pub fn insert_with<F>(&mut self, at: Cursor, n: usize, generator: F) -> Cursor
    where
        F: FnMut(usize) -> T,
    {
        self.insert_range(at, (0..n).map(generator))
    }

    // ── Removal ─────────────────────────────────────────────────

    /// Remove and return the first element. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(None, head).value)
    }

    /// Remove and return the last element.
    ///
    /// O(n): nodes carry no back-link, so the tail's predecessor is found
    /// by walking from the head.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let prev = self.predecessor(self.cursor(None, Some(tail)));
        Some(self.unlink(prev, tail).value)
    }

    /// Remove the node `at` names. O(1) with an intact predecessor.
    ///
    /// Returns the position of the following node.
    ///
    /// # Panics
    ///
    /// Panics if `at` is the end position or fails
    /// [`check_cursor`](Self::check_cursor).
    pub fn erase(&mut self, at: Cursor) -> Cursor {
        self.expect_cursor(at);
        let Some(slot) = at.current else {
            panic!("{}", ListError::EndCursor);
        };
        let prev = self.predecessor(at);
        let node = self.unlink(prev, slot);
        self.cursor(prev, node.next)
    }

    /// Remove every node in `[from, to)`. O(k) for a range of k nodes.
    ///
    /// `erase_range(c, c)` is a no-op. Returns the position of `to`.
    ///
    /// # Panics
    ///
    /// Panics if either cursor fails [`check_cursor`](Self::check_cursor)
    /// or `to` is not reachable from `from`. The list is untouched when it
    /// panics.
    pub fn erase_range(&mut self, from: Cursor, to: Cursor) -> Cursor {
        self.expect_cursor(from);
        self.expect_cursor(to);
        if from == to {
            return from;
        }

        let mut doomed: SmallVec<[SlotId; 16]> = SmallVec::new();
        let mut walk = from.current;
        while walk != to.current {
            let Some(slot) = walk else {
                panic!("erase_range: end cursor not reachable from start cursor");
            };
            doomed.push(slot);
            walk = self.next_of(slot);
        }

        let prev = self.predecessor(from);
        self.len -= doomed.len();
        for slot in doomed {
            drop(self.arena.deallocate(slot));
        }
        self.link(prev, to.current);
        if to.is_end() {
            self.tail = prev;
        }
        self.cursor(prev, to.current)
    }

    /// Remove every element, keeping the arena's capacity.
    pub fn clear(&mut self) {
        self.arena.reset();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Exchange the entire contents of two lists, identities included.
    ///
    /// Cursors keep naming the same nodes, now owned by the other list.
    pub fn swap(&mut self, other: &mut List<T>) {
        std::mem::swap(self, other);
    }
}

/// Nodes allocated for an insertion but not yet linked into the list.
/// Dropping the guard while it still owns the chain releases every slot.
struct PendingChain<'a, T> {
    arena: &'a mut Arena<Node<T>>,
    first: Option<SlotId>,
}

impl<T> Drop for PendingChain<'_, T> {
    fn drop(&mut self) {
        let mut walk = self.first.take();
        while let Some(slot) = walk {
            walk = self.arena.deallocate(slot).next;
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}
