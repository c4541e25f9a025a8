//! Borrowing and owning iterators, front to back.

use std::iter::FusedIterator;

use spool_arena::SlotId;

use crate::cursor::Cursor;
use crate::list::List;

/// Shared iterator over a list's elements, or a `[from, to)` range of them.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    next: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.next?;
        let node = self.list.node(slot);
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Mutable iterator over a list's elements.
///
/// Built by splitting the arena into per-slot borrows up front (O(capacity)),
/// then handing them out in link order.
pub struct IterMut<'a, T> {
    values: Vec<Option<(&'a mut T, Option<SlotId>)>>,
    next: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let slot = self.next?;
        let (value, next) = self.values.get_mut(slot.index())?.take()?;
        self.next = next;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; pops from the front.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> List<T> {
    /// Iterate front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Iterate over `[from, to)`. Counting the range up front costs O(k).
    ///
    /// # Panics
    ///
    /// Panics if either cursor fails [`check_cursor`](Self::check_cursor)
    /// or `to` is not reachable from `from`.
    pub fn range(&self, from: Cursor, to: Cursor) -> Iter<'_, T> {
        self.expect_cursor(from);
        self.expect_cursor(to);
        let mut remaining = 0;
        let mut walk = from.current;
        while walk != to.current {
            let Some(slot) = walk else {
                panic!("range: end cursor not reachable from start cursor");
            };
            remaining += 1;
            walk = self.next_of(slot);
        }
        Iter {
            list: self,
            next: from.current,
            remaining,
        }
    }

    /// Iterate front to back with mutable access.
    ///
    /// Allocates a borrow table as large as the arena's bump offset on
    /// every call, so this is O(capacity) in time and memory. Prefer
    /// [`for_each_mut`](Self::for_each_mut) on large lists when an
    /// iterator is not needed.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let next = self.head;
        let remaining = self.len;
        let mut values: Vec<Option<(&mut T, Option<SlotId>)>> =
            (0..self.arena.offset()).map(|_| None).collect();
        for (slot, node) in self.arena.iter_mut() {
            values[slot.index()] = Some((&mut node.value, node.next));
        }
        IterMut {
            values,
            next,
            remaining,
        }
    }

    /// Apply `f` to every element, front to back. O(n), no allocation.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut walk = self.head;
        while let Some(slot) = walk {
            let node = self.node_mut(slot);
            f(&mut node.value);
            walk = node.next;
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Same cost as [`List::iter_mut`]: one O(capacity) borrow table per loop.
impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
