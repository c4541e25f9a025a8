//! Search, deduplication, sorting, merging and filtering.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::cursor::Cursor;
use crate::list::List;

/// A value ordered by a borrowed comparator, so a `BTreeSet` can be keyed
/// by an arbitrary comparison function.
struct Keyed<'c, T, F> {
    value: T,
    compare: &'c F,
}

impl<T, F> PartialEq for Keyed<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        (self.compare)(&self.value, &other.value) == Ordering::Equal
    }
}

impl<T, F> Eq for Keyed<'_, T, F> where F: Fn(&T, &T) -> Ordering {}

impl<T, F> PartialOrd for Keyed<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, F> Ord for Keyed<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, other: &Self) -> Ordering {
        (self.compare)(&self.value, &other.value)
    }
}

impl<T> List<T> {
    /// First position in `[from, to)` holding `value`, or `to`. O(n).
    ///
    /// # Panics
    ///
    /// Panics if either cursor fails [`check_cursor`](Self::check_cursor).
    pub fn find(&self, value: &T, from: Cursor, to: Cursor) -> Cursor
    where
        T: PartialEq,
    {
        self.find_if(from, to, |v| v == value)
    }

    /// First position in `[from, to)` whose element satisfies `predicate`,
    /// or `to`. O(n).
    ///
    /// # Panics
    ///
    /// Panics if either cursor fails [`check_cursor`](Self::check_cursor).
    pub fn find_if<P>(&self, from: Cursor, to: Cursor, mut predicate: P) -> Cursor
    where
        P: FnMut(&T) -> bool,
    {
        self.expect_cursor(from);
        self.expect_cursor(to);
        let mut at = from;
        while at != to {
            let Some(slot) = at.current else {
                break;
            };
            if predicate(&self.node(slot).value) {
                return at;
            }
            at.move_next(self);
        }
        to
    }

    /// Whether any element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Erase every element equal to `value`, returning how many went. O(n).
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|v| v == value)
    }

    /// Erase every element satisfying `predicate`, in place. O(n).
    ///
    /// `predicate` sees each element exactly once, front to back.
    pub fn remove_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut prev = None;
        let mut walk = self.head;
        while let Some(slot) = walk {
            let next = self.next_of(slot);
            if predicate(&self.node(slot).value) {
                drop(self.unlink(prev, slot));
                removed += 1;
            } else {
                prev = Some(slot);
            }
            walk = next;
        }
        removed
    }

    /// Keep only the elements satisfying `keep`.
    pub fn retain<P>(&mut self, mut keep: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.remove_if(|v| !keep(v));
    }

    /// Erase every element equal to its immediate predecessor. O(n).
    ///
    /// Only adjacent duplicates go; group equal values first (e.g. by
    /// sorting) to dedup the whole list, or use
    /// [`unique_all`](Self::unique_all).
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        let Some(mut prev) = self.head else {
            return 0;
        };
        let mut removed = 0;
        let mut walk = self.next_of(prev);
        while let Some(slot) = walk {
            let next = self.next_of(slot);
            if self.node(slot).value == self.node(prev).value {
                drop(self.unlink(Some(prev), slot));
                removed += 1;
            } else {
                prev = slot;
            }
            walk = next;
        }
        removed
    }

    /// Erase every element equal to any earlier element, wherever it sits.
    /// O(n log n), using an ordered set of values already seen.
    pub fn unique_all(&mut self) -> usize
    where
        T: Ord,
    {
        let keep: Vec<bool> = {
            let mut seen = BTreeSet::new();
            self.iter().map(|v| seen.insert(v)).collect()
        };
        let mut keep = keep.into_iter();
        self.remove_if(|_| !keep.next().unwrap_or(true))
    }

    /// Sort ascending. See [`sort_by`](Self::sort_by): equal elements
    /// collapse to one.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b));
    }

    /// Sort by `compare`, routing every element through an ordered set.
    ///
    /// The set keeps one element per key, so elements that compare equal
    /// collapse to the first of them: `[3, 1, 2, 1, 3]` sorts to
    /// `[1, 2, 3]`. Relocates every node; all cursors are invalidated.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let before = self.len;
        let mut ordered = BTreeSet::new();
        while let Some(value) = self.pop_front() {
            ordered.insert(Keyed {
                value,
                compare: &compare,
            });
        }

        self.clear();
        for keyed in ordered {
            self.insert_back(keyed.value);
        }

        let collapsed = before - self.len;
        if collapsed > 0 {
            log::debug!(
                "list {} sort collapsed {collapsed} equal elements ({before} -> {})",
                self.id,
                self.len
            );
        }
    }

    /// Move every element of `other` onto the end of `self`, in order.
    ///
    /// Nodes cannot be relinked across arenas, so each value is moved into
    /// a fresh slot here. `other` is left empty with its capacity intact.
    /// O(n) in `other.len()`, plus a relocation if `self` has to grow.
    pub fn merge(&mut self, other: &mut List<T>) {
        let n = other.len;
        if n == 0 {
            return;
        }
        self.reserve(n);
        while let Some(value) = other.pop_front() {
            self.insert_back(value);
        }
        other.clear();
        log::debug!("list {} merged {n} nodes from list {}", self.id, other.id);
    }

    /// A new list, with this list's capacity, holding clones of the
    /// elements that satisfy `predicate`, in order. O(n).
    pub fn filter<P>(&self, mut predicate: P) -> List<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut out = self.empty_like();
        for value in self.iter() {
            if predicate(value) {
                out.insert_back(value.clone());
            }
        }
        out
    }

    /// A new list holding clones of `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if either cursor fails [`check_cursor`](Self::check_cursor)
    /// or `to` is not reachable from `from`.
    pub fn sublist(&self, from: Cursor, to: Cursor) -> List<T>
    where
        T: Clone,
    {
        Self::from_range(self, from, to)
    }

    /// Build a list from clones of `source`'s elements in `[first, last)`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`sublist`](Self::sublist).
    pub fn from_range(source: &List<T>, first: Cursor, last: Cursor) -> List<T>
    where
        T: Clone,
    {
        let mut out = source.empty_like();
        let values = source.range(first, last);
        out.reserve(values.len());
        for value in values {
            out.insert_back(value.clone());
        }
        out
    }

    /// Lexicographic comparison under `compare`: the first unequal pair
    /// decides, otherwise the shorter list orders first.
    pub fn compare_by<U, F>(&self, other: &List<U>, mut compare: F) -> Ordering
    where
        F: FnMut(&T, &U) -> Ordering,
    {
        let mut lhs = self.iter();
        let mut rhs = other.iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match compare(a, b) {
                    Ordering::Equal => continue,
                    decided => return decided,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cmp::Ordering;

    fn values<T: Copy>(list: &List<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn find_returns_first_match() {
        let list = List::from([5, 7, 9, 7]);
        let at = list.find(&7, list.begin(), list.end());
        assert_eq!(list.offset_of(at), 1);
        assert_eq!(list.get(at), Some(&7));
    }

    #[test]
    fn find_miss_returns_to() {
        let list = List::from([1, 2, 3]);
        let to = list.cursor_at(2);
        // 3 lies outside [begin, to).
        assert_eq!(list.find(&3, list.begin(), to), to);
        assert_eq!(list.find(&42, list.begin(), list.end()), list.end());
    }

    #[test]
    fn find_result_supports_erase() {
        let mut list = List::from([1, 2, 3]);
        let at = list.find(&2, list.begin(), list.end());
        list.erase(at);
        assert_eq!(values(&list), vec![1, 3]);
    }

    #[test]
    fn find_if_with_predicate() {
        let list = List::from([1, 4, 6, 7]);
        let at = list.find_if(list.begin(), list.end(), |v| v % 2 == 0);
        assert_eq!(list.get(at), Some(&4));
    }

    #[test]
    fn remove_all_matches() {
        let mut list = List::from([1, 2, 1, 3, 1]);
        assert_eq!(list.remove(&1), 3);
        assert_eq!(values(&list), vec![2, 3]);
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn remove_if_can_empty_list() {
        let mut list = List::from([2, 4, 6]);
        assert_eq!(list.remove_if(|v| v % 2 == 0), 3);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn retain_keeps_matches() {
        let mut list = List::from([1, 2, 3, 4]);
        list.retain(|v| *v > 2);
        assert_eq!(values(&list), vec![3, 4]);
    }

    #[test]
    fn unique_removes_adjacent_duplicates() {
        let mut list = List::from([1, 1, 2, 3, 3, 3, 4]);
        assert_eq!(list.unique(), 3);
        assert_eq!(values(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn unique_leaves_separated_duplicates() {
        let mut list = List::from([1, 2, 1, 1]);
        list.unique();
        assert_eq!(values(&list), vec![1, 2, 1]);
        assert_eq!(list.back(), Some(&1));
    }

    #[test]
    fn unique_all_keeps_first_occurrence() {
        let mut list = List::from([3, 1, 3, 2, 1, 4]);
        assert_eq!(list.unique_all(), 2);
        assert_eq!(values(&list), vec![3, 1, 2, 4]);
    }

    #[test]
    fn sort_collapses_equal_elements() {
        let mut list = List::from([3, 1, 2, 1, 3]);
        list.sort();
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn sort_by_descending() {
        let mut list = List::from([2, 9, 4]);
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(values(&list), vec![9, 4, 2]);
    }

    #[test]
    fn sort_by_key_collapse_keeps_first() {
        let mut list = List::from([(1, 'a'), (0, 'b'), (1, 'c')]);
        list.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(values(&list), vec![(0, 'b'), (1, 'a')]);
    }

    #[test]
    fn sort_invalidates_cursors() {
        let mut list = List::from([2, 1]);
        let begin = list.begin();
        list.sort();
        assert!(list.check_cursor(begin).is_err());
        assert_eq!(list.front(), Some(&1));
    }

    #[test]
    fn merge_appends_and_empties_other() {
        let mut a = List::from([1, 2]);
        let mut b = List::from([3, 4, 5]);
        let b_capacity = b.capacity();
        a.merge(&mut b);
        assert_eq!(values(&a), vec![1, 2, 3, 4, 5]);
        assert_eq!(b.len(), 0);
        assert_eq!(b.stats().live, 0);
        assert_eq!(b.capacity(), b_capacity);
    }

    #[test]
    fn merge_grows_target() {
        let mut a = List::with_capacity(2);
        a.insert_back(0);
        let mut b = List::from([1, 2, 3]);
        a.merge(&mut b);
        assert_eq!(values(&a), vec![0, 1, 2, 3]);
        assert!(a.capacity() >= 4);
    }

    #[test]
    fn merged_into_list_can_be_reused() {
        let mut a = List::from([1]);
        let mut b = List::from([2]);
        a.merge(&mut b);
        b.insert_back(9);
        assert_eq!(values(&b), vec![9]);
    }

    #[test]
    fn filter_builds_new_list() {
        let list = List::from([1, 2, 3, 4, 5, 6]);
        let evens = list.filter(|v| v % 2 == 0);
        assert_eq!(values(&evens), vec![2, 4, 6]);
        assert_eq!(evens.capacity(), list.capacity());
        assert_ne!(evens.id(), list.id());
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn sublist_copies_range() {
        let list = List::from([1, 2, 3, 4]);
        let sub = list.sublist(list.cursor_at(1), list.cursor_at(3));
        assert_eq!(values(&sub), vec![2, 3]);
        let whole = List::from_range(&list, list.begin(), list.end());
        assert_eq!(whole, list);
    }

    #[test]
    fn compare_by_is_lexicographic() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 4]);
        let c = List::from([1, 2]);
        assert_eq!(a.compare_by(&b, |x, y| x.cmp(y)), Ordering::Less);
        assert_eq!(c.compare_by(&a, |x, y| x.cmp(y)), Ordering::Less);
        assert_eq!(a.compare_by(&a.clone(), |x, y| x.cmp(y)), Ordering::Equal);
        assert_eq!(b.compare_by(&a, |x, y| x.cmp(y)), Ordering::Greater);
    }
}
