//! List identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ListId`] allocation.
static LIST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a [`List`](crate::List).
///
/// Cursors record the id of the list that produced them so a cursor can
/// never be resolved against another list's arena, where the same slot
/// index would name an unrelated node. Cloning a list allocates a new id;
/// [`List::swap`](crate::List::swap) exchanges ids along with the nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(u64);

impl ListId {
    /// Allocate a fresh, unique id.
    ///
    /// Each call returns a new id that has never been returned before
    /// within this process.
    pub fn next() -> Self {
        Self(LIST_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ListId::next();
        let b = ListId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
