//! Reusable element fixtures.

use std::cell::Cell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` values drawn uniformly from `0..bound`, reproducible from `seed`.
pub fn seeded_values(seed: u64, n: usize, bound: i32) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..bound)).collect()
}

/// Hands out [`Tracked`] values and counts how many have been dropped.
#[derive(Clone, Default)]
pub struct DropTracker {
    drops: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new tracked value carrying `id`.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: self.drops.clone(),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// An element that bumps its tracker's counter when dropped.
///
/// Compares and orders by `id` only.
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            drops: self.drops.clone(),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
