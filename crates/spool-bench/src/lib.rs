//! Benchmark workloads for the Spool list.
//!
//! - [`filled_list`]: a list of `n` sequential values.
//! - [`shuffled_values`]: a deterministic permutation of `0..n`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spool_list::List;

/// Build a list holding `0..n` with the given initial capacity.
pub fn filled_list(n: u32, capacity: usize) -> List<u32> {
    let mut list = List::with_capacity(capacity);
    for i in 0..n {
        list.insert_back(i);
    }
    list
}

/// A permutation of `0..n`, reproducible from `seed`.
pub fn shuffled_values(n: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<u32> = (0..n).collect();
    values.shuffle(&mut rng);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_list_is_sequential() {
        let list = filled_list(100, 8);
        assert_eq!(list.len(), 100);
        assert!(list.iter().copied().eq(0..100));
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut values = shuffled_values(64, 9);
        assert_eq!(values, shuffled_values(64, 9));
        values.sort_unstable();
        assert_eq!(values, (0..64).collect::<Vec<_>>());
    }
}
