//! Test fixtures and helpers for Spool development.
//!
//! - [`seeded_values`]: deterministic pseudo-random element sequences.
//! - [`DropTracker`] / [`Tracked`]: an element type that counts its drops,
//!   for checking that every node is destroyed exactly once.
//! - [`assert_consistent`]: structural checks on a [`List`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use spool_list::List;

pub use fixtures::{seeded_values, DropTracker, Tracked};

/// Copy a list's elements into a `Vec`, front to back.
pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Check the structural invariants visible through the public API.
///
/// # Panics
///
/// Panics if `len()` disagrees with a full traversal, if `front`/`back`
/// disagree with the traversal's ends, if the arena's live count differs
/// from `len()`, or if walking a cursor from `begin()` does not reach
/// `end()` in exactly `len()` steps.
pub fn assert_consistent<T: PartialEq + std::fmt::Debug>(list: &List<T>) {
    let walked: Vec<&T> = list.iter().collect();
    assert_eq!(list.len(), walked.len(), "len disagrees with traversal");
    assert_eq!(list.is_empty(), walked.is_empty());
    assert_eq!(list.front(), walked.first().copied(), "front mismatch");
    assert_eq!(list.back(), walked.last().copied(), "back mismatch");
    assert_eq!(list.stats().live, list.len(), "arena live count mismatch");
    assert!(list.capacity() >= list.len());

    let mut cursor = list.begin();
    for _ in 0..list.len() {
        assert!(!cursor.is_end(), "cursor reached end early");
        cursor.move_next(list);
    }
    assert_eq!(cursor, list.end(), "cursor walk did not end at end()");
}
