//! Integration tests: the list's documented observable behavior.
//!
//! Each test pins one externally visible property: traversal order after
//! construction and growth, the dedup behavior of `sort`, merge and
//! comparison semantics, and node destruction accounting.

use spool_list::{ArenaConfig, GrowthPolicy, List, ListError};
use spool_test_utils::{assert_consistent, seeded_values, to_vec, DropTracker};

// ── Construction and growth ─────────────────────────────────────────

#[test]
fn construction_reproduces_reference_values() {
    let reference = seeded_values(1, 100, 1_000);
    let list = List::from(reference.clone());
    assert_eq!(list.len(), reference.len());
    assert_eq!(to_vec(&list), reference);
    assert_consistent(&list);
}

#[test]
fn growth_from_capacity_four_keeps_order() {
    let mut list = List::with_capacity(4);
    for v in 1..=10 {
        list.insert_back(v);
        assert_consistent(&list);
    }
    assert_eq!(to_vec(&list), (1..=10).collect::<Vec<_>>());
    assert!(list.capacity() >= 10);
}

#[test]
fn doubling_policy_from_config() {
    let config = ArenaConfig::new(2).with_growth(GrowthPolicy::DOUBLE);
    let mut list = List::with_config(config).unwrap();
    for v in 0..3 {
        list.insert_back(v);
    }
    // 2 * 2 + 1
    assert_eq!(list.capacity(), 5);
    assert_eq!(list.config().growth, GrowthPolicy::DOUBLE);
}

#[test]
fn cursor_survives_growth_through_returned_value() {
    let mut list = List::with_capacity(2);
    list.insert_back('a');
    list.insert_back('c');
    let at = list.find(&'c', list.begin(), list.end());
    let at = list.insert(at, 'b');
    // `at` is the fresh cursor; it still names 'c' after relocation.
    assert_eq!(list.get(at), Some(&'c'));
    let at = list.insert_range(at, ['x', 'y']);
    assert_eq!(list.get(at), Some(&'c'));
    assert_eq!(to_vec(&list), vec!['a', 'b', 'x', 'y', 'c']);
    assert_consistent(&list);
}

#[test]
fn stale_cursor_is_reported_not_resolved() {
    let mut list = List::with_capacity(1);
    list.insert_back(1);
    let begin = list.begin();
    list.insert_back(2);
    assert_eq!(
        list.check_cursor(begin),
        Err(ListError::StaleCursor {
            cursor_epoch: 0,
            list_epoch: 1
        })
    );
}

// ── Insertion and erasure ───────────────────────────────────────────

#[test]
fn erase_range_same_cursor_is_noop() {
    let mut list = List::from([1, 2, 3, 4]);
    for k in 0..=4 {
        let c = list.cursor_at(k);
        list.erase_range(c, c);
        assert_eq!(list.len(), 4);
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
    }
}

#[test]
fn cursor_usable_across_unrelated_mutation() {
    let mut list = List::from([1, 2, 3, 4, 5]);
    let three = list.find(&3, list.begin(), list.end());
    list.pop_front();
    list.insert_back(6);
    list.erase(list.cursor_at(3));
    assert_eq!(list.get(three), Some(&3));
    list.erase(three);
    assert_eq!(to_vec(&list), vec![2, 4, 6]);
    assert_consistent(&list);
}

#[test]
fn freed_slots_are_reused_before_growth() {
    let mut list = List::with_capacity(4);
    list.insert_values(list.begin(), [1, 2, 3, 4]);
    list.remove_if(|v| v % 2 == 0);
    list.insert_back(5);
    list.insert_back(6);
    assert_eq!(list.capacity(), 4);
    assert_eq!(list.epoch(), 0);
    assert_eq!(list.stats().free_count, 0);
    assert_eq!(to_vec(&list), vec![1, 3, 5, 6]);
}

// ── Algorithms ──────────────────────────────────────────────────────

#[test]
fn unique_on_grouped_values() {
    let mut list = List::from([1, 1, 2, 3, 3, 3, 4]);
    list.unique();
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
    assert_consistent(&list);
}

#[test]
fn sort_collapses_equal_values() {
    // Sorting routes through a unique-key ordered set: duplicates vanish.
    let mut list = List::from([3, 1, 2, 1, 3]);
    list.sort();
    assert_eq!(to_vec(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
    assert_consistent(&list);
}

#[test]
fn sort_then_unique_all_agree_on_random_input() {
    let values = seeded_values(42, 200, 50);
    let mut sorted = List::from(values.clone());
    sorted.sort();
    let mut deduped = List::from(values);
    deduped.unique_all();
    let mut expected = to_vec(&deduped);
    expected.sort();
    assert_eq!(to_vec(&sorted), expected);
}

#[test]
fn merge_moves_everything() {
    let mut a = List::from([1, 2, 3]);
    let mut b = List::from(seeded_values(3, 40, 10));
    let b_values = to_vec(&b);
    let total = a.len() + b.len();

    a.merge(&mut b);

    assert_eq!(b.len(), 0);
    assert!(b.is_empty());
    assert_eq!(a.len(), total);
    assert_eq!(to_vec(&a)[3..], b_values[..]);
    assert_consistent(&a);
    assert_consistent(&b);
}

#[test]
fn filter_leaves_source_untouched() {
    let list = List::from([1, 2, 3, 4, 5]);
    let odd = list.filter(|v| v % 2 == 1);
    assert_eq!(to_vec(&odd), vec![1, 3, 5]);
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5]);
}

#[test]
fn lexicographic_comparisons() {
    assert!(List::from([1, 2, 3]) < List::from([1, 2, 4]));
    assert!(List::from([1, 2]) < List::from([1, 2, 3]));
    assert!(List::from([1, 2, 3]) == List::from([1, 2, 3]));
    assert!(List::from([1, 2, 4]) > List::from([1, 2, 3]));
}

// ── Node lifecycle ──────────────────────────────────────────────────

#[test]
fn every_node_dropped_exactly_once() {
    let tracker = DropTracker::new();
    {
        let mut list = List::with_capacity(2);
        for id in 0..10 {
            list.insert_back(tracker.track(id));
        }
        // Growth moves values; nothing is dropped.
        assert_eq!(tracker.drops(), 0);

        list.pop_front();
        list.pop_back();
        list.erase(list.cursor_at(3));
        assert_eq!(tracker.drops(), 3);

        let from = list.cursor_at(1);
        let to = list.cursor_at(3);
        list.erase_range(from, to);
        assert_eq!(tracker.drops(), 5);
        assert_eq!(list.len(), 5);
    }
    assert_eq!(tracker.drops(), 10);
}

#[test]
fn sort_drops_collapsed_duplicates() {
    let tracker = DropTracker::new();
    let mut list = List::new();
    for id in [2, 1, 2, 1] {
        list.insert_back(tracker.track(id));
    }
    list.sort();
    assert_eq!(list.len(), 2);
    assert_eq!(tracker.drops(), 2);
}

#[test]
fn merge_and_clear_drop_nothing_twice() {
    let tracker = DropTracker::new();
    let mut a = List::new();
    let mut b = List::new();
    a.insert_back(tracker.track(0));
    b.insert_back(tracker.track(1));
    b.insert_back(tracker.track(2));
    a.merge(&mut b);
    assert_eq!(tracker.drops(), 0);
    a.clear();
    assert_eq!(tracker.drops(), 3);
    drop(a);
    drop(b);
    assert_eq!(tracker.drops(), 3);
}
