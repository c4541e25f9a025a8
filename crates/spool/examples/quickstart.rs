//! Spool quickstart: build a list, walk it with cursors, let it grow,
//! then sort, merge and filter.
//!
//! Run with:
//!   cargo run --example quickstart

use spool::prelude::*;

// ─── Sizing ─────────────────────────────────────────────────────

const INITIAL_CAPACITY: usize = 4;

fn render(list: &List<i32>) -> String {
    let parts: Vec<String> = list.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn main() -> Result<(), ListError> {
    // ─── Construction ───────────────────────────────────────────
    let config = ArenaConfig::new(INITIAL_CAPACITY).with_growth(GrowthPolicy::DOUBLE);
    let mut list: List<i32> = List::with_config(config)?;
    list.insert_back(10);
    list.insert_back(30);
    list.insert_front(5);
    println!("built:    {} (capacity {})", render(&list), list.capacity());

    // ─── Cursor insertion ───────────────────────────────────────
    // Insert in front of 30. The returned cursor names 30 again, so
    // inserting there repeatedly keeps values in order.
    let mut at = list.cursor_at(2);
    for v in [20, 25] {
        at = list.insert(at, v);
    }
    println!(
        "inserted: {} (capacity {}, epoch {})",
        render(&list),
        list.capacity(),
        list.epoch()
    );
    assert_eq!(list.get(at), Some(&30));

    // ─── Walking ────────────────────────────────────────────────
    let mut cursor = list.begin();
    let mut odd = 0;
    while cursor != list.end() {
        if list.get(cursor).is_some_and(|v| v % 2 != 0) {
            odd += 1;
        }
        cursor.move_next(&list);
    }
    println!("odd values: {odd}");

    // ─── Removal ────────────────────────────────────────────────
    let from = list.cursor_at(1);
    let to = list.cursor_at(3);
    list.erase_range(from, to);
    println!("erased:   {}", render(&list));
    let stats = list.stats();
    println!(
        "arena:    {} live, {} free, offset {}",
        stats.live, stats.free_count, stats.offset
    );

    // ─── Sort, merge, filter ────────────────────────────────────
    let mut other = List::from([7, 3, 7, 1]);
    other.sort();
    println!("sorted:   {} (duplicates collapse)", render(&other));

    list.merge(&mut other);
    println!("merged:   {} (other now {})", render(&list), other.len());

    let small = list.filter(|v| *v < 10);
    println!("filtered: {}", render(&small));

    Ok(())
}
