//! Spool: a singly linked list whose nodes live in a private arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Spool sub-crates. For most users, adding `spool` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spool::prelude::*;
//!
//! let mut list = List::with_capacity(4);
//! for v in [5, 3, 8, 3] {
//!     list.insert_back(v);
//! }
//!
//! // Mid-list insertion through a predecessor-carrying cursor.
//! let at = list.find(&8, list.begin(), list.end());
//! list.insert(at, 7);
//!
//! // `sort` routes through an ordered set: equal elements collapse.
//! list.sort();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 5, 7, 8]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `spool-arena` | `Arena`, `SlotId`, `FreeList`, `ArenaConfig`, `GrowthPolicy` |
//! | [`list`] | `spool-list` | `List`, `Cursor`, `ListId`, iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slot arena, free list and growth configuration (`spool-arena`).
pub use spool_arena as arena;

/// The list, its cursors and iterators (`spool-list`).
pub use spool_list as list;

/// Common imports for typical usage.
///
/// ```rust
/// use spool::prelude::*;
/// ```
pub mod prelude {
    pub use spool_arena::{ArenaConfig, ArenaError, ArenaStats, GrowthPolicy, SlotId};
    pub use spool_list::{Cursor, List, ListError, ListId};
}
