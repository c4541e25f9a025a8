//! Fixed-capacity node arena for Spool lists.
//!
//! Storage for list nodes is handed out from a single pre-sized block
//! rather than one heap allocation per node. Slots are addressed by
//! [`SlotId`] indices, never by reference, so the arena can be replaced
//! wholesale on growth without leaving dangling pointers behind.
//!
//! # Architecture
//!
//! ```text
//! Arena<T>
//! ├── slots: Vec<Option<T>>   (bump region, `capacity` slots)
//! │   └── offset              (next never-used slot)
//! └── FreeList                (LIFO stack of reclaimed SlotIds)
//! ```
//!
//! [`Arena::allocate`] pops the most recently freed slot when one exists
//! and bumps `offset` otherwise. [`Arena::deallocate`] moves the value out
//! and pushes the slot onto the free list. Growth is not the arena's job:
//! the owning list builds a larger arena and migrates its nodes into it.
//!
//! # Example
//!
//! ```
//! use spool_arena::Arena;
//!
//! let mut arena: Arena<&str> = Arena::with_capacity(2);
//! let a = arena.allocate("a");
//! let b = arena.allocate("b");
//! assert!(arena.is_full());
//!
//! assert_eq!(arena.deallocate(a), "a");
//! // The freed slot is reused before any fresh one.
//! let c = arena.allocate("c");
//! assert_eq!(c, a);
//! assert_eq!(arena.get(b), Some(&"b"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod free_list;
pub mod handle;
pub mod stats;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::{ArenaConfig, GrowthPolicy};
pub use error::ArenaError;
pub use free_list::FreeList;
pub use handle::SlotId;
pub use stats::ArenaStats;
