//! Arena-backed singly linked list.
//!
//! [`List`] keeps its nodes in a private [`Arena`](spool_arena::Arena)
//! instead of one heap allocation per node. Nodes link forward by
//! [`SlotId`](spool_arena::SlotId); there are no back-links.
//!
//! # Cursors
//!
//! A [`Cursor`] is a plain `Copy` value naming a position as a
//! `(previous, current)` pair of slots. Carrying the predecessor is what
//! makes [`List::insert`] and [`List::erase`] O(1) on a forward-only chain.
//! `current == None` is the end position.
//!
//! Cursors are tied to one list ([`ListId`]) and one storage epoch. The
//! epoch advances whenever the list relocates its nodes (growth, `sort`,
//! `clear`); a cursor from an older epoch is rejected. Every operation
//! that may grow the arena takes the caller's cursor by value and returns
//! a fresh one for the new epoch.
//!
//! # Example
//!
//! ```
//! use spool_list::List;
//!
//! let mut list = List::with_capacity(4);
//! for v in [1, 2, 4, 5] {
//!     list.insert_back(v);
//! }
//!
//! // Insert 3 in front of 4. The list is full, so this grows the arena
//! // and hands back a cursor valid for the new storage.
//! let at = list.find(&4, list.begin(), list.end());
//! let after = list.insert(at, 3);
//! assert_eq!(list.get(after), Some(&4));
//! assert!(list.capacity() > 4);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! ```
//!
//! # Preconditions
//!
//! Misuse (a cursor from another list or an older epoch, erasing at the
//! end position) is a programmer error and panics with a [`ListError`]
//! message. [`List::check_cursor`] reports the same conditions as a
//! `Result`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod algorithms;
pub mod cursor;
pub mod error;
pub mod id;
pub mod iter;
pub mod list;
mod node;
mod traits;

pub use cursor::Cursor;
pub use error::ListError;
pub use id::ListId;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::List;

pub use spool_arena::{ArenaConfig, ArenaStats, GrowthPolicy};
