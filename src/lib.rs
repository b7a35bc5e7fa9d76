//! This crate provides a circular doubly-linked ring with a sentinel node,
//! and cursors that wrap around it.
//!
//! The [`Ring`] allows inserting, erasing elements at any given position in
//! constant time. In compromise, reaching an element by index or offset takes
//! *O*(*n*) time.
//!
//! Here is a quick example showing how the ring works.
//!
//! ```
//! use dlring::Ring;
//!
//! let mut ring = Ring::new();
//! let one = ring.insert_before(ring.end(), 1);
//! ring.insert_after(one, 2);
//! ring.insert_before(ring.end(), 3);
//! assert_eq!(ring.to_string(), "{ 1,2,3, }");
//!
//! // `end()` is one step past the last element, and one step before the first
//! assert_eq!(ring.offset(ring.begin(), 3), ring.end());
//! assert_eq!(ring.next(ring.end()), ring.begin());
//!
//! // positions survive edits elsewhere in the ring
//! ring.erase(ring.next(one));
//! assert_eq!(ring[one], 1);
//! assert_eq!(ring.to_string(), "{ 1,3, }");
//! ```
//!
//! # Memory Layout
//!
//! The nodes live in a slab arena and link to each other by slot index:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                      (Ghost) links  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     slot 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║   stamp   ║           ║   stamp   ║                        ┊ No stamp  ┊
//! │  ╟───────────╢           ╟───────────╢                        ┊No payload ┊
//! │  ║ payload T ║           ║ payload T ║                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │  ╚═══════════╝           ╚═══════════╝                            ↑   ↑
//! │     slot k                  slot j                                │   │
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║   nodes   ║  (slab of nodes, its length is the ring length)
//! ╟───────────╢
//! ║    id     ║
//! ╚═══════════╝
//!     Ring
//! ```
//! The `Ring` contains:
//! - the links `ghost` of the sentinel node, stored inline. The sentinel has
//!   the reserved slot `usize::MAX`, holds no payload, and is the `end()` of
//!   the ring;
//! - the arena `nodes`, whose length is the number of elements;
//! - an `id` that tells positions of this ring apart from those of other rings.
//!
//! Each node holds:
//! - the `next` slot of the following element (or the sentinel if it is the
//!   last element in the ring);
//! - the `prev` slot of the preceding element (or the sentinel if it is the
//!   first element in the ring);
//! - a `stamp`, unique within the ring, so that a position of an erased node is
//!   detected even after its slot was reused;
//! - the actual payload `T`.
//!
//! Initially, the `next` and `prev` links of the sentinel point to itself.
//! As elements are inserted, `ghost.next` is the first element, and
//! `ghost.prev` is the last element of the ring.
//!
//! In a ring with length *n*, walking forward from the first element visits
//! the elements 0, 1, ..., *n* - 1, then the sentinel, then element 0 again.
//!
//! # Positions and Cursors
//!
//! A [`Position`] is a small `Copy` handle that does not borrow the ring, so it
//! can be kept across edits and handed back to [`Ring`] methods. A position of
//! another ring, or of an erased node, is reported as a [`RingError`] by the
//! `try_*` methods and makes the others panic.
//!
//! The cursors [`Cursor`] and [`CursorMut`] borrow the ring and provide the
//! pointer-like arithmetic: `+`, `-`, `+=`, `-=` by an `isize` step count, and
//! `Cursor - Cursor` for the signed distance between two cursors. They are
//! cyclic and never run out.
//!
//! ## Examples
//!
//! ```
//! use dlring::Ring;
//!
//! let ring = Ring::from([1, 2, 3, 4, 5]);
//! let begin = ring.cursor_begin();
//! let b = begin + 1;
//!
//! assert_eq!(ring.cursor_end() - begin, Ok(5));
//! assert_eq!(begin - ring.cursor_end(), Ok(-5));
//! assert_eq!(b - begin, Ok(1));
//! // distances are counted forward, so this one wraps around
//! assert_eq!(begin - b, Ok(5));
//! assert_eq!((b - 2).current(), None);
//! ```
//!
//! # Iteration
//!
//! Iterating over a ring is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the ring like an array (fused and
//! non-cyclic).
//!
//! ```
//! use dlring::Ring;
//!
//! let mut ring = Ring::from([1, 2, 3]);
//! ring.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(ring.iter().rev()), vec![&6, &4, &2]);
//! ```
//!
//! # Logging
//!
//! With the default `tracing` feature, node attachment and detachment are
//! reported as `trace` events, and clearing a ring or indexing past its last
//! element as `debug` events.

#[doc(inline)]
pub use error::{Result, RingError};
#[doc(inline)]
pub use ring::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use ring::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use ring::{Position, Ring, RingId};

pub mod ring;

mod error;
