use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use slab::Slab;
#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::error::{Result, RingError};
use crate::ring::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// Slot index reserved for the sentinel. Its links live inline in the
/// [`Ring`], never in the arena.
pub(crate) const GHOST: usize = usize::MAX;

/// Stamp carried by every position of the sentinel. Real nodes are stamped
/// from 1 upwards.
const GHOST_STAMP: u64 = 0;

/// The `Ring` is a circular doubly-linked list with a sentinel ("ghost") node.
/// It allows inserting and erasing elements at any given position in constant
/// time. In compromise, reaching an element by index or offset takes *O*(*n*)
/// time, one link at a time.
///
/// The `Ring` contains:
/// - a slab arena of nodes, each holding an element and the slot indices of
///   its `prev` and `next` neighbours;
/// - the links of the ghost node, stored inline: `ghost.next` is the first
///   element and `ghost.prev` the last one (or the ghost itself when empty);
/// - a [`RingId`] that tells its positions apart from those of other rings.
///
/// Moving forward past the last element reaches the ghost node ([`Ring::end`]),
/// and moving forward once more reaches the first element again.
///
/// # Examples
///
/// ```
/// use dlring::Ring;
///
/// let mut ring = Ring::new();
/// let one = ring.insert_before(ring.end(), 1);
/// ring.insert_after(one, 2);
/// ring.insert_before(ring.end(), 3);
///
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring[1], 2);
/// assert_eq!(ring.to_string(), "{ 1,2,3, }");
/// ```
pub struct Ring<T> {
    nodes: Slab<Node<T>>,
    ghost: Links,
    id: RingId,
    /// the last stamp handed out to a node
    stamps: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

pub(crate) struct Node<T> {
    pub(crate) links: Links,
    stamp: u64,
    pub(crate) element: T,
}

/// Identity of a [`Ring`] instance.
///
/// Every ring, including every clone, gets a distinct id for its whole
/// lifetime. Positions remember the id of the ring that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RingId(u64);

impl RingId {
    fn fresh() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        RingId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ring#{}", self.0)
    }
}

/// A detached position in a [`Ring`]: either one of its elements or its end
/// (the ghost node).
///
/// A `Position` does not borrow the ring, so it can be kept across insertions
/// and erasures. It stays valid until the element it refers to is erased;
/// positions of other elements are never invalidated. Two positions are equal
/// iff they refer to the same node of the same ring.
///
/// Use [`Ring::cursor`] to get the arithmetic API (`+`, `-`, distances) on a
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    ring: RingId,
    slot: usize,
    stamp: u64,
}

impl Position {
    /// The ring this position was produced by.
    pub fn ring(&self) -> RingId {
        self.ring
    }

    /// Returns `true` if this is the end position (the ghost node).
    pub fn is_end(&self) -> bool {
        self.slot == GHOST
    }
}

// private methods
impl<T> Ring<T> {
    pub(crate) fn links(&self, slot: usize) -> Links {
        if slot == GHOST {
            self.ghost
        } else {
            self.nodes[slot].links
        }
    }

    fn links_mut(&mut self, slot: usize) -> &mut Links {
        if slot == GHOST {
            &mut self.ghost
        } else {
            &mut self.nodes[slot].links
        }
    }

    pub(crate) fn next_slot(&self, slot: usize) -> usize {
        self.links(slot).next
    }

    pub(crate) fn prev_slot(&self, slot: usize) -> usize {
        self.links(slot).prev
    }

    pub(crate) fn front_slot(&self) -> usize {
        self.ghost.next
    }

    pub(crate) fn back_slot(&self) -> usize {
        self.ghost.prev
    }

    pub(crate) fn position_of(&self, slot: usize) -> Position {
        let stamp = if slot == GHOST {
            GHOST_STAMP
        } else {
            self.nodes[slot].stamp
        };
        Position {
            ring: self.id,
            slot,
            stamp,
        }
    }

    pub(crate) fn element(&self, slot: usize) -> Result<&T> {
        if slot == GHOST {
            return Err(RingError::EndPosition { ring: self.id });
        }
        Ok(&self.nodes[slot].element)
    }

    pub(crate) fn element_mut(&mut self, slot: usize) -> Result<&mut T> {
        if slot == GHOST {
            return Err(RingError::EndPosition { ring: self.id });
        }
        Ok(&mut self.nodes[slot].element)
    }

    /// Follow `steps` links forward (or backward), passing through the ghost
    /// node like any other node.
    pub(crate) fn step_slot(&self, mut slot: usize, steps: usize, forward: bool) -> usize {
        for _ in 0..steps {
            slot = if forward {
                self.next_slot(slot)
            } else {
                self.prev_slot(slot)
            };
        }
        slot
    }

    pub(crate) fn offset_slot(&self, slot: usize, steps: isize) -> usize {
        self.step_slot(slot, steps.unsigned_abs(), steps >= 0)
    }

    /// Number of forward steps from `from` to `to`.
    ///
    /// `end - begin` and `begin - end` are answered from the length without
    /// walking; note that the latter is negative.
    pub(crate) fn slot_distance(&self, to: usize, from: usize) -> isize {
        let (front, len) = (self.front_slot(), self.len() as isize);
        if to == GHOST && from == front {
            return len;
        }
        if to == front && from == GHOST {
            return -len;
        }
        let (mut slot, mut steps) = (from, 0);
        while slot != to {
            slot = self.next_slot(slot);
            steps += 1;
        }
        steps
    }

    /// Slot reached by walking `index` steps forward from the first element.
    pub(crate) fn slot_at(&self, index: usize) -> usize {
        #[cfg(feature = "tracing")]
        if index >= self.len() {
            debug!(ring = %self.id, index, len = self.len(), "index wraps around the ring");
        }
        self.step_slot(self.front_slot(), index, true)
    }

    /// Verify that `pos` was produced by this ring and still refers to a live
    /// node (or to the ghost node).
    pub(crate) fn check(&self, pos: Position) -> Result<usize> {
        if pos.ring != self.id {
            return Err(RingError::ForeignPosition {
                expected: self.id,
                found: pos.ring,
            });
        }
        if pos.slot == GHOST {
            return Ok(GHOST);
        }
        match self.nodes.get(pos.slot) {
            Some(node) if node.stamp == pos.stamp => Ok(pos.slot),
            _ => Err(RingError::StalePosition { ring: self.id }),
        }
    }

    #[track_caller]
    pub(crate) fn checked_slot(&self, pos: Position) -> usize {
        match self.check(pos) {
            Ok(slot) => slot,
            Err(err) => contract_violation(err),
        }
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.links_mut(prev).next = next;
        self.links_mut(next).prev = prev;
    }

    /// Attach a new node holding `element` between `prev` and `next`, and
    /// return its slot.
    ///
    /// `prev` and `next` must be adjacent nodes of this ring (only checked in
    /// `#[cfg(debug_assertions)]`), otherwise the ring becomes ill-formed.
    ///
    /// The arena slot is taken before any link is touched, so a failed
    /// allocation leaves the ring unmodified.
    pub(crate) fn attach_node(&mut self, prev: usize, next: usize, element: T) -> usize {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.stamps += 1;
        let node = Node {
            links: Links { prev, next },
            stamp: self.stamps,
            element,
        };
        let slot = self.nodes.insert(node);
        self.connect(prev, slot);
        self.connect(slot, next);
        #[cfg(feature = "tracing")]
        trace!(ring = %self.id, slot, len = self.len(), "node attached");
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, slot);
            self.assert_adjacent(slot, next);
        }
        slot
    }

    /// Detach the node at `slot` from the ring, free its slot and return the
    /// node.
    ///
    /// `slot` must be a live, non-ghost node of this ring.
    pub(crate) fn detach_node(&mut self, slot: usize) -> Node<T> {
        debug_assert_ne!(slot, GHOST, "the ghost node cannot be detached");
        let node = self.nodes.remove(slot);
        self.connect(node.links.prev, node.links.next);
        #[cfg(feature = "tracing")]
        trace!(ring = %self.id, slot, len = self.len(), "node detached");
        #[cfg(debug_assertions)]
        self.assert_adjacent(node.links.prev, node.links.next);
        node
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.links(prev).next, next);
        assert_eq!(self.links(next).prev, prev);
    }
}

impl<T> Ring<T> {
    /// Create an empty `Ring`.
    ///
    /// # Examples
    /// ```
    /// use dlring::Ring;
    /// let ring: Ring<u32> = Ring::new();
    /// assert!(ring.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `Ring` with room for `capacity` elements before the
    /// arena needs to grow.
    ///
    /// # Examples
    /// ```
    /// use dlring::Ring;
    /// let ring: Ring<u32> = Ring::with_capacity(16);
    /// assert!(ring.capacity() >= 16);
    /// assert_eq!(ring.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            ghost: Links {
                prev: GHOST,
                next: GHOST,
            },
            id: RingId::fresh(),
            stamps: GHOST_STAMP,
        }
    }

    /// The identity of this ring.
    pub fn id(&self) -> RingId {
        self.id
    }

    /// Returns the number of elements in the `Ring`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the `Ring` holds no element, i.e. `begin() == end()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// assert!(ring.is_empty());
    /// assert_eq!(ring.begin(), ring.end());
    ///
    /// ring.push_back("foo");
    /// assert!(!ring.is_empty());
    /// assert_ne!(ring.begin(), ring.end());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_slot() == GHOST
    }

    /// Number of elements the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Release unused arena memory where possible.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Removes all elements from the `Ring`, front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::from([1, 2]);
    /// ring.clear();
    /// assert!(ring.is_empty());
    /// assert_eq!(ring.begin(), ring.end());
    /// ```
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        let removed = self.len();
        while self.pop_front().is_some() {}
        #[cfg(feature = "tracing")]
        debug!(ring = %self.id, removed, "ring cleared");
    }

    /// Position of the first element, or [`Ring::end`] if the ring is empty.
    #[inline]
    pub fn begin(&self) -> Position {
        self.position_of(self.front_slot())
    }

    /// Position of the ghost node.
    ///
    /// It never holds an element, is always valid, and equals
    /// [`Ring::begin`] exactly when the ring is empty.
    #[inline]
    pub fn end(&self) -> Position {
        self.position_of(GHOST)
    }

    /// Returns `true` if `pos` belongs to this ring and its node has not been
    /// erased.
    pub fn is_valid(&self, pos: Position) -> bool {
        self.check(pos).is_ok()
    }

    /// Provides a reference to the element at `pos`, or `None` if `pos` is
    /// the end, belongs to another ring, or was erased.
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.try_get(pos).ok()
    }

    /// Provides a mutable reference to the element at `pos`, or `None` if
    /// `pos` is the end, belongs to another ring, or was erased.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.try_get_mut(pos).ok()
    }

    /// Dereference `pos`.
    ///
    /// # Errors
    ///
    /// [`RingError::EndPosition`] for [`Ring::end`],
    /// [`RingError::ForeignPosition`] or [`RingError::StalePosition`] for a
    /// position this ring cannot resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::{Ring, RingError};
    ///
    /// let ring = Ring::from([7]);
    /// assert_eq!(ring.try_get(ring.begin()), Ok(&7));
    /// assert_eq!(
    ///     ring.try_get(ring.end()),
    ///     Err(RingError::EndPosition { ring: ring.id() })
    /// );
    /// ```
    pub fn try_get(&self, pos: Position) -> Result<&T> {
        let slot = self.check(pos)?;
        self.element(slot)
    }

    /// Mutable counterpart of [`Ring::try_get`].
    pub fn try_get_mut(&mut self, pos: Position) -> Result<&mut T> {
        let slot = self.check(pos)?;
        self.element_mut(slot)
    }

    /// Insert `value` right after `pos` and return the position of the new
    /// element.
    ///
    /// Inserting after [`Ring::end`] prepends.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `pos` belongs to another ring or was erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::from([1, 3]);
    /// let two = ring.insert_after(ring.begin(), 2);
    /// assert_eq!(ring[two], 2);
    /// assert_eq!(Vec::from_iter(ring), vec![1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn insert_after(&mut self, pos: Position, value: T) -> Position {
        match self.try_insert_after(pos, value) {
            Ok(inserted) => inserted,
            Err(err) => contract_violation(err),
        }
    }

    /// Checked counterpart of [`Ring::insert_after`]. On error, `value` is
    /// dropped and the ring is unmodified.
    pub fn try_insert_after(&mut self, pos: Position, value: T) -> Result<Position> {
        let prev = self.check(pos)?;
        let next = self.next_slot(prev);
        let slot = self.attach_node(prev, next, value);
        Ok(self.position_of(slot))
    }

    /// Insert `value` right before `pos` and return the position of the new
    /// element.
    ///
    /// `insert_before(end(), value)` appends.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `pos` belongs to another ring or was erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// ring.insert_before(ring.end(), 2);
    /// ring.insert_before(ring.end(), 3);
    /// ring.insert_before(ring.begin(), 1);
    /// assert_eq!(Vec::from_iter(ring), vec![1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn insert_before(&mut self, pos: Position, value: T) -> Position {
        match self.try_insert_before(pos, value) {
            Ok(inserted) => inserted,
            Err(err) => contract_violation(err),
        }
    }

    /// Checked counterpart of [`Ring::insert_before`].
    pub fn try_insert_before(&mut self, pos: Position, value: T) -> Result<Position> {
        let next = self.check(pos)?;
        let prev = self.prev_slot(next);
        let slot = self.attach_node(prev, next, value);
        Ok(self.position_of(slot))
    }

    /// Erase the element at `pos` and return the position that followed it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`Ring::end`], belongs to another ring or was
    /// already erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::from([1, 2, 3]);
    /// let two = ring.offset(ring.begin(), 1);
    /// let three = ring.erase(two);
    /// assert_eq!(ring[three], 3);
    /// assert_eq!(ring.erase(three), ring.end());
    /// assert_eq!(Vec::from_iter(ring), vec![1]);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, pos: Position) -> Position {
        match self.try_erase(pos) {
            Ok(next) => next,
            Err(err) => contract_violation(err),
        }
    }

    /// Checked counterpart of [`Ring::erase`].
    pub fn try_erase(&mut self, pos: Position) -> Result<Position> {
        self.try_remove(pos).map(|(_, next)| next)
    }

    /// Remove the element at `pos` and return it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`Ring::end`], belongs to another ring or was
    /// already erased.
    #[track_caller]
    pub fn remove(&mut self, pos: Position) -> T {
        match self.try_remove(pos) {
            Ok((element, _)) => element,
            Err(err) => contract_violation(err),
        }
    }

    /// Remove the element at `pos`, returning it together with the position
    /// that followed it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::{Ring, RingError};
    ///
    /// let mut ring = Ring::from(['a', 'b']);
    /// let (a, b) = ring.try_remove(ring.begin()).unwrap();
    /// assert_eq!((a, ring[b]), ('a', 'b'));
    ///
    /// // the erased position is detected rather than reused
    /// let stale = ring.begin();
    /// ring.erase(stale);
    /// assert_eq!(
    ///     ring.try_remove(stale),
    ///     Err(RingError::StalePosition { ring: ring.id() })
    /// );
    /// ```
    pub fn try_remove(&mut self, pos: Position) -> Result<(T, Position)> {
        let slot = self.check(pos)?;
        if slot == GHOST {
            return Err(RingError::EndPosition { ring: self.id });
        }
        let node = self.detach_node(slot);
        Ok((node.element, self.position_of(node.links.next)))
    }

    /// Position one step forward from `pos`, passing from the last element
    /// to the end, and from the end to the first element.
    ///
    /// # Panics
    ///
    /// Panics if `pos` belongs to another ring or was erased.
    #[track_caller]
    pub fn next(&self, pos: Position) -> Position {
        self.position_of(self.next_slot(self.checked_slot(pos)))
    }

    /// Position one step backward from `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` belongs to another ring or was erased.
    #[track_caller]
    pub fn prev(&self, pos: Position) -> Position {
        self.position_of(self.prev_slot(self.checked_slot(pos)))
    }

    /// Position `steps` steps away from `pos` (backward if negative),
    /// wrapping through the end as often as needed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(|`steps`|) time.
    ///
    /// # Panics
    ///
    /// Panics if `pos` belongs to another ring or was erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3]);
    /// assert_eq!(ring.offset(ring.begin(), 3), ring.end());
    /// assert_eq!(ring.offset(ring.begin(), 4), ring.begin());
    /// assert_eq!(ring.offset(ring.begin(), -1), ring.end());
    /// ```
    #[track_caller]
    pub fn offset(&self, pos: Position, steps: isize) -> Position {
        self.position_of(self.offset_slot(self.checked_slot(pos), steps))
    }

    /// Signed number of forward steps from `from` to `to` (`to - from`).
    ///
    /// `end - begin` is `len()` and `begin - end` is `-len()`; every other
    /// pair is measured by walking forward from `from`, so the result is in
    /// `0..=len()`.
    ///
    /// # Errors
    ///
    /// [`RingError::MismatchedRings`] if `to` and `from` come from different
    /// rings, [`RingError::ForeignPosition`] or [`RingError::StalePosition`]
    /// if this ring cannot resolve them.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3, 4, 5]);
    /// let two = ring.find(&2);
    /// assert_eq!(ring.distance(ring.end(), ring.begin()), Ok(5));
    /// assert_eq!(ring.distance(ring.begin(), ring.end()), Ok(-5));
    /// assert_eq!(ring.distance(two, ring.begin()), Ok(1));
    /// assert_eq!(ring.distance(ring.begin(), two), Ok(5));
    /// ```
    pub fn distance(&self, to: Position, from: Position) -> Result<isize> {
        if to.ring != from.ring {
            return Err(RingError::MismatchedRings {
                left: to.ring,
                right: from.ring,
            });
        }
        let to = self.check(to)?;
        let from = self.check(from)?;
        Ok(self.slot_distance(to, from))
    }

    /// Reference to the element `index` steps after the first one, i.e.
    /// `*(begin() + index)`.
    ///
    /// There is no bounds check against `len()`: an index past the last
    /// element walks through the end and wraps around.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`index`) time.
    ///
    /// # Panics
    ///
    /// Panics if the walk stops exactly on the end position, e.g.
    /// `index == len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3]);
    /// assert_eq!(ring.at(0), &1);
    /// assert_eq!(ring.at(2), &3);
    /// // index 3 is the end, index 4 wraps to the first element
    /// assert_eq!(ring.at(4), &1);
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        match self.try_at(index) {
            Ok(element) => element,
            Err(err) => contract_violation(err),
        }
    }

    /// Mutable counterpart of [`Ring::at`].
    ///
    /// # Panics
    ///
    /// Panics if the walk stops exactly on the end position.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        match self.try_at_mut(index) {
            Ok(element) => element,
            Err(err) => contract_violation(err),
        }
    }

    /// Checked counterpart of [`Ring::at`], failing with
    /// [`RingError::EndPosition`] where `at` would panic.
    pub fn try_at(&self, index: usize) -> Result<&T> {
        self.element(self.slot_at(index))
    }

    /// Checked counterpart of [`Ring::at_mut`].
    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.slot_at(index);
        self.element_mut(slot)
    }

    /// Provides a reference to the front element, or `None` if the ring is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// assert_eq!(ring.front(), None);
    ///
    /// ring.push_front(1);
    /// assert_eq!(ring.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.element(self.front_slot()).ok()
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// ring is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let slot = self.front_slot();
        self.element_mut(slot).ok()
    }

    /// Provides a reference to the back element, or `None` if the ring is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// assert_eq!(ring.back(), None);
    ///
    /// ring.push_back(1);
    /// assert_eq!(ring.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.element(self.back_slot()).ok()
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// ring is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let slot = self.back_slot();
        self.element_mut(slot).ok()
    }

    /// Adds an element first in the ring.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        self.attach_node(GHOST, self.front_slot(), elt);
    }

    /// Appends an element to the back of the ring, like
    /// `insert_before(end(), elt)`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        self.attach_node(self.back_slot(), GHOST, elt);
    }

    /// Removes the first element and returns it, or `None` if the ring is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::new();
    /// assert_eq!(ring.pop_front(), None);
    ///
    /// ring.push_front(1);
    /// ring.push_front(3);
    /// assert_eq!(ring.pop_front(), Some(3));
    /// assert_eq!(ring.pop_front(), Some(1));
    /// assert_eq!(ring.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_node(self.front_slot()).element)
    }

    /// Removes the last element and returns it, or `None` if the ring is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_node(self.back_slot()).element)
    }

    /// Provides a cursor at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` belongs to another ring or was erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3]);
    /// let pos = ring.find(&2);
    /// assert_eq!(ring.cursor(pos).get(), &2);
    /// assert_eq!((ring.cursor(pos) + 1).get(), &3);
    /// ```
    #[track_caller]
    pub fn cursor(&self, pos: Position) -> Cursor<'_, T> {
        Cursor::new(self, self.checked_slot(pos))
    }

    /// Provides a cursor at the first element (the ghost node if the ring is
    /// empty).
    pub fn cursor_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_slot())
    }

    /// Provides a cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, GHOST)
    }

    /// Provides a cursor with editing operations at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` belongs to another ring or was erased.
    #[track_caller]
    pub fn cursor_mut(&mut self, pos: Position) -> CursorMut<'_, T> {
        let slot = self.checked_slot(pos);
        CursorMut::new(self, slot)
    }

    /// Provides a cursor with editing operations at the first element.
    pub fn cursor_begin_mut(&mut self) -> CursorMut<'_, T> {
        let slot = self.front_slot();
        CursorMut::new(self, slot)
    }

    /// Provides a cursor with editing operations at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, GHOST)
    }

    /// Provides a forward iterator over the elements, from the first to the
    /// last. Unlike cursors it stops at the end instead of wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([0, 1, 2]);
    /// let mut iter = ring.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::from([0, 1, 2]);
    /// for element in ring.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(Vec::from_iter(ring), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Index<usize> for Ring<T> {
    type Output = T;

    /// Same as [`Ring::at`].
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T> IndexMut<usize> for Ring<T> {
    /// Same as [`Ring::at_mut`].
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T> Index<Position> for Ring<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, pos: Position) -> &T {
        match self.try_get(pos) {
            Ok(element) => element,
            Err(err) => contract_violation(err),
        }
    }
}

impl<T> IndexMut<Position> for Ring<T> {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        match self.try_get_mut(pos) {
            Ok(element) => element,
            Err(err) => contract_violation(err),
        }
    }
}

impl<T: Debug> Debug for Ring<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Ring<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cold]
#[track_caller]
pub(crate) fn contract_violation(err: RingError) -> ! {
    panic!("{}", err)
}

// Ensure that `Ring` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: Ring<&'static str>) -> Ring<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
