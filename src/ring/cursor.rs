use crate::error::{Result, RingError};
use crate::ring::{contract_violation, Position, Ring, GHOST};
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A cursor over a `Ring`.
///
/// A `Cursor` is a bidirectional iterator that never runs out: moving forward
/// from the last element reaches the end (the ghost node), and moving forward
/// once more reaches the first element again.
///
/// In a ring with length *n*, there are *n* + 1 locations for the cursor,
/// and offsetting by any multiple of *n* + 1 returns to the same location.
///
/// `Cursor` is `Copy`, so the postfix idiom is just a copy followed by a move.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// ring is denoted by `#`).
/// ```
/// use dlring::Ring;
///
/// // Create a ring: [ A B C D #]
/// let ring = Ring::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at the beginning: [|A B C D #]
/// let mut cursor = ring.cursor_begin();
/// assert_eq!(cursor.get(), &'A');
///
/// // Move forward, keeping the old place: [ A|B C D #]
/// let old = cursor;
/// cursor.move_next();
/// assert_eq!((old.get(), cursor.get()), (&'A', &'B'));
///
/// // Move backward twice, passing through the ghost node: [ A B C D|#]
/// cursor -= 2;
/// assert!(cursor.is_end());
/// assert_eq!(cursor.current(), None);
///
/// // Distances are counted forward: [|A B C D #] to [ A B C D|#]
/// assert_eq!(cursor - ring.cursor_begin(), Ok(4));
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) slot: usize,
    pub(crate) ring: &'a Ring<T>,
}

/// A cursor over a `Ring` with editing operations.
///
/// A `CursorMut` moves like a [`Cursor`], and can also insert and remove
/// elements around its location. The lifetime of the references it yields
/// is tied to its own lifetime, so it cannot yield multiple elements at once.
///
/// [`CursorMut::view`] temporarily borrows the ring immutably while the
/// cursor is alive.
///
/// # Examples
///
/// ```compile_fail
/// use dlring::Ring;
///
/// let mut ring = Ring::from([1, 2, 3]);
/// let mut cursor = ring.cursor_begin_mut();
/// println!("{:?}", ring.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) slot: usize,
    pub(crate) ring: &'a mut Ring<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn step_back(&mut self, steps: isize) {
                self.slot = self
                    .ring
                    .step_slot(self.slot, steps.unsigned_abs(), steps < 0);
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The detached position of the cursor, usable with the
            /// `Ring` methods once the cursor is gone.
            pub fn position(&self) -> Position {
                self.ring.position_of(self.slot)
            }

            /// Returns `true` if the cursor is at the ghost node.
            #[inline]
            pub fn is_end(&self) -> bool {
                self.slot == GHOST
            }

            /// Move the cursor one step forward; from the last element to the
            /// ghost node, and from the ghost node to the first element.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_next(&mut self) {
                self.slot = self.ring.next_slot(self.slot);
            }

            /// Move the cursor one step backward; from the first element to the
            /// ghost node, and from the ghost node to the last element.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_prev(&mut self) {
                self.slot = self.ring.prev_slot(self.slot);
            }

            /// Move the cursor `steps` steps forward (backward if negative).
            ///
            /// This operation should compute in *O*(|`steps`|) time.
            pub fn seek(&mut self, steps: isize) {
                self.slot = self.ring.offset_slot(self.slot, steps);
            }
        }

        impl<'a, T: 'a> AddAssign<isize> for $CURSOR<'a, T> {
            fn add_assign(&mut self, steps: isize) {
                self.seek(steps);
            }
        }

        impl<'a, T: 'a> SubAssign<isize> for $CURSOR<'a, T> {
            fn sub_assign(&mut self, steps: isize) {
                self.step_back(steps);
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("ring", &self.ring.id())
                    .field("position", &self.position())
                    .field("current", &self.ring.element(self.slot).ok())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>, slot: usize) -> Self {
        Self { slot, ring }
    }

    fn same_ring_with(&self, other: &Cursor<'_, T>) -> bool {
        self.ring.id() == other.ring.id()
    }

    /// The ring the cursor walks over.
    pub fn view(&self) -> &'a Ring<T> {
        self.ring
    }

    /// Return an immutable reference of the element at the cursor,
    /// or `None` if it is at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3]);
    /// assert_eq!((ring.cursor_begin() + 2).current(), Some(&3));
    /// assert_eq!(ring.cursor_end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        self.ring.element(self.slot).ok()
    }

    /// Return an immutable reference of the element at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the ghost node, which holds no element.
    ///
    /// ```should_panic
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3]);
    /// ring.cursor_end().get();
    /// ```
    #[track_caller]
    pub fn get(&self) -> &'a T {
        match self.ring.element(self.slot) {
            Ok(element) => element,
            Err(err) => contract_violation(err),
        }
    }

    /// Return the element after the cursor without moving it, or `None` if
    /// the next node is the ghost node.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.ring.element(self.ring.next_slot(self.slot)).ok()
    }

    /// Return the element before the cursor without moving it, or `None` if
    /// the previous node is the ghost node.
    pub fn peek_prev(&self) -> Option<&'a T> {
        self.ring.element(self.ring.prev_slot(self.slot)).ok()
    }

    /// A new cursor `steps` steps away (backward if negative). Same as
    /// `self + steps`.
    ///
    /// This operation should compute in *O*(|`steps`|) time.
    pub fn offset(&self, steps: isize) -> Self {
        let mut cursor = *self;
        cursor.seek(steps);
        cursor
    }

    /// Signed number of forward steps from `origin` to `self`.
    ///
    /// From the beginning to the end this is `len()`, and from the end to the
    /// beginning it is `-len()`. Any other pair is counted by walking forward
    /// from `origin`, so it lies in `0..=len()`.
    ///
    /// # Errors
    ///
    /// [`RingError::MismatchedRings`] if the cursors walk different rings.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3, 4, 5]);
    /// let b = ring.cursor_begin() + 1;
    /// assert_eq!(b.distance_from(&ring.cursor_begin()), Ok(1));
    /// // walking forward from b to the beginning wraps through the end
    /// assert_eq!(ring.cursor_begin().distance_from(&b), Ok(5));
    /// ```
    pub fn distance_from(&self, origin: &Cursor<'_, T>) -> Result<isize> {
        if !self.same_ring_with(origin) {
            return Err(RingError::MismatchedRings {
                left: self.ring.id(),
                right: origin.ring.id(),
            });
        }
        Ok(self.ring.slot_distance(self.slot, origin.slot))
    }
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by their position.
///
/// Only cursors over the same ring at the same node are considered equal.
///
/// # Examples
/// ```
/// use dlring::Ring;
///
/// let ring = Ring::from([1, 2, 3]);
/// let cursor1 = ring.cursor_begin();
/// let mut cursor2 = cursor1;
/// // The same ring, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next();
/// // The same ring, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_ring = ring.clone();
/// let cursor3 = another_ring.cursor_begin();
/// // Equal contents, but a different ring.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.same_ring_with(other) && self.slot == other.slot
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T: 'a> Add<isize> for Cursor<'a, T> {
    type Output = Self;

    fn add(mut self, steps: isize) -> Self {
        self += steps;
        self
    }
}

impl<'a, T: 'a> Sub<isize> for Cursor<'a, T> {
    type Output = Self;

    fn sub(mut self, steps: isize) -> Self {
        self -= steps;
        self
    }
}

/// Distance between two cursors, see [`Cursor::distance_from`].
impl<'a, 'b, T> Sub<Cursor<'b, T>> for Cursor<'a, T> {
    type Output = Result<isize>;

    fn sub(self, origin: Cursor<'b, T>) -> Result<isize> {
        self.distance_from(&origin)
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(ring: &'a mut Ring<T>, slot: usize) -> Self {
        Self { slot, ring }
    }
}

// Methods that does not change the linking structure of the ring.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference of the element at the cursor,
    /// or `None` if it is at the ghost node.
    pub fn current(&self) -> Option<&T> {
        self.ring.element(self.slot).ok()
    }

    /// Return a mutable reference of the element at the cursor,
    /// or `None` if it is at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::from([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element in the current node.
    /// let mut cursor = ring.cursor_begin_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the ghost node.
    /// assert!(ring.cursor_end_mut().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.ring.element_mut(self.slot).ok()
    }

    /// Return the element after the cursor without moving it, or `None` if
    /// the next node is the ghost node.
    pub fn peek_next(&self) -> Option<&T> {
        self.ring.element(self.ring.next_slot(self.slot)).ok()
    }

    /// Return the element before the cursor without moving it, or `None` if
    /// the previous node is the ghost node.
    pub fn peek_prev(&self) -> Option<&T> {
        self.ring.element(self.ring.prev_slot(self.slot)).ok()
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.ring, self.slot)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.ring, self.slot)
    }

    /// Temporarily view the ring via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::from([1, 2, 3]);
    /// let mut cursor = ring.cursor_begin_mut();
    ///
    /// // Temporarily view the ring
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert_before(4);
    /// assert_eq!(Vec::from_iter(ring), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &Ring<T> {
        self.ring
    }
}

// Methods that might change the linking structure of the ring.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element after the cursor and return its position. The cursor
    /// stays put.
    ///
    /// At the ghost node this prepends.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::from([1, 3]);
    /// let mut cursor = ring.cursor_begin_mut();
    /// cursor.insert_after(2);
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// cursor.seek(-1);
    /// cursor.insert_after(0);
    /// assert_eq!(Vec::from_iter(ring), vec![0, 1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, item: T) -> Position {
        let next = self.ring.next_slot(self.slot);
        let slot = self.ring.attach_node(self.slot, next, item);
        self.ring.position_of(slot)
    }

    /// Add an element before the cursor and return its position. The cursor
    /// stays put.
    ///
    /// At the ghost node this appends.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert_before(&mut self, item: T) -> Position {
        let prev = self.ring.prev_slot(self.slot);
        let slot = self.ring.attach_node(prev, self.slot, item);
        self.ring.position_of(slot)
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node unless no removing is happened.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::from_iter(0..10);
    /// let mut cursor = ring.cursor_begin_mut();
    /// cursor += 5;
    ///
    /// assert_eq!(cursor.remove(), Some(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor -= 6;
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor.remove(), None);
    ///
    /// assert_eq!(Vec::from_iter(ring), vec![0, 1, 2, 3, 4, 6, 7, 8, 9]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_end() {
            return None;
        }
        let node = self.ring.detach_node(self.slot);
        self.slot = node.links.next;
        Some(node.element)
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RingError;
    use crate::ring::Ring;
    use rstest::rstest;

    #[test]
    fn cursor_wraps_both_ways() {
        let ring = Ring::from([1, 2, 3]);
        let mut cursor = ring.cursor_begin();
        for expected in [Some(&2), Some(&3), None, Some(&1)] {
            cursor.move_next();
            assert_eq!(cursor.current(), expected);
        }
        for expected in [None, Some(&3), Some(&2), Some(&1)] {
            cursor.move_prev();
            assert_eq!(cursor.current(), expected);
        }
    }

    #[test]
    fn cursor_on_empty_ring_stays_at_end() {
        let ring = Ring::<i32>::new();
        let mut cursor = ring.cursor_begin();
        assert!(cursor.is_end());
        cursor.move_next();
        assert_eq!(cursor, ring.cursor_end());
        cursor -= 7;
        assert_eq!(cursor, ring.cursor_end());
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor - ring.cursor_begin(), Ok(0));
    }

    #[test]
    fn postfix_idiom_keeps_the_old_place() {
        let ring = Ring::from(['a', 'b']);
        let mut cursor = ring.cursor_begin();
        let old = cursor;
        cursor.move_next();
        assert_eq!(old.get(), &'a');
        assert_eq!(cursor.get(), &'b');
        assert_eq!(cursor.peek_prev(), Some(&'a'));
        assert_eq!(cursor.peek_next(), None);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    #[case(-3)]
    #[case(11)]
    fn add_then_sub_is_identity(#[case] steps: isize) {
        let ring = Ring::from([1, 2, 3, 4]);
        let begin = ring.cursor_begin();
        assert_eq!(begin + steps - steps, begin);
        assert_eq!(begin.offset(steps), begin + steps);
        assert_eq!(begin - (-steps), begin + steps);
        let mut cursor = begin;
        cursor += steps;
        assert_eq!(cursor, begin + steps);
    }

    #[test]
    fn cursor_distances() {
        let ring = Ring::from([1, 2, 3, 4, 5]);
        let begin = ring.cursor_begin();
        let end = ring.cursor_end();
        let b = begin + 1;
        assert_eq!(end - begin, Ok(5));
        assert_eq!(begin - end, Ok(-5));
        assert_eq!(b - begin, Ok(1));
        assert_eq!(begin - b, Ok(5));
        assert_eq!(end - b, Ok(4));
        assert_eq!(b - b, Ok(0));
    }

    #[test]
    fn distance_between_rings_is_rejected() {
        let a = Ring::from([1, 2]);
        let b = a.clone();
        assert_eq!(
            a.cursor_end() - b.cursor_begin(),
            Err(RingError::MismatchedRings {
                left: a.id(),
                right: b.id()
            })
        );
    }

    #[test]
    #[should_panic(expected = "holds no element")]
    fn get_at_end_panics() {
        let ring = Ring::from([1]);
        (ring.cursor_begin() + 1).get();
    }

    #[test]
    fn cursor_mut_edits_around_itself() {
        let mut ring = Ring::from([2, 4]);
        let mut cursor = ring.cursor_begin_mut();
        cursor.insert_before(1);
        let three = cursor.insert_after(3);
        assert_eq!(cursor.current(), Some(&2));
        cursor.move_next();
        assert_eq!(cursor.position(), three);
        assert_eq!(cursor.remove(), Some(3));
        assert_eq!(cursor.current(), Some(&4));
        assert_eq!(cursor.remove(), Some(4));
        assert!(cursor.is_end());
        cursor.insert_before(5);
        assert_eq!(cursor.peek_prev(), Some(&5));
        let cursor = cursor.into_cursor();
        assert_eq!(cursor.view().len(), 3);
        assert_eq!(Vec::from_iter(ring.iter().copied()), vec![1, 2, 5]);
        assert!(!ring.is_valid(three));
    }

    #[test]
    fn cursor_mut_positions_resolve() {
        let mut ring = Ring::from([1, 2, 3]);
        let pos = ring.find(&2);
        let mut cursor = ring.cursor_mut(pos);
        *cursor.current_mut().unwrap() = 20;
        cursor += 2;
        assert!(cursor.is_end());
        assert_eq!(cursor.as_cursor() - cursor.view().cursor_begin(), Ok(3));
        assert_eq!(ring[pos], 20);
    }
}
