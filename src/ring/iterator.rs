use crate::ring::{Ring, GHOST};
use std::fmt;
use std::iter::FusedIterator;
use std::vec;

/// An iterator over the elements of a `Ring`.
///
/// It uses a pair of slots `start..end` to represent a half-open subrange
/// of the ring, where `start` is inclusive and `end` is not. Unlike a
/// [`Cursor`](crate::Cursor) it stops at the ghost node instead of wrapping.
///
/// # Examples
///
/// ```compile_fail
/// use dlring::Ring;
///
/// let mut ring = Ring::from([1, 2, 3]);
/// let mut iter = ring.iter();
///
/// // Won't compile, because ring is already borrowed immutably.
/// ring.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    start: usize,
    end: usize,
    len: usize,
    ring: &'a Ring<T>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>) -> Self {
        Self {
            start: ring.front_slot(),
            end: GHOST,
            len: ring.len(),
            ring,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
            len: self.len,
            ring: self.ring,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let ring = self.ring;
        let node = &ring.nodes[self.start];
        self.start = node.links.next;
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let ring = self.ring;
        self.end = ring.prev_slot(self.end);
        self.len -= 1;
        Some(&ring.nodes[self.end].element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `Ring`.
///
/// The element references are gathered in ring order up front, which takes
/// *O*(*n*) time and space when the iterator is created.
///
/// # Examples
///
/// `Ring` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use dlring::Ring;
///
/// let mut ring = Ring::from([1, 2, 3]);
/// let mut iter = ring.iter_mut();
/// println!("{:?}", ring.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    elements: vec::IntoIter<&'a mut T>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(ring: &'a mut Ring<T>) -> Self {
        let order: Vec<usize> = ring.iter_slots().collect();
        let mut by_slot: Vec<Option<&'a mut T>> = Vec::new();
        for (slot, node) in ring.nodes.iter_mut() {
            if slot >= by_slot.len() {
                by_slot.resize_with(slot + 1, || None);
            }
            by_slot[slot] = Some(&mut node.element);
        }
        let elements: Vec<&'a mut T> = order
            .into_iter()
            .filter_map(|slot| by_slot[slot].take())
            .collect();
        Self {
            elements: elements.into_iter(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.elements.as_slice())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

/// An owning iterator over the elements of a `Ring`.
///
/// This `struct` is created by the [`into_iter`] method on [`Ring`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: Ring::into_iter
pub struct IntoIter<T> {
    ring: Ring<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("ring", &self.ring)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ring.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.ring.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ring.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Ring<T> {
    /// Slots of the real nodes, front to back.
    pub(crate) fn iter_slots(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.front_slot()), move |&slot| {
            Some(self.next_slot(slot))
        })
        .take_while(|&slot| slot != GHOST)
    }
}

impl<T> IntoIterator for Ring<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { ring: self }
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Ring<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        iter.for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Ring<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for Ring<T> {
    /// Build a ring holding the array elements in order.
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3]);
    /// assert_eq!(ring.front(), Some(&1));
    /// assert_eq!(ring.back(), Some(&3));
    /// ```
    fn from(array: [T; N]) -> Self {
        Ring::from_iter(array)
    }
}

#[cfg(test)]
mod tests {
    use crate::Ring;
    use std::fmt::Debug;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident $(, $REV:ident)?) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut ring = Ring::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = ring.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )?.enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);

                    let mut iter = ring.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )? .take(mid).enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    let mut iter = iter.rev();
                    for (i, item) in vec.$ITER() $( .$REV() )? .skip(mid).rev().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - mid - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);
        test_iter!(test_back_iter, iter, rev);
        test_iter!(test_back_iter_mut, iter_mut, rev);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_iter_mut(input.clone(), mid);
            test_back_iter(input.clone(), mid);
            test_back_iter_mut(input.clone(), mid);
        }
        test_case(0..10, 10);
        test_case(0..10, 8);
        test_case(0..10, 5);
        test_case(0..10, 2);
        test_case(0..10, 0);
        test_case(0..2, 2);
        test_case(0..2, 1);
        test_case(0..2, 0);
        test_case(0..1, 1);
        test_case(0..1, 0);
        test_case(0..0, 0);
    }

    #[test]
    fn iter_mut_follows_links_not_slots() {
        let mut ring = Ring::from([2, 3]);
        // the freed slot of 2 is reused for the new front element
        let two = ring.begin();
        ring.erase(two);
        ring.push_front(1);
        ring.push_back(4);
        for (i, element) in ring.iter_mut().enumerate() {
            *element *= 10 + i as i32;
        }
        assert_eq!(Vec::from_iter(ring.iter().copied()), vec![10, 33, 48]);
        assert_eq!(format!("{:?}", ring.iter_mut()), "IterMut([10, 33, 48])");
    }

    #[test]
    fn into_iter_from_both_ends() {
        let ring = Ring::from_iter("abcd".chars());
        let mut iter = ring.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.next_back(), Some('d'));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.last(), Some('c'));
    }

    #[test]
    fn extend_by_reference() {
        let mut ring = Ring::from([1]);
        ring.extend(&[2, 3]);
        ring.extend(vec![4]);
        assert_eq!(Vec::from_iter(&ring), vec![&1, &2, &3, &4]);
        assert_eq!(format!("{:?}", ring.iter()), "Iter([1, 2, 3, 4])");
    }
}
