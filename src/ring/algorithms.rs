use crate::ring::{Position, Ring, GHOST};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for Ring<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Ring<T> {}

impl<T: PartialOrd> PartialOrd for Ring<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for Ring<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Deep copy into a ring with its own [`RingId`](crate::RingId), so positions
/// of the source are foreign to the copy.
impl<T: Clone> Clone for Ring<T> {
    fn clone(&self) -> Self {
        let mut ring = Ring::with_capacity(self.len());
        ring.extend(self.iter().cloned());
        ring
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for Ring<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Formats the elements as `{ a,b,c, }`, every element followed by a comma;
/// an empty ring is `{  }`.
impl<T: fmt::Display> fmt::Display for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for elt in self {
            write!(f, "{},", elt)?;
        }
        f.write_str(" }")
    }
}

impl<T> Ring<T> {
    /// Returns `true` if the `Ring` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let mut ring = Ring::new();
    ///
    /// ring.push_back(0);
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.contains(&0), true);
    /// assert_eq!(ring.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Position of the first element equal to `x`, or [`Ring::end`] if there
    /// is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlring::Ring;
    ///
    /// let ring = Ring::from([1, 2, 3, 2]);
    /// assert_eq!(ring.find(&1), ring.begin());
    /// assert_eq!(ring.find(&2), ring.next(ring.begin()));
    /// assert_eq!(ring.find(&6), ring.end());
    /// ```
    pub fn find(&self, x: &T) -> Position
    where
        T: PartialEq<T>,
    {
        self.find_by(|e| e == x)
    }

    /// Position of the first element for which `pred` returns `true`, or
    /// [`Ring::end`] if there is none.
    pub fn find_by<F>(&self, mut pred: F) -> Position
    where
        F: FnMut(&T) -> bool,
    {
        let slot = self
            .iter_slots()
            .find(|&slot| pred(&self.nodes[slot].element))
            .unwrap_or(GHOST);
        self.position_of(slot)
    }
}

#[cfg(test)]
mod tests {
    use crate::Ring;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn ring_display() {
        assert_eq!(Ring::from([1, 2, 3]).to_string(), "{ 1,2,3, }");
        assert_eq!(Ring::from(["x"]).to_string(), "{ x, }");
        assert_eq!(Ring::<i32>::new().to_string(), "{  }");
        assert_eq!(format!("{:?}", Ring::from([1, 2])), "[1, 2]");
    }

    #[test]
    fn ring_compare_and_hash() {
        let a = Ring::from([1, 2, 3]);
        let b = Ring::from([1, 2, 3]);
        let c = Ring::from([1, 2, 4]);
        let d = Ring::from([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(d < a);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(Ring::<u8>::default(), Ring::new());
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = Ring::from([1, 2, 3]);
        let mut target = Ring::from([9, 9, 9, 9, 9]);
        let id = target.id();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.id(), id);

        let mut target = Ring::from([9]);
        target.clone_from(&source);
        assert_eq!(Vec::from_iter(target), vec![1, 2, 3]);
    }

    #[test]
    fn find_by_predicate() {
        let ring = Ring::from(["apple", "banana", "cherry"]);
        let pos = ring.find_by(|s| s.starts_with('b'));
        assert_eq!(ring[pos], "banana");
        assert!(ring.find_by(|s| s.is_empty()).is_end());
    }

    proptest! {
        #[test]
        fn clones_are_independent(values in proptest::collection::vec(any::<i16>(), 0..32)) {
            let original = Ring::from_iter(values.iter().copied());
            let mut copy = original.clone();
            prop_assert_eq!(&copy, &original);
            prop_assert_ne!(copy.id(), original.id());
            prop_assert!(!copy.is_valid(original.begin()));

            copy.push_back(0);
            copy.iter_mut().for_each(|v| *v = v.wrapping_add(1));
            prop_assert_eq!(Vec::from_iter(original.iter().copied()), values);
            prop_assert_eq!(copy.len(), original.len() + 1);
        }
    }

    /// End-to-end walk through the public contract.
    mod contract {
        use crate::Ring;

        #[test]
        fn new_ring_is_empty() {
            let ring = Ring::<i32>::new();
            assert!(ring.is_empty());
            assert_eq!(ring.len(), 0);
            assert_eq!(ring.begin(), ring.end());
        }

        #[test]
        fn insertions_index_and_shift() {
            let mut ring = Ring::new();
            let inserted_at = ring.insert_before(ring.end(), 1);
            assert!(!ring.is_empty());
            assert_eq!(ring.len(), 1);
            assert_ne!(ring.begin(), ring.end());
            assert_eq!(ring.cursor_begin().get(), &1);
            assert_eq!(ring.at(0), &1);
            assert_eq!(ring[0], 1);

            ring.insert_after(inserted_at, 2);
            assert_eq!(ring.len(), 2);
            assert_eq!((ring.cursor_begin() + 1).get(), &2);
            assert_eq!(ring.at(1), &2);
            assert_eq!(ring[1], 2);

            let (x, y) = (3, 4);
            let pos2 = ring.insert_before(ring.end(), x);
            ring.insert_after(pos2, y);
            assert_eq!(ring[2], 3);
            assert_eq!(ring[3], 4);
            assert_eq!(ring.cursor_end(), ring.cursor_begin() + 4);
        }

        #[test]
        fn overwrite_through_index() {
            let mut ring = Ring::from([1, 2, 3, 4, 5]);
            let slot = &mut ring[0];
            *slot = 0;
            assert_eq!(ring[0], 0);
        }

        #[test]
        fn find_like_std_find() {
            let ring = Ring::from([1, 2, 3, 4, 5]);
            assert_eq!(ring.find(&1), ring.begin());
            assert_eq!(ring.find(&6), ring.end());
        }

        #[test]
        fn distance_between_nodes() {
            let ring = Ring::from([1, 2, 3, 4, 5]);
            let a = ring.cursor(ring.find(&1));
            let b = ring.cursor(ring.find(&2));
            let (begin, end) = (ring.cursor_begin(), ring.cursor_end());
            let len = ring.len() as isize;

            assert_eq!(end - begin, Ok(len));
            assert_eq!(a - begin, Ok(0));
            assert_eq!(b - begin, Ok(1));
            assert_eq!(begin - b, Ok(len));

            assert_eq!(ring.distance(ring.end(), ring.begin()), Ok(len));
            assert_eq!(ring.distance(ring.begin(), ring.end()), Ok(-len));
            assert_eq!(ring.distance(a.position(), ring.begin()), Ok(0));
            assert_eq!(ring.distance(b.position(), ring.begin()), Ok(1));
        }

        #[test]
        fn copies_are_equal() {
            let ring = Ring::from([1, 2, 3, 4, 5]);
            let ring2 = ring.clone();
            let mut ring3 = Ring::new();
            ring3.clone_from(&ring);
            assert!(ring.iter().eq(ring2.iter()));
            assert!(ring.iter().eq(ring3.iter()));
        }
    }
}
