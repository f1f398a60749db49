use crate::arena::SENTINEL;
use crate::bimap::BiMap;
use crate::compare::Compare;
use crate::entry::Entry;
use std::iter::FusedIterator;
use std::vec;

/// A position in the left ordering of a `BiMap`.
///
/// A position does not borrow the map. It stays valid until the entry it refers to is erased;
/// inserting or erasing other entries does not affect it. Using it afterwards may panic or refer
/// to an unrelated entry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LeftPos(pub(crate) usize);

/// A position in the right ordering of a `BiMap`. See `LeftPos`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RightPos(pub(crate) usize);

impl LeftPos {
    /// Returns `true` if this is the one-past-the-end position of the left ordering.
    pub fn is_end(self) -> bool {
        self.0 == SENTINEL
    }

    /// Returns the position of the same entry in the right ordering, without searching. The end
    /// position flips to the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// let pos = map.insert(1, "a");
    /// assert_eq!(map.right_at(pos.flip()), Some(&"a"));
    /// assert_eq!(pos.flip().flip(), pos);
    /// assert!(map.end_left().flip().is_end());
    /// ```
    pub fn flip(self) -> RightPos {
        RightPos(self.0)
    }
}

impl RightPos {
    /// Returns `true` if this is the one-past-the-end position of the right ordering.
    pub fn is_end(self) -> bool {
        self.0 == SENTINEL
    }

    /// Returns the position of the same entry in the left ordering, without searching. The end
    /// position flips to the end position.
    pub fn flip(self) -> LeftPos {
        LeftPos(self.0)
    }
}

/// An iterator over the pairs of a `BiMap` in left order, yielding `(left, right)`.
pub struct LeftIter<'a, L, R, CL, CR> {
    pub(super) map: &'a BiMap<L, R, CL, CR>,
    pub(super) front: usize,
    pub(super) back: usize,
    pub(super) len: usize,
}

impl<'a, L, R, CL, CR> Iterator for LeftIter<'a, L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let map = self.map;
        let Entry { left, right } = &map.entries[self.front];
        self.front = map.left_tree.next(&map.entries, self.front);
        self.len -= 1;
        Some((&left.key, &right.key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, L, R, CL, CR> DoubleEndedIterator for LeftIter<'a, L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let map = self.map;
        let Entry { left, right } = &map.entries[self.back];
        self.back = map.left_tree.prev(&map.entries, self.back);
        self.len -= 1;
        Some((&left.key, &right.key))
    }
}

impl<'a, L, R, CL, CR> ExactSizeIterator for LeftIter<'a, L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
}

impl<'a, L, R, CL, CR> FusedIterator for LeftIter<'a, L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
}

impl<'a, L, R, CL, CR> Clone for LeftIter<'a, L, R, CL, CR> {
    fn clone(&self) -> Self {
        LeftIter { ..*self }
    }
}

/// An iterator over the pairs of a `BiMap` in right order, yielding `(right, left)`.
pub struct RightIter<'a, L, R, CL, CR> {
    pub(super) map: &'a BiMap<L, R, CL, CR>,
    pub(super) front: usize,
    pub(super) back: usize,
    pub(super) len: usize,
}

impl<'a, L, R, CL, CR> Iterator for RightIter<'a, L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    type Item = (&'a R, &'a L);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let map = self.map;
        let Entry { left, right } = &map.entries[self.front];
        self.front = map.right_tree.next(&map.entries, self.front);
        self.len -= 1;
        Some((&right.key, &left.key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, L, R, CL, CR> DoubleEndedIterator for RightIter<'a, L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let map = self.map;
        let Entry { left, right } = &map.entries[self.back];
        self.back = map.right_tree.prev(&map.entries, self.back);
        self.len -= 1;
        Some((&right.key, &left.key))
    }
}

impl<'a, L, R, CL, CR> ExactSizeIterator for RightIter<'a, L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
}

impl<'a, L, R, CL, CR> FusedIterator for RightIter<'a, L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
}

impl<'a, L, R, CL, CR> Clone for RightIter<'a, L, R, CL, CR> {
    fn clone(&self) -> Self {
        RightIter { ..*self }
    }
}

/// An owning iterator over the pairs of a `BiMap` in left order.
pub struct IntoIter<L, R> {
    pub(super) pairs: vec::IntoIter<(L, R)>,
}

impl<L, R> Iterator for IntoIter<L, R> {
    type Item = (L, R);

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<L, R> DoubleEndedIterator for IntoIter<L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.pairs.next_back()
    }
}

impl<L, R> ExactSizeIterator for IntoIter<L, R> {}
