use crate::arena::{Arena, SENTINEL};
use crate::bimap::iter::{IntoIter, LeftIter, LeftPos, RightIter, RightPos};
use crate::compare::{Compare, Natural};
use crate::entry::{Entry, LeftSide, RightSide};
use crate::error::{Error, Result};
use crate::treap::Treap;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::fmt;
use std::iter::FromIterator;

const DEFAULT_SEED: u64 = 0x2545_f491_4f6c_dd1d;

/// An ordered bijective map implemented by two treaps that share their nodes.
///
/// Every pair is stored once, in an arena record holding a node body for a treap ordered by the
/// left keys and a node body for a treap ordered by the right keys. A left key maps to exactly one
/// right key and vice versa. Lookups, insertions and removals from either side take expected
/// `O(log N)` time, and translating a position in one ordering into the position of the same pair
/// in the other ordering (`LeftPos::flip`, `RightPos::flip`) takes `O(1)` time.
///
/// The two orders are supplied as `Compare` implementations and default to `Ord`.
///
/// # Examples
///
/// ```
/// use treap_bimap::BiMap;
///
/// let mut map = BiMap::new();
/// map.insert(1, "a");
/// map.insert(2, "b");
///
/// assert_eq!(map.at_left(&1), Ok(&"a"));
/// assert_eq!(map.at_right(&"b"), Ok(&2));
/// assert!(map.insert(1, "c").is_end());
/// assert_eq!(map.len(), 2);
///
/// let pos = map.find_right(&"b");
/// assert_eq!(map.left_at(pos.flip()), Some(&2));
///
/// assert!(map.erase_left(&2));
/// assert!(map.find_right(&"b").is_end());
/// ```
pub struct BiMap<L, R, CL = Natural, CR = Natural> {
    pub(super) entries: Arena<Entry<L, R>>,
    pub(super) left_tree: Treap<LeftSide<L, R>, CL>,
    pub(super) right_tree: Treap<RightSide<L, R>, CR>,
    rng: SmallRng,
    len: usize,
}

impl<L, R> BiMap<L, R>
where
    L: Ord,
    R: Ord,
{
    /// Constructs a new, empty `BiMap<L, R>` ordered by `Ord` on both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let map: BiMap<u32, String> = BiMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparators(Natural, Natural)
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Constructs a new, empty `BiMap` ordering left keys by `left_cmp` and right keys by
    /// `right_cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    /// use treap_bimap::compare::Natural;
    ///
    /// let mut map = BiMap::with_comparators(|a: &u32, b: &u32| b < a, Natural);
    /// map.insert(1, 'a');
    /// map.insert(2, 'b');
    /// assert_eq!(map.iter_left().next(), Some((&2, &'b')));
    /// ```
    pub fn with_comparators(left_cmp: CL, right_cmp: CR) -> Self {
        BiMap {
            entries: Arena::new(),
            left_tree: Treap::new(left_cmp),
            right_tree: Treap::new(right_cmp),
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
            len: 0,
        }
    }

    /// Reseeds the generator that draws node priorities. Only the shape of the trees depends on
    /// it.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Inserts a pair and returns its left position. If `left` or `right` is already mapped,
    /// nothing changes and the end position is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// assert!(!map.insert(1, 'a').is_end());
    /// assert!(map.insert(1, 'b').is_end());
    /// assert!(map.insert(2, 'a').is_end());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, left: L, right: R) -> LeftPos {
        match self.try_insert(left, right) {
            Ok(pos) => pos,
            Err(error) => {
                trace!("rejected insert: {}", error);
                self.end_left()
            }
        }
    }

    /// Inserts a pair and returns its left position, or reports which side is already mapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::{BiMap, Error};
    ///
    /// let mut map = BiMap::new();
    /// assert!(map.try_insert(1, 'a').is_ok());
    /// assert_eq!(map.try_insert(1, 'b'), Err(Error::DuplicateLeft));
    /// assert_eq!(map.try_insert(2, 'a'), Err(Error::DuplicateRight));
    /// ```
    pub fn try_insert(&mut self, left: L, right: R) -> Result<LeftPos> {
        if self.left_tree.find(&self.entries, &left) != SENTINEL {
            return Err(Error::DuplicateLeft);
        }
        if self.right_tree.find(&self.entries, &right) != SENTINEL {
            return Err(Error::DuplicateRight);
        }
        let entry = Entry::new(left, right, self.rng.next_u32(), self.rng.next_u32());
        let index = self.entries.allocate(entry);
        self.left_tree.insert(&mut self.entries, index);
        self.right_tree.insert(&mut self.entries, index);
        self.len += 1;
        Ok(LeftPos(index))
    }

    /// Erases the pair at a left position and returns the position that followed it. Returns
    /// `None` if `pos` is the end position.
    ///
    /// # Panics
    ///
    /// Panics if the pair at `pos` was already erased.
    pub fn erase_left_at(&mut self, pos: LeftPos) -> Option<LeftPos> {
        if pos.is_end() {
            return None;
        }
        let next = self.left_tree.next(&self.entries, pos.0);
        self.left_tree.remove(&mut self.entries, pos.0);
        self.right_tree.remove(&mut self.entries, pos.flip().0);
        self.entries.free(pos.0);
        self.len -= 1;
        Some(LeftPos(next))
    }

    /// Erases the pair at a right position and returns the position that followed it. Returns
    /// `None` if `pos` is the end position.
    ///
    /// # Panics
    ///
    /// Panics if the pair at `pos` was already erased.
    pub fn erase_right_at(&mut self, pos: RightPos) -> Option<RightPos> {
        if pos.is_end() {
            return None;
        }
        let next = self.right_tree.next(&self.entries, pos.0);
        self.erase_left_at(pos.flip());
        Some(RightPos(next))
    }

    /// Erases the pair with a particular left key. Returns `true` if such a pair existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// assert!(map.erase_left(&1));
    /// assert!(!map.erase_left(&1));
    /// assert!(!map.contains_right(&'a'));
    /// ```
    pub fn erase_left(&mut self, key: &L) -> bool {
        let pos = self.find_left(key);
        self.erase_left_at(pos).is_some()
    }

    /// Erases the pair with a particular right key. Returns `true` if such a pair existed.
    pub fn erase_right(&mut self, key: &R) -> bool {
        let pos = self.find_right(key);
        self.erase_right_at(pos).is_some()
    }

    /// Erases every pair from `first` up to, but not including, `last` in left order, and returns
    /// `last`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map: BiMap<u32, u32> = (0..10).map(|i| (i, i * 10)).collect();
    /// let first = map.lower_bound_left(&2);
    /// let last = map.lower_bound_left(&8);
    /// map.erase_left_range(first, last);
    /// assert_eq!(map.left_values().cloned().collect::<Vec<u32>>(), vec![0, 1, 8, 9]);
    /// ```
    pub fn erase_left_range(&mut self, mut first: LeftPos, last: LeftPos) -> LeftPos {
        while first != last {
            match self.erase_left_at(first) {
                Some(next) => first = next,
                None => break,
            }
        }
        last
    }

    /// Erases every pair from `first` up to, but not including, `last` in right order, and
    /// returns `last`.
    pub fn erase_right_range(&mut self, mut first: RightPos, last: RightPos) -> RightPos {
        while first != last {
            match self.erase_right_at(first) {
                Some(next) => first = next,
                None => break,
            }
        }
        last
    }

    /// Returns the left position of a particular left key, or the end position if it is absent.
    pub fn find_left(&self, key: &L) -> LeftPos {
        LeftPos(self.left_tree.find(&self.entries, key))
    }

    /// Returns the right position of a particular right key, or the end position if it is
    /// absent.
    pub fn find_right(&self, key: &R) -> RightPos {
        RightPos(self.right_tree.find(&self.entries, key))
    }

    pub fn contains_left(&self, key: &L) -> bool {
        !self.find_left(key).is_end()
    }

    pub fn contains_right(&self, key: &R) -> bool {
        !self.find_right(key).is_end()
    }

    /// Returns the right key mapped to a particular left key.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKey` if the left key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::{BiMap, Error};
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// assert_eq!(map.at_left(&1), Ok(&'a'));
    /// assert_eq!(map.at_left(&2), Err(Error::MissingKey));
    /// ```
    pub fn at_left(&self, key: &L) -> Result<&R> {
        self.entries
            .get(self.left_tree.find(&self.entries, key))
            .map(|entry| &entry.right.key)
            .ok_or(Error::MissingKey)
    }

    /// Returns the left key mapped to a particular right key.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKey` if the right key is absent.
    pub fn at_right(&self, key: &R) -> Result<&L> {
        self.entries
            .get(self.right_tree.find(&self.entries, key))
            .map(|entry| &entry.left.key)
            .ok_or(Error::MissingKey)
    }

    pub fn get_left(&self, key: &L) -> Option<&R> {
        self.at_left(key).ok()
    }

    pub fn get_right(&self, key: &R) -> Option<&L> {
        self.at_right(key).ok()
    }

    /// Returns the right key mapped to a particular left key, mapping the left key to
    /// `R::default()` first if it is absent.
    ///
    /// If `R::default()` is already mapped to another left key, that pair is erased to make room.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(0, String::new());
    /// assert_eq!(map.at_left_or_default(&5), "");
    /// assert!(!map.contains_left(&0));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn at_left_or_default(&mut self, key: &L) -> &R
    where
        L: Clone,
        R: Default,
    {
        let mut index = self.left_tree.find(&self.entries, key);
        if index == SENTINEL {
            let default = R::default();
            let holder = self.find_right(&default);
            if !holder.is_end() {
                debug!("evicting the pair mapped to the default right key");
                self.erase_right_at(holder);
            }
            index = self.insert(key.clone(), default).0;
        }
        &self.entries[index].right.key
    }

    /// Returns the left key mapped to a particular right key, mapping the right key to
    /// `L::default()` first if it is absent.
    ///
    /// If `L::default()` is already mapped to another right key, that pair is erased to make room.
    pub fn at_right_or_default(&mut self, key: &R) -> &L
    where
        L: Default,
        R: Clone,
    {
        let mut index = self.right_tree.find(&self.entries, key);
        if index == SENTINEL {
            let default = L::default();
            let holder = self.find_left(&default);
            if !holder.is_end() {
                debug!("evicting the pair mapped to the default left key");
                self.erase_left_at(holder);
            }
            index = self.insert(default, key.clone()).0;
        }
        &self.entries[index].left.key
    }

    /// Returns the first left position whose key is not ordered before `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// map.insert(3, 'b');
    /// assert_eq!(map.left_at(map.lower_bound_left(&1)), Some(&1));
    /// assert_eq!(map.left_at(map.lower_bound_left(&2)), Some(&3));
    /// assert!(map.lower_bound_left(&4).is_end());
    /// ```
    pub fn lower_bound_left(&self, key: &L) -> LeftPos {
        LeftPos(self.left_tree.lower_bound(&self.entries, key))
    }

    /// Returns the first left position whose key is ordered after `key`.
    pub fn upper_bound_left(&self, key: &L) -> LeftPos {
        LeftPos(self.left_tree.upper_bound(&self.entries, key))
    }

    /// Returns the first right position whose key is not ordered before `key`.
    pub fn lower_bound_right(&self, key: &R) -> RightPos {
        RightPos(self.right_tree.lower_bound(&self.entries, key))
    }

    /// Returns the first right position whose key is ordered after `key`.
    pub fn upper_bound_right(&self, key: &R) -> RightPos {
        RightPos(self.right_tree.upper_bound(&self.entries, key))
    }

    pub fn begin_left(&self) -> LeftPos {
        LeftPos(self.left_tree.first(&self.entries))
    }

    pub fn end_left(&self) -> LeftPos {
        LeftPos(SENTINEL)
    }

    pub fn begin_right(&self) -> RightPos {
        RightPos(self.right_tree.first(&self.entries))
    }

    pub fn end_right(&self) -> RightPos {
        RightPos(SENTINEL)
    }

    /// Returns the left position after `pos`. The last position is followed by the end position,
    /// and the end position by the first position.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// map.insert(2, 'b');
    ///
    /// let mut pos = map.begin_left();
    /// let mut keys = Vec::new();
    /// while !pos.is_end() {
    ///     keys.push(*map.left_at(pos).unwrap());
    ///     pos = map.next_left(pos);
    /// }
    /// assert_eq!(keys, vec![1, 2]);
    /// assert_eq!(map.left_at(map.prev_left(pos)), Some(&2));
    /// ```
    pub fn next_left(&self, pos: LeftPos) -> LeftPos {
        LeftPos(self.left_tree.next(&self.entries, pos.0))
    }

    /// Returns the left position before `pos`. The first position is preceded by the end
    /// position, and the end position by the last position.
    pub fn prev_left(&self, pos: LeftPos) -> LeftPos {
        LeftPos(self.left_tree.prev(&self.entries, pos.0))
    }

    pub fn next_right(&self, pos: RightPos) -> RightPos {
        RightPos(self.right_tree.next(&self.entries, pos.0))
    }

    pub fn prev_right(&self, pos: RightPos) -> RightPos {
        RightPos(self.right_tree.prev(&self.entries, pos.0))
    }

    /// Returns the left key at a left position, or `None` for the end position.
    pub fn left_at(&self, pos: LeftPos) -> Option<&L> {
        self.entries.get(pos.0).map(|entry| &entry.left.key)
    }

    /// Returns the right key at a right position, or `None` for the end position.
    pub fn right_at(&self, pos: RightPos) -> Option<&R> {
        self.entries.get(pos.0).map(|entry| &entry.right.key)
    }

    /// Returns the number of pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the map, removing all pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert!(map.begin_left().is_end());
    /// ```
    pub fn clear(&mut self) {
        self.left_tree.clear();
        self.right_tree.clear();
        self.entries.clear();
        self.len = 0;
    }

    /// Returns an iterator over the pairs of the map in left order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(2, 'a');
    /// map.insert(1, 'b');
    ///
    /// let mut iterator = map.iter_left();
    /// assert_eq!(iterator.next(), Some((&1, &'b')));
    /// assert_eq!(iterator.next(), Some((&2, &'a')));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_left(&self) -> LeftIter<'_, L, R, CL, CR> {
        LeftIter {
            map: self,
            front: self.left_tree.first(&self.entries),
            back: self.left_tree.last(&self.entries),
            len: self.len,
        }
    }

    /// Returns an iterator over the pairs of the map in right order, yielding `(right, left)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(2, 'a');
    /// map.insert(1, 'b');
    ///
    /// let mut iterator = map.iter_right();
    /// assert_eq!(iterator.next(), Some((&'a', &2)));
    /// assert_eq!(iterator.next(), Some((&'b', &1)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_right(&self) -> RightIter<'_, L, R, CL, CR> {
        RightIter {
            map: self,
            front: self.right_tree.first(&self.entries),
            back: self.right_tree.last(&self.entries),
            len: self.len,
        }
    }

    /// Returns an iterator over the left keys in left order.
    pub fn left_values(&self) -> impl DoubleEndedIterator<Item = &L> + '_ {
        self.iter_left().map(|(left, _)| left)
    }

    /// Returns an iterator over the right keys in right order.
    pub fn right_values(&self) -> impl DoubleEndedIterator<Item = &R> + '_ {
        self.iter_right().map(|(right, _)| right)
    }
}

impl<L, R, CL, CR> Default for BiMap<L, R, CL, CR>
where
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn default() -> Self {
        Self::with_comparators(CL::default(), CR::default())
    }
}

impl<L, R, CL, CR> Clone for BiMap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Compare<L> + Clone,
    CR: Compare<R> + Clone,
{
    fn clone(&self) -> Self {
        let mut map = BiMap::with_comparators(
            self.left_tree.comparator().clone(),
            self.right_tree.comparator().clone(),
        );
        map.rng = self.rng.clone();
        for (left, right) in self.iter_left() {
            map.insert(left.clone(), right.clone());
        }
        map
    }
}

impl<L, R, CL, CR> PartialEq for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let left_cmp = self.left_tree.comparator();
        let right_cmp = self.right_tree.comparator();
        self.iter_left()
            .zip(other.iter_left())
            .all(|((l_left, l_right), (r_left, r_right))| {
                left_cmp.equal(l_left, r_left) && right_cmp.equal(l_right, r_right)
            })
    }
}

impl<L, R, CL, CR> Eq for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
}

impl<L, R, CL, CR> fmt::Debug for BiMap<L, R, CL, CR>
where
    L: fmt::Debug,
    R: fmt::Debug,
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<L, R, CL, CR> Extend<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, iter: I) {
        for (left, right) in iter {
            self.insert(left, right);
        }
    }
}

impl<L, R, CL, CR> FromIterator<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<L, R, CL, CR> IntoIterator for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    type Item = (L, R);
    type IntoIter = IntoIter<L, R>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut indices = Vec::with_capacity(self.len);
        let mut curr = self.left_tree.first(&self.entries);
        while curr != SENTINEL {
            indices.push(curr);
            curr = self.left_tree.next(&self.entries, curr);
        }
        let pairs: Vec<(L, R)> = indices
            .into_iter()
            .map(|index| self.entries.free(index).into_pair())
            .collect();
        IntoIter {
            pairs: pairs.into_iter(),
        }
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    type Item = (&'a L, &'a R);
    type IntoIter = LeftIter<'a, L, R, CL, CR>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_left()
    }
}
