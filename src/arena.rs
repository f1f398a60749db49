//! Slot allocator with stable indices.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// Index that `Arena<T>` never hands out. Trees use it as their one-past-the-end position.
pub const SENTINEL: usize = usize::MAX;

enum Block<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// An allocator for a single type of object that addresses its objects by index.
///
/// Freed slots are threaded into a free list and reused before the underlying `Vec` grows, so an
/// index stays valid for exactly as long as its object is alive. Allocating or freeing other
/// objects never moves it.
///
/// # Examples
///
/// ```
/// use treap_bimap::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// ```
pub struct Arena<T> {
    head: Option<usize>,
    blocks: Vec<Block<T>>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Arena {
            head: None,
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Allocates an object and returns its index.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// assert_eq!(arena.allocate("a"), 0);
    /// assert_eq!(arena.allocate("b"), 1);
    /// ```
    pub fn allocate(&mut self, value: T) -> usize {
        self.len += 1;
        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied(value));
                self.blocks.len() - 1
            }
            Some(index) => {
                let vacant_block = mem::replace(&mut self.blocks[index], Block::Occupied(value));
                match vacant_block {
                    Block::Vacant(next_index) => {
                        self.head = next_index;
                        index
                    }
                    Block::Occupied(_) => panic!("Expected a vacant block."),
                }
            }
        }
    }

    /// Deallocates an object and returns it. The slot is handed out again by the next call to
    /// `allocate`.
    ///
    /// # Panics
    ///
    /// Panics if `index` corresponds to an invalid or vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// assert_eq!(arena.allocate(1), x);
    /// ```
    pub fn free(&mut self, index: usize) -> T {
        if index >= self.blocks.len() {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(&mut self.blocks[index], Block::Vacant(self.head));
        match old_block {
            Block::Vacant(next_index) => {
                self.blocks[index] = Block::Vacant(next_index);
                panic!("Error: attempting to free vacant block.");
            }
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(index);
                value
            }
        }
    }

    /// Returns an immutable reference to an object. Returns `None` if `index` does not
    /// correspond to a live object.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.blocks.get(index) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object. Returns `None` if `index` does not correspond
    /// to a live object.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.blocks.get_mut(index) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object and forgets all slots.
    pub fn clear(&mut self) {
        self.head = None;
        self.blocks.clear();
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Error: index out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, SENTINEL};

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: Arena<u32> = Arena::new();
        arena.free(0);
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = Arena::new();
        let index = arena.allocate(0);
        arena.free(index);
        arena.free(index);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new();
        assert_eq!(arena.allocate(0), 0);
        assert_eq!(arena.allocate(0), 1);
        assert_eq!(arena.allocate(0), 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_latest_slot() {
        let mut arena = Arena::new();
        let a = arena.allocate(0);
        let b = arena.allocate(1);
        arena.allocate(2);
        assert_eq!(arena.free(a), 0);
        assert_eq!(arena.free(b), 1);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.allocate(3), b);
        assert_eq!(arena.allocate(4), a);
        assert_eq!(arena.allocate(5), 3);
    }

    #[test]
    fn test_indices_are_stable() {
        let mut arena = Arena::new();
        let a = arena.allocate("a");
        for i in 0..100 {
            let index = arena.allocate("x");
            if i % 2 == 0 {
                arena.free(index);
            }
        }
        assert_eq!(arena[a], "a");
    }

    #[test]
    fn test_get() {
        let mut arena = Arena::new();
        let index = arena.allocate(0);
        assert_eq!(arena.get(index), Some(&0));
        assert_eq!(arena.get(index + 1), None);
        assert_eq!(arena.get(SENTINEL), None);
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = Arena::new();
        let index = arena.allocate(0);
        arena.free(index);
        assert_eq!(arena.get(index), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let index = arena.allocate(0);
        *arena.get_mut(index).unwrap() = 1;
        assert_eq!(arena.get(index), Some(&1));
        assert_eq!(arena.get_mut(SENTINEL), None);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.allocate(2), 0);
    }
}
