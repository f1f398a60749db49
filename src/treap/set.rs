use crate::arena::{Arena, SENTINEL};
use crate::compare::Compare;
use crate::treap::node::Projection;
use crate::treap::tree;
use std::marker::PhantomData;

/// An ordered set of arena records implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than all keys occuring in its right subtree. The priority of a node is greater than or
/// equal to the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of keys.
///
/// The treap does not own its nodes. Every node lives in an `Arena` record, and `P` selects the
/// node body of the record that this tree threads its links through, so one record can belong to
/// several trees at once. Positions are arena indices, with `SENTINEL` as the one-past-the-end
/// position.
pub struct Treap<P, C> {
    root: tree::Tree,
    cmp: C,
    _marker: PhantomData<fn() -> P>,
}

impl<P, C> Treap<P, C>
where
    P: Projection,
    C: Compare<P::Key>,
{
    pub fn new(cmp: C) -> Self {
        Treap {
            root: None,
            cmp,
            _marker: PhantomData,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Links the record at `index` into the tree. Its key must not be equal to any key already in
    /// the tree.
    pub fn insert(&mut self, arena: &mut Arena<P::Record>, index: usize) -> usize {
        tree::node_mut::<P>(arena, index).unlink();
        let (l_tree, r_tree) = tree::split::<P, C>(arena, self.root, index, &self.cmp, true);
        let r_tree = tree::merge::<P>(arena, Some(index), r_tree);
        let root = tree::merge::<P>(arena, l_tree, r_tree);
        self.set_root(arena, root);
        index
    }

    /// Unlinks the record at `index` from the tree. Its subtrees are merged and take its place.
    pub fn remove(&mut self, arena: &mut Arena<P::Record>, index: usize) {
        let (left, right, parent) = {
            let node = tree::node::<P>(arena, index);
            (node.left, node.right, node.parent)
        };
        let merged = tree::merge::<P>(arena, left, right);
        tree::set_parent::<P>(arena, merged, parent);
        match parent {
            None => self.root = merged,
            Some(parent) => {
                let parent_node = tree::node_mut::<P>(arena, parent);
                if parent_node.left == Some(index) {
                    parent_node.left = merged;
                } else {
                    parent_node.right = merged;
                }
            }
        }
        tree::node_mut::<P>(arena, index).unlink();
    }

    pub fn find(&self, arena: &Arena<P::Record>, key: &P::Key) -> usize {
        let mut curr = self.root;
        while let Some(index) = curr {
            let node = tree::node::<P>(arena, index);
            if self.cmp.less(key, &node.key) {
                curr = node.left;
            } else if self.cmp.less(&node.key, key) {
                curr = node.right;
            } else {
                return index;
            }
        }
        SENTINEL
    }

    /// Returns the first position whose key is not ordered before `key`.
    pub fn lower_bound(&self, arena: &Arena<P::Record>, key: &P::Key) -> usize {
        let mut ret = SENTINEL;
        let mut curr = self.root;
        while let Some(index) = curr {
            let node = tree::node::<P>(arena, index);
            if self.cmp.less(&node.key, key) {
                curr = node.right;
            } else {
                ret = index;
                curr = node.left;
            }
        }
        ret
    }

    /// Returns the first position whose key is ordered after `key`.
    pub fn upper_bound(&self, arena: &Arena<P::Record>, key: &P::Key) -> usize {
        let mut ret = SENTINEL;
        let mut curr = self.root;
        while let Some(index) = curr {
            let node = tree::node::<P>(arena, index);
            if self.cmp.less(key, &node.key) {
                ret = index;
                curr = node.left;
            } else {
                curr = node.right;
            }
        }
        ret
    }

    pub fn first(&self, arena: &Arena<P::Record>) -> usize {
        tree::next::<P>(arena, self.root, SENTINEL)
    }

    pub fn last(&self, arena: &Arena<P::Record>) -> usize {
        tree::prev::<P>(arena, self.root, SENTINEL)
    }

    pub fn next(&self, arena: &Arena<P::Record>, index: usize) -> usize {
        tree::next::<P>(arena, self.root, index)
    }

    pub fn prev(&self, arena: &Arena<P::Record>, index: usize) -> usize {
        tree::prev::<P>(arena, self.root, index)
    }

    /// Forgets every node. The records themselves are left in the arena.
    pub fn clear(&mut self) {
        self.root = None;
    }

    fn set_root(&mut self, arena: &mut Arena<P::Record>, root: tree::Tree) {
        self.root = root;
        tree::set_parent::<P>(arena, root, None);
    }
}
