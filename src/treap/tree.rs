use crate::arena::{Arena, SENTINEL};
use crate::compare::Compare;
use crate::treap::node::{Node, Projection};

pub type Tree = Option<usize>;

pub fn node<P: Projection>(arena: &Arena<P::Record>, index: usize) -> &Node<P::Key> {
    P::node(&arena[index])
}

pub fn node_mut<P: Projection>(arena: &mut Arena<P::Record>, index: usize) -> &mut Node<P::Key> {
    P::node_mut(&mut arena[index])
}

pub fn set_parent<P: Projection>(arena: &mut Arena<P::Record>, tree: Tree, parent: Tree) {
    if let Some(index) = tree {
        node_mut::<P>(arena, index).parent = parent;
    }
}

/// Joins two trees where every key of `l_tree` is ordered before every key of `r_tree`. The root
/// with the higher priority becomes the parent; ties go to the left root.
pub fn merge<P: Projection>(arena: &mut Arena<P::Record>, l_tree: Tree, r_tree: Tree) -> Tree {
    match (l_tree, r_tree) {
        (Some(l_index), Some(r_index)) => {
            if node::<P>(arena, l_index).priority >= node::<P>(arena, r_index).priority {
                let l_right = node::<P>(arena, l_index).right;
                let merged = merge::<P>(arena, l_right, r_tree);
                node_mut::<P>(arena, l_index).right = merged;
                set_parent::<P>(arena, merged, l_tree);
                l_tree
            } else {
                let r_left = node::<P>(arena, r_index).left;
                let merged = merge::<P>(arena, l_tree, r_left);
                node_mut::<P>(arena, r_index).left = merged;
                set_parent::<P>(arena, merged, r_tree);
                r_tree
            }
        }
        (new_tree, None) | (None, new_tree) => new_tree,
    }
}

/// Splits a tree around the key of the record at `pivot`, which is not part of the tree.
///
/// With `inclusive` the parts hold the keys `<= pivot` and `> pivot`, otherwise `< pivot` and
/// `>= pivot`. The roots of the returned trees have stale parent links.
pub fn split<P, C>(
    arena: &mut Arena<P::Record>,
    tree: Tree,
    pivot: usize,
    cmp: &C,
    inclusive: bool,
) -> (Tree, Tree)
where
    P: Projection,
    C: Compare<P::Key>,
{
    match tree {
        Some(index) => {
            let goes_right = {
                let key = &node::<P>(arena, index).key;
                let pivot_key = &node::<P>(arena, pivot).key;
                if inclusive {
                    cmp.less(pivot_key, key)
                } else {
                    cmp.less_or_equal(pivot_key, key)
                }
            };
            if goes_right {
                let left = node::<P>(arena, index).left;
                let (l_tree, r_tree) = split::<P, C>(arena, left, pivot, cmp, inclusive);
                node_mut::<P>(arena, index).left = r_tree;
                set_parent::<P>(arena, r_tree, tree);
                (l_tree, tree)
            } else {
                let right = node::<P>(arena, index).right;
                let (l_tree, r_tree) = split::<P, C>(arena, right, pivot, cmp, inclusive);
                node_mut::<P>(arena, index).right = l_tree;
                set_parent::<P>(arena, l_tree, tree);
                (tree, r_tree)
            }
        }
        None => (None, None),
    }
}

pub fn leftmost<P: Projection>(arena: &Arena<P::Record>, mut index: usize) -> usize {
    while let Some(left) = node::<P>(arena, index).left {
        index = left;
    }
    index
}

pub fn rightmost<P: Projection>(arena: &Arena<P::Record>, mut index: usize) -> usize {
    while let Some(right) = node::<P>(arena, index).right {
        index = right;
    }
    index
}

/// In-order successor of `index`. The last node is followed by `SENTINEL`, and `SENTINEL` by the
/// first node.
pub fn next<P: Projection>(arena: &Arena<P::Record>, root: Tree, index: usize) -> usize {
    if index == SENTINEL {
        return root.map_or(SENTINEL, |root| leftmost::<P>(arena, root));
    }
    if let Some(right) = node::<P>(arena, index).right {
        return leftmost::<P>(arena, right);
    }
    let mut curr = index;
    while let Some(parent) = node::<P>(arena, curr).parent {
        if node::<P>(arena, parent).left == Some(curr) {
            return parent;
        }
        curr = parent;
    }
    SENTINEL
}

/// In-order predecessor of `index`. The first node is preceded by `SENTINEL`, and `SENTINEL` by
/// the last node.
pub fn prev<P: Projection>(arena: &Arena<P::Record>, root: Tree, index: usize) -> usize {
    if index == SENTINEL {
        return root.map_or(SENTINEL, |root| rightmost::<P>(arena, root));
    }
    if let Some(left) = node::<P>(arena, index).left {
        return rightmost::<P>(arena, left);
    }
    let mut curr = index;
    while let Some(parent) = node::<P>(arena, curr).parent {
        if node::<P>(arena, parent).right == Some(curr) {
            return parent;
        }
        curr = parent;
    }
    SENTINEL
}
