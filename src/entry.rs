use crate::treap::{Node, Projection};
use std::marker::PhantomData;

/// One mapping of a `BiMap`. The record carries a node body for the left-keyed treap and one for
/// the right-keyed treap, so a single arena slot sits in both trees at the same time and its index
/// is its position in either of them.
pub struct Entry<L, R> {
    pub left: Node<L>,
    pub right: Node<R>,
}

impl<L, R> Entry<L, R> {
    pub fn new(left: L, right: R, left_priority: u32, right_priority: u32) -> Self {
        Entry {
            left: Node::new(left, left_priority),
            right: Node::new(right, right_priority),
        }
    }

    pub fn into_pair(self) -> (L, R) {
        (self.left.key, self.right.key)
    }
}

/// Views an `Entry` through its left node body.
pub struct LeftSide<L, R>(PhantomData<fn() -> (L, R)>);

/// Views an `Entry` through its right node body.
pub struct RightSide<L, R>(PhantomData<fn() -> (L, R)>);

impl<L, R> Projection for LeftSide<L, R> {
    type Record = Entry<L, R>;
    type Key = L;

    fn node(record: &Entry<L, R>) -> &Node<L> {
        &record.left
    }

    fn node_mut(record: &mut Entry<L, R>) -> &mut Node<L> {
        &mut record.left
    }
}

impl<L, R> Projection for RightSide<L, R> {
    type Record = Entry<L, R>;
    type Key = R;

    fn node(record: &Entry<L, R>) -> &Node<R> {
        &record.right
    }

    fn node_mut(record: &mut Entry<L, R>) -> &mut Node<R> {
        &mut record.right
    }
}
