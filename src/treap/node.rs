/// A struct representing the body of a treap node.
///
/// Links are arena indices. A node whose `parent` is `None` is the root of its tree and hangs off
/// the tree's sentinel.
pub struct Node<K> {
    pub key: K,
    pub priority: u32,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub parent: Option<usize>,
}

impl<K> Node<K> {
    pub fn new(key: K, priority: u32) -> Self {
        Node {
            key,
            priority,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn unlink(&mut self) {
        self.left = None;
        self.right = None;
        self.parent = None;
    }
}

/// Selects which node body of an arena record a particular treap threads through.
///
/// A record may carry several node bodies, one per tree it belongs to.
pub trait Projection {
    type Record;
    type Key;

    fn node(record: &Self::Record) -> &Node<Self::Key>;

    fn node_mut(record: &mut Self::Record) -> &mut Node<Self::Key>;
}
