//! Probabilistic binary search tree where each node also maintains the heap invariant.
//!
//! The nodes live in an `Arena` owned by the caller, and are linked by index. Insertion and
//! removal are done by splitting and merging, never by rotating.

mod node;
mod set;
mod tree;

pub use self::node::{Node, Projection};
pub use self::set::Treap;
