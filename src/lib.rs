//! Ordered bijective maps built from two treaps that share their nodes.
//!
//! A `BiMap` stores each `(left, right)` pair once and links it into a treap ordered by the left
//! keys and a treap ordered by the right keys. Either key finds its pair in expected `O(log N)`
//! time, and a position in one ordering flips to the same pair's position in the other ordering in
//! `O(1)` time.

pub mod arena;
pub mod bimap;
pub mod compare;
mod entry;
mod error;
pub mod treap;

pub use crate::bimap::BiMap;
pub use crate::error::{Error, Result};
