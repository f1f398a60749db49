//! Ordered bijective map where each pair is a single record threaded through two treaps, one
//! ordered by the left keys and one ordered by the right keys.

mod iter;
mod map;
mod serialize;

pub use self::iter::{IntoIter, LeftIter, LeftPos, RightIter, RightPos};
pub use self::map::BiMap;
