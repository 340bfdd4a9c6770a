//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions.
//!
//! Only insertion and lookups are supported; keys cannot be removed from a red black set.

mod node;
mod set;
mod tree;

pub use self::node::Color;
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
