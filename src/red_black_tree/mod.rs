//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! The tree is left-leaning: red links only ever point to left children, so every red black tree
//! in this module corresponds one-to-one with a 2-3 tree.

mod html;
mod map;
mod node;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, Walk};
