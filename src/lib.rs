//! Integer-keyed ordered maps backed by self-balancing binary search trees.
//!
//! Two interchangeable engines implement [`OrderedMap`]: [`avl_tree::AvlMap`], which tracks
//! subtree heights, and [`red_black_tree::RedBlackMap`], a left-leaning red black tree.

mod entry;
mod error;
mod ordered_map;
pub mod avl_tree;
pub mod red_black_tree;

#[cfg(test)]
mod proptests;

pub use crate::entry::Key;
pub use crate::error::{Error, Result};
pub use crate::ordered_map::OrderedMap;
