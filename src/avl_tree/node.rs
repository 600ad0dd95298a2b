use crate::avl_tree::tree::{self, Tree};
use crate::entry::{Entry, Key};
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<U> {
    pub entry: Entry<U>,
    pub height: usize,
    pub left: Tree<U>,
    pub right: Tree<U>,
}

impl<U> Node<U> {
    /// Creates a leaf, which always has a height of one.
    pub fn new(key: Key, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update_height(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    /// Returns `height(left) - height(right)`.
    pub fn bias(&self) -> isize {
        tree::height(&self.left) as isize - tree::height(&self.right) as isize
    }
}
