use crate::entry::{Entry, Key};
use crate::red_black_tree::tree::{self, Tree};
use std::mem;

/// The color of the link from a node to its parent in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns the other color. Flipping a link red merges the node into its parent's 2-3 node;
    /// flipping it black splits it off again.
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<U> {
    pub entry: Entry<U>,
    pub color: Color,
    pub left: Tree<U>,
    pub right: Tree<U>,
}

impl<U> Node<U> {
    /// Creates a leaf. New leaves are always red.
    pub fn new(key: Key, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Inverts the colors of this node and of both of its links to children. Going black to red
    /// pushes a temporary 4-node up one level; going red to black borrows a key from the parent.
    /// Black height is unchanged on every path through this node.
    pub fn flip_colors(&mut self) {
        self.color = self.color.opposite();
        for child in [&mut self.left, &mut self.right].iter_mut() {
            if let Some(ref mut node) = child {
                node.color = node.color.opposite();
            }
        }
    }

    /// Turns a red right link into a red left link.
    ///
    /// The right child takes over this slot by swapping node contents in place, so ownership of
    /// each subtree is moved exactly once and no subtree is copied. The new top keeps the old
    /// top's color and the demoted node becomes red.
    pub fn rotate_left(&mut self) {
        let mut lowered = match self.right.take() {
            Some(node) => node,
            None => unreachable!("left rotation without a right child"),
        };
        self.right = lowered.left.take();
        mem::swap(self, &mut *lowered);
        self.color = mem::replace(&mut lowered.color, Color::Red);
        self.left = Some(lowered);
    }

    /// Turns a red left link into a red right link. Mirror of `rotate_left`.
    pub fn rotate_right(&mut self) {
        let mut lowered = match self.left.take() {
            Some(node) => node,
            None => unreachable!("right rotation without a left child"),
        };
        self.left = lowered.right.take();
        mem::swap(self, &mut *lowered);
        self.color = mem::replace(&mut lowered.color, Color::Red);
        self.right = Some(lowered);
    }

    /// Restores the left-leaning invariants of this node after one of its subtrees changed.
    pub fn fixup(&mut self) {
        if tree::is_red(&self.right) {
            self.rotate_left();
        }

        let left_left_red = match self.left {
            Some(ref child) => child.is_red() && tree::is_red(&child.left),
            None => false,
        };
        if left_left_red {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }

    /// Makes the left child or one of its children red, borrowing from the right sibling if it
    /// can spare a node.
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        if let Some(mut child) = self.right.take() {
            if tree::is_red(&child.left) {
                child.rotate_right();
                self.right = Some(child);
                self.rotate_left();
                self.flip_colors();
            } else {
                self.right = Some(child);
            }
        }
    }

    /// Makes the right child or one of its children red.
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        let left_left_red = match self.left {
            Some(ref child) => tree::is_red(&child.left),
            None => false,
        };
        if left_left_red {
            self.rotate_right();
            self.flip_colors();
        }
    }
}
