use crate::entry::{Entry, Key};
use crate::red_black_tree::node::{Color, Node};
use std::cmp::Ordering;
use std::mem;

pub type Tree<U> = Option<Box<Node<U>>>;

pub fn is_red<U>(tree: &Tree<U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.is_red(),
    }
}

// A black node whose left child is also black is a 2-node; descending into one during a removal
// requires borrowing a red link first.
fn is_two_node<U>(tree: &Tree<U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => !node.is_red() && !is_red(&node.left),
    }
}

pub fn fix_root<U>(tree: &mut Tree<U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

// Removes the minimum entry of `tree`. Returns `None` if the tree is empty.
fn remove_min<U>(tree: &mut Tree<U>) -> Option<Entry<U>> {
    let mut node = tree.take()?;

    if node.left.is_none() {
        debug_assert!(node.right.is_none());
        return Some(node.entry);
    }

    if is_two_node(&node.left) {
        node.move_red_left();
    }

    let ret = remove_min(&mut node.left);
    node.fixup();
    *tree = Some(node);
    ret
}

pub fn insert<U>(tree: &mut Tree<U>, key: Key, value: U) -> Option<Entry<U>> {
    let ret = match tree {
        Some(ref mut node) => match key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, key, value),
            Ordering::Greater => insert(&mut node.right, key, value),
            Ordering::Equal => Some(mem::replace(&mut node.entry, Entry { key, value })),
        },
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            return None;
        },
    };

    if let Some(ref mut node) = tree {
        node.fixup();
    }
    ret
}

// Removes `key` top-down, keeping the current node red or with a red left child on the way.
pub fn remove<U>(tree: &mut Tree<U>, key: Key) -> Option<Entry<U>> {
    let mut node = tree.take()?;

    let ret = if key < node.entry.key {
        if is_two_node(&node.left) {
            node.move_red_left();
        }
        remove(&mut node.left, key)
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if is_two_node(&node.right) {
            node.move_red_right();
        }

        if key == node.entry.key {
            match remove_min(&mut node.right) {
                Some(successor) => Some(mem::replace(&mut node.entry, successor)),
                None => {
                    debug_assert!(node.left.is_none());
                    return Some(node.entry);
                },
            }
        } else {
            remove(&mut node.right, key)
        }
    };

    node.fixup();
    *tree = Some(node);
    ret
}

pub fn get<U>(tree: &Tree<U>, key: Key) -> Option<&Entry<U>> {
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(&node.entry.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<U>(tree: &mut Tree<U>, key: Key) -> Option<&mut Entry<U>> {
    tree.as_mut().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn min<U>(tree: &Tree<U>) -> Option<&Entry<U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<U>(tree: &Tree<U>) -> Option<&Entry<U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}
