use crate::avl_tree::node::Node;
use crate::entry::{Entry, Key};
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<U> = Option<Box<Node<U>>>;

/// The outcome of a structural update on a subtree: the entry that was displaced or removed, if
/// any, and whether the height of the subtree changed.
pub type Update<U> = (Option<Entry<U>>, bool);

pub fn height<U>(tree: &Tree<U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<U>(mut node: Box<Node<U>>) -> Box<Node<U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update_height();
    child.left = Some(node);
    child.update_height();
    child
}

fn rotate_right<U>(mut node: Box<Node<U>>) -> Box<Node<U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update_height();
    child.right = Some(node);
    child.update_height();
    child
}

// Restores the height and the balance of the root of `tree` after one of its children changed
// height. Returns whether the height of `tree` differs from its height before that change.
fn rebalance<U>(tree: &mut Tree<U>) -> bool {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return false,
    };

    let old_height = node.height;
    node.update_height();

    if node.bias() > 1 {
        if let Some(child) = node.left.take() {
            if child.bias() < 0 {
                trace!("double rotation left-right at key {}", node.entry.key);
                node.left = Some(rotate_left(child));
            } else {
                trace!("single rotation right at key {}", node.entry.key);
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.bias() < -1 {
        if let Some(child) = node.right.take() {
            if child.bias() > 0 {
                trace!("double rotation right-left at key {}", node.entry.key);
                node.right = Some(rotate_right(child));
            } else {
                trace!("single rotation left at key {}", node.entry.key);
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    let changed = node.height != old_height;
    *tree = Some(node);
    changed
}

// precondition: the tree is not empty
fn remove_max<U>(tree: &mut Tree<U>) -> (Entry<U>, bool) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    if node.right.is_none() {
        *tree = node.left.take();
        return (node.entry, true);
    }

    let (entry, changed) = remove_max(&mut node.right);
    *tree = Some(node);
    (entry, changed && rebalance(tree))
}

pub fn insert<U>(tree: &mut Tree<U>, key: Key, value: U) -> Update<U> {
    let (ret, changed) = match tree {
        Some(ref mut node) => match key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, key, value),
            Ordering::Greater => insert(&mut node.right, key, value),
            Ordering::Equal => {
                let old_entry = mem::replace(&mut node.entry, Entry { key, value });
                return (Some(old_entry), false);
            },
        },
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            return (None, true);
        },
    };

    if !changed {
        return (ret, false);
    }
    (ret, rebalance(tree))
}

pub fn remove<U>(tree: &mut Tree<U>, key: Key) -> Update<U> {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return (None, false),
    };

    let (ret, changed) = match key.cmp(&node.entry.key) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_none() {
                *tree = node.right.take();
                return (Some(node.entry), true);
            }
            let (predecessor, changed) = remove_max(&mut node.left);
            (Some(mem::replace(&mut node.entry, predecessor)), changed)
        },
    };

    *tree = Some(node);
    if !changed {
        return (ret, false);
    }
    (ret, rebalance(tree))
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
