use crate::entry::{Entry, Key};
use crate::error::{Error, Result};
use crate::ordered_map::OrderedMap;
use crate::red_black_tree::html;
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use log::trace;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::Display;
use std::io::{self, Write};

/// An ordered map implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree where every link is colored either
/// red or black. In the left-leaning variant, red links always lean left, no path has two
/// consecutive red links, and every path from the root to an empty subtree crosses the same
/// number of black links. Rotations and color flips restore these invariants after an insertion
/// or a removal.
///
/// # Examples
///
/// ```
/// use gtree::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.search(0), Ok(&1));
/// assert!(map.search(1).is_err());
/// assert_eq!(map.count(), 2);
///
/// assert_eq!(map.walk().collect::<Vec<&u32>>(), vec![&1, &4]);
/// assert_eq!(map.delete(0), Some(1));
/// assert_eq!(map.delete(1), None);
/// ```
pub struct RedBlackMap<U> {
    tree: tree::Tree<U>,
    count: usize,
}

impl<U> RedBlackMap<U> {
    /// Constructs a new, empty `RedBlackMap<U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32> = RedBlackMap::new();
    /// assert_eq!(map.count(), 0);
    /// ```
    pub fn new() -> Self {
        RedBlackMap {
            tree: None,
            count: 0,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// overwritten and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.search(1), Ok(&2));
    /// ```
    pub fn insert(&mut self, key: Key, value: U) -> Option<U> {
        let ret = tree::insert(&mut self.tree, key, value);
        tree::fix_root(&mut self.tree);
        match ret {
            Some(Entry { value, .. }) => Some(value),
            None => {
                self.count += 1;
                None
            },
        }
    }

    /// Returns the value associated with a particular key, or `Error::NotFound` if the key does
    /// not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::red_black_tree::RedBlackMap;
    /// use gtree::Error;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.search(1), Ok(&1));
    /// assert_eq!(map.search(2), Err(Error::NotFound(2)));
    /// ```
    pub fn search(&self, key: Key) -> Result<&U> {
        self.get(key).ok_or(Error::NotFound(key))
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    pub fn get(&self, key: Key) -> Option<&U> {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut U> {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Checks if a key exists in the map.
    pub fn contains_key(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key from the map and returns its value. Removing a key that does not exist is a
    /// no-op that leaves the tree untouched and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.delete(1), Some(1));
    /// assert_eq!(map.delete(1), None);
    /// ```
    pub fn delete(&mut self, key: Key) -> Option<U> {
        if !self.contains_key(key) {
            trace!("ignoring removal of missing key {}", key);
            return None;
        }

        let ret = tree::remove(&mut self.tree, key);
        tree::fix_root(&mut self.tree);
        ret.map(|entry| {
            self.count -= 1;
            entry.value
        })
    }

    /// Returns the number of keys in the map.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clears the map, removing all values.
    pub fn clear(&mut self) {
        self.tree = None;
        self.count = 0;
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<Key> {
        tree::min(&self.tree).map(|entry| entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<Key> {
        tree::max(&self.tree).map(|entry| entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((1, &1)));
    /// assert_eq!(iterator.next(), Some((2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, U> {
        RedBlackMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a lazy iterator over the values of the map in ascending order of their keys.
    ///
    /// Nodes are only visited as values are pulled, and dropping the iterator early releases the
    /// traversal state.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(5, 500);
    /// map.insert(4, 400);
    /// map.insert(3, 300);
    ///
    /// let mut walk = map.walk();
    /// assert_eq!(walk.next(), Some(&300));
    /// assert_eq!(walk.next(), Some(&400));
    /// assert_eq!(walk.next(), Some(&500));
    /// assert_eq!(walk.next(), None);
    /// ```
    pub fn walk(&self) -> Walk<'_, U> {
        Walk { inner: self.iter() }
    }

    /// Writes the shape of the tree as nested list markup. Each node is rendered as
    /// `<red href="#">key/value</red>` or `<black href="#">key/value</black>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 600);
    ///
    /// let mut buffer = Vec::new();
    /// map.to_html(&mut buffer).unwrap();
    /// assert_eq!(
    ///     String::from_utf8(buffer).unwrap(),
    ///     "<div class=\"tree\">\n  <ul>\n    <li>\n      <black href=\"#\">1/600</black>\n    </li>\n  </ul>\n</div>\n",
    /// );
    /// ```
    pub fn to_html<W>(&self, w: &mut W) -> io::Result<()>
    where
        U: Display,
        W: Write,
    {
        html::write_tree(&self.tree, w)
    }
}

impl<U> OrderedMap<U> for RedBlackMap<U> {
    fn insert(&mut self, key: Key, value: U) -> Option<U> {
        RedBlackMap::insert(self, key, value)
    }

    fn search(&self, key: Key) -> Result<&U> {
        RedBlackMap::search(self, key)
    }

    fn delete(&mut self, key: Key) -> Option<U> {
        RedBlackMap::delete(self, key)
    }

    fn count(&self) -> usize {
        RedBlackMap::count(self)
    }
}

impl<U> IntoIterator for RedBlackMap<U> {
    type IntoIter = RedBlackMapIntoIter<U>;
    type Item = (Key, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, U> IntoIterator for &'a RedBlackMap<U> {
    type IntoIter = RedBlackMapIter<'a, U>;
    type Item = (Key, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackMap<U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<U> {
    current: tree::Tree<U>,
    stack: Vec<Node<U>>,
}

impl<U> Iterator for RedBlackMapIntoIter<U> {
    type Item = (Key, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

/// An iterator for `RedBlackMap<U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, U> {
    current: &'a tree::Tree<U>,
    stack: Vec<&'a Node<U>>,
}

impl<'a, U> Iterator for RedBlackMapIter<'a, U> {
    type Item = (Key, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            (node.entry.key, &node.entry.value)
        })
    }
}

/// An iterator over the values of a `RedBlackMap<U>` in ascending order of their keys.
pub struct Walk<'a, U> {
    inner: RedBlackMapIter<'a, U>,
}

impl<'a, U> Iterator for Walk<'a, U> {
    type Item = &'a U;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

impl<U> Default for RedBlackMap<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Serialize for RedBlackMap<U>
where
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.count))?;
        for (key, value) in self {
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
// Returns the black height of the subtree after checking every red black invariant beneath it.
fn check_subtree<U>(subtree: &tree::Tree<U>, low: Option<Key>, high: Option<Key>) -> usize {
    match subtree {
        None => 0,
        Some(ref node) => {
            let key = node.entry.key;
            assert!(low.map_or(true, |low| low < key));
            assert!(high.map_or(true, |high| key < high));
            assert!(!tree::is_red(&node.right), "red link leans right at {}", key);
            if node.is_red() {
                assert!(!tree::is_red(&node.left), "consecutive red links at {}", key);
            }
            let left = check_subtree(&node.left, low, Some(key));
            let right = check_subtree(&node.right, Some(key), high);
            assert_eq!(left, right, "unequal black height at {}", key);
            if node.is_red() {
                left
            } else {
                left + 1
            }
        },
    }
}

#[cfg(test)]
impl<U> RedBlackMap<U> {
    pub(crate) fn assert_invariants(&self) {
        assert!(!tree::is_red(&self.tree), "root is red");
        check_subtree(&self.tree, None, None);
        assert_eq!(self.iter().count(), self.count);
    }
}
