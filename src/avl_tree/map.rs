use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::entry::{Entry, Key};
use crate::error::{Error, Result};
use crate::ordered_map::OrderedMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. Every node caches the
/// height of its subtree, and single or double rotations restore the invariant after an insertion
/// or a removal.
///
/// # Examples
///
/// ```
/// use gtree::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.search(0), Ok(&1));
/// assert!(map.search(1).is_err());
/// assert_eq!(map.count(), 2);
///
/// assert_eq!(map.min(), Some(0));
/// assert_eq!(map.delete(0), Some(1));
/// assert_eq!(map.delete(1), None);
/// ```
pub struct AvlMap<U> {
    tree: tree::Tree<U>,
    count: usize,
}

impl<U> AvlMap<U> {
    /// Constructs a new, empty `AvlMap<U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32> = AvlMap::new();
    /// assert_eq!(map.count(), 0);
    /// ```
    pub fn new() -> Self {
        AvlMap {
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
    /// use gtree::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.search(1), Ok(&2));
    /// ```
    pub fn insert(&mut self, key: Key, value: U) -> Option<U> {
        let (ret, _) = tree::insert(&mut self.tree, key, value);
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
    /// use gtree::avl_tree::AvlMap;
    /// use gtree::Error;
    ///
    /// let mut map = AvlMap::new();
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
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// if let Some(value) = map.get_mut(1) {
    ///     *value = 2;
    /// }
    /// assert_eq!(map.get(1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: Key) -> Option<&mut U> {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Checks if a key exists in the map.
    pub fn contains_key(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key from the map and returns its value. Removing a key that does not exist is a
    /// no-op that returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtree::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.delete(1), Some(1));
    /// assert_eq!(map.delete(1), None);
    /// ```
    pub fn delete(&mut self, key: Key) -> Option<U> {
        let (ret, _) = tree::remove(&mut self.tree, key);
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
    /// use gtree::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((1, &1)));
    /// assert_eq!(iterator.next(), Some((2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlMapIter<'_, U> {
        AvlMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<U> OrderedMap<U> for AvlMap<U> {
    fn insert(&mut self, key: Key, value: U) -> Option<U> {
        AvlMap::insert(self, key, value)
    }

    fn search(&self, key: Key) -> Result<&U> {
        AvlMap::search(self, key)
    }

    fn delete(&mut self, key: Key) -> Option<U> {
        AvlMap::delete(self, key)
    }

    fn count(&self) -> usize {
        AvlMap::count(self)
    }
}

impl<U> IntoIterator for AvlMap<U> {
    type IntoIter = AvlMapIntoIter<U>;
    type Item = (Key, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, U> IntoIterator for &'a AvlMap<U> {
    type IntoIter = AvlMapIter<'a, U>;
    type Item = (Key, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlMap<U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct AvlMapIntoIter<U> {
    current: tree::Tree<U>,
    stack: Vec<Node<U>>,
}

impl<U> Iterator for AvlMapIntoIter<U> {
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

/// An iterator for `AvlMap<U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct AvlMapIter<'a, U> {
    current: &'a tree::Tree<U>,
    stack: Vec<&'a Node<U>>,
}

impl<'a, U> Iterator for AvlMapIter<'a, U> {
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

impl<U> Default for AvlMap<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Serialize for AvlMap<U>
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
// Returns the height of the subtree after checking every avl invariant beneath it.
fn check_subtree<U>(subtree: &tree::Tree<U>, low: Option<Key>, high: Option<Key>) -> usize {
    match subtree {
        None => 0,
        Some(ref node) => {
            let key = node.entry.key;
            assert!(low.map_or(true, |low| low < key));
            assert!(high.map_or(true, |high| key < high));
            let left = check_subtree(&node.left, low, Some(key));
            let right = check_subtree(&node.right, Some(key), high);
            assert_eq!(node.height, left.max(right) + 1);
            assert!((left as isize - right as isize).abs() <= 1);
            node.height
        },
    }
}

#[cfg(test)]
impl<U> AvlMap<U> {
    pub(crate) fn assert_invariants(&self) {
        check_subtree(&self.tree, None, None);
        assert_eq!(self.iter().count(), self.count);
    }
}

#[cfg(test)]
mod tests {
    use super::AvlMap;
    use crate::avl_tree::tree;
    use crate::error::Error;

    #[test]
    fn test_count_empty() {
        let map: AvlMap<u32> = AvlMap::new();
        assert_eq!(map.count(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: AvlMap<u32> = AvlMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_search_empty() {
        let map: AvlMap<u32> = AvlMap::new();
        assert_eq!(map.search(7), Err(Error::NotFound(7)));
    }

    #[test]
    fn test_insert() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(2, 100), None);
        assert_eq!(map.insert(1, 200), None);
        assert_eq!(map.count(), 2);
        assert_eq!(map.search(1), Ok(&200));
        assert_eq!(map.search(2), Ok(&100));
        map.assert_invariants();
    }

    #[test]
    fn test_insert_replace() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(1, 300), None);
        assert_eq!(map.insert(1, 100), Some(300));
        assert_eq!(map.insert(1, 200), Some(100));
        assert_eq!(map.count(), 1);
        assert_eq!(map.search(1), Ok(&200));
    }

    #[test]
    fn test_delete_missing() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        assert_eq!(map.delete(100), None);
        assert_eq!(map.count(), 1);
        assert_eq!(map.search(1), Ok(&1));
    }

    #[test]
    fn test_delete_twice() {
        let mut map = AvlMap::new();
        map.insert(1, 300);
        map.insert(2, 100);
        map.insert(3, 200);
        assert_eq!(map.delete(2), Some(100));
        assert_eq!(map.delete(2), None);
        assert_eq!(map.count(), 2);
        assert_eq!(map.search(1), Ok(&300));
        assert_eq!(map.search(3), Ok(&200));
        map.assert_invariants();
    }

    fn build(keys: &[i64]) -> tree::Tree<i64> {
        let mut subtree = None;
        for &key in keys {
            tree::insert(&mut subtree, key, key);
        }
        subtree
    }

    #[test]
    fn test_insert_reports_height_growth() {
        let mut subtree = None;
        let (ret, changed) = tree::insert(&mut subtree, 1, 1);
        assert!(ret.is_none());
        assert!(changed);

        let (ret, changed) = tree::insert(&mut subtree, 2, 2);
        assert!(ret.is_none());
        assert!(changed);
        assert_eq!(tree::height(&subtree), 2);
    }

    #[test]
    fn test_insert_into_shorter_side_stops_propagation() {
        let mut subtree = build(&[2, 1]);
        let (ret, changed) = tree::insert(&mut subtree, 3, 3);
        assert!(ret.is_none());
        assert!(!changed);
        assert_eq!(tree::height(&subtree), 2);
    }

    #[test]
    fn test_rotation_restoring_height_stops_propagation() {
        let mut subtree = build(&[1, 2]);
        let (ret, changed) = tree::insert(&mut subtree, 3, 3);
        assert!(ret.is_none());
        assert!(!changed);
        assert_eq!(subtree.as_ref().map(|node| node.entry.key), Some(2));
        assert_eq!(tree::height(&subtree), 2);
    }

    #[test]
    fn test_overwrite_does_not_change_height() {
        let mut subtree = build(&[2, 1, 3]);
        let (ret, changed) = tree::insert(&mut subtree, 1, 10);
        assert_eq!(ret.map(|entry| entry.value), Some(1));
        assert!(!changed);
    }

    #[test]
    fn test_remove_reports_height_change() {
        let mut subtree = build(&[2, 1, 3]);
        let (ret, changed) = tree::remove(&mut subtree, 3);
        assert_eq!(ret.map(|entry| entry.key), Some(3));
        assert!(!changed);
        assert_eq!(tree::height(&subtree), 2);

        let (ret, changed) = tree::remove(&mut subtree, 1);
        assert_eq!(ret.map(|entry| entry.key), Some(1));
        assert!(changed);
        assert_eq!(tree::height(&subtree), 1);

        let (ret, changed) = tree::remove(&mut subtree, 7);
        assert!(ret.is_none());
        assert!(!changed);
    }

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let mut map = AvlMap::new();
        for key in 0..1023 {
            map.insert(key, key);
            map.assert_invariants();
        }
        assert_eq!(tree::height(&map.tree), 10);
    }

    #[test]
    fn test_double_rotation() {
        let mut map = AvlMap::new();
        map.insert(3, 3);
        map.insert(1, 1);
        map.insert(2, 2);
        map.assert_invariants();
        assert_eq!(map.tree.as_ref().map(|node| node.entry.key), Some(2));
    }

    #[test]
    fn test_delete_promotes_predecessor() {
        let mut map = AvlMap::new();
        for key in &[4, 2, 6, 1, 3, 5, 7] {
            map.insert(*key, *key);
        }
        assert_eq!(map.delete(4), Some(4));
        assert_eq!(map.tree.as_ref().map(|node| node.entry.key), Some(3));
        map.assert_invariants();
    }

    #[test]
    fn test_drain_descending() {
        let n = 500;
        let mut map = AvlMap::new();
        for key in (1..=n).rev() {
            map.insert(key, key);
        }
        for key in (1..=n).rev() {
            assert_eq!(map.delete(key), Some(key));
            assert_eq!(map.count(), (key - 1) as usize);
            map.assert_invariants();
        }
        assert!(map.tree.is_none());
    }

    #[test]
    fn test_drain_ascending() {
        let mut map = AvlMap::new();
        for key in 0..500 {
            map.insert(key, key);
        }
        for key in 0..500 {
            assert_eq!(map.delete(key), Some(key));
            map.assert_invariants();
        }
        assert!(map.tree.is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);
        assert_eq!(map.min(), Some(1));
        assert_eq!(map.max(), Some(5));
    }

    #[test]
    fn test_clear() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.get(1), None);
    }

    #[test]
    fn test_into_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(i64, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(i64, &u32)>>(),
            vec![(1, &2), (3, &4), (5, &6)],
        );
    }
}
