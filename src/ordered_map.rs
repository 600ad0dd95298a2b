use crate::entry::Key;
use crate::error::Result;

/// The operations shared by every integer-keyed ordered map in this crate.
///
/// # Examples
///
/// ```
/// use gtree::avl_tree::AvlMap;
/// use gtree::red_black_tree::RedBlackMap;
/// use gtree::OrderedMap;
///
/// fn fill<M: OrderedMap<u32>>(map: &mut M) {
///     for key in 0..10 {
///         map.insert(key, key as u32 * 10);
///     }
/// }
///
/// let mut avl = AvlMap::new();
/// let mut rb = RedBlackMap::new();
/// fill(&mut avl);
/// fill(&mut rb);
/// assert_eq!(OrderedMap::count(&avl), 10);
/// assert_eq!(OrderedMap::search(&rb, 3), Ok(&30));
/// ```
pub trait OrderedMap<U> {
    /// Inserts a key-value pair, returning the previous value if the key already existed.
    fn insert(&mut self, key: Key, value: U) -> Option<U>;

    /// Returns the value associated with `key`, or `Error::NotFound` if it does not exist.
    fn search(&self, key: Key) -> Result<&U>;

    /// Removes `key` from the map. Removing a key that does not exist is a no-op.
    fn delete(&mut self, key: Key) -> Option<U>;

    /// Returns the number of keys in the map.
    fn count(&self) -> usize;
}
