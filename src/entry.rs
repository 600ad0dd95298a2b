/// The key type shared by every map in this crate.
pub type Key = i64;

/// A key-value pair stored in a tree node.
#[derive(Debug)]
pub struct Entry<U> {
    pub key: Key,
    pub value: U,
}
