use crate::avl_tree::AvlMap;
use crate::entry::Key;
use crate::error::Error;
use crate::red_black_tree::RedBlackMap;

use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(Key, u32),
    Delete(Key),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..128i64, any::<u32>()).prop_map(|(key, value)| Op::Insert(key, value)),
        2 => (0..128i64).prop_map(Op::Delete),
    ]
}

macro_rules! model_check {
    ($map:ident, $model:ident, $ops:ident) => {
        for op in &$ops {
            match *op {
                Op::Insert(key, value) => {
                    prop_assert_eq!($map.insert(key, value), $model.insert(key, value));
                },
                Op::Delete(key) => {
                    prop_assert_eq!($map.delete(key), $model.remove(&key));
                },
            }
            $map.assert_invariants();
            prop_assert_eq!($map.count(), $model.len());
        }

        let keys = $map.iter().map(|(key, _)| key).collect::<Vec<Key>>();
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        for key in 0..128 {
            match $model.get(&key) {
                Some(value) => {
                    prop_assert_eq!($map.search(key), Ok(value));
                },
                None => {
                    prop_assert_eq!($map.search(key), Err(Error::NotFound(key)));
                },
            }
        }
    };
}

proptest! {
    #[test]
    fn avl_matches_model(ops in prop::collection::vec(op_strategy(), 0..400)) {
        let mut map = AvlMap::new();
        let mut model = BTreeMap::new();
        model_check!(map, model, ops);
    }

    #[test]
    fn red_black_matches_model(ops in prop::collection::vec(op_strategy(), 0..400)) {
        let mut map = RedBlackMap::new();
        let mut model = BTreeMap::new();
        model_check!(map, model, ops);
    }

    #[test]
    fn walk_yields_values_in_key_order(keys in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut map = RedBlackMap::new();
        let mut model = BTreeMap::new();
        for key in &keys {
            map.insert(*key, key.wrapping_mul(3));
            model.insert(*key, key.wrapping_mul(3));
        }
        prop_assert_eq!(
            map.walk().collect::<Vec<&i64>>(),
            model.values().collect::<Vec<&i64>>()
        );
    }

    #[test]
    fn drain_empties_both_engines(keys in prop::collection::btree_set(0..1_000i64, 0..200)) {
        let mut avl = AvlMap::new();
        let mut rb = RedBlackMap::new();
        for key in &keys {
            avl.insert(*key, ());
            rb.insert(*key, ());
        }
        for key in keys.iter().rev() {
            prop_assert_eq!(avl.delete(*key), Some(()));
            prop_assert_eq!(rb.delete(*key), Some(()));
        }
        prop_assert!(avl.is_empty() && avl.iter().next().is_none());
        prop_assert!(rb.is_empty() && rb.walk().next().is_none());
    }
}
