#![forbid(clippy::unconditional_recursion)]

pub mod btree_map;
pub mod hash_map;

#[cfg(feature = "ordermap")]
pub mod order_map;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Collection of key-value pairs with unique keys.
///
/// Iteration order is whatever the underlying container provides, and callers
/// generic over `Mapping` must treat it as unspecified.
pub trait Mapping: HasLength {
    type Key;
    type Value;

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;
}
