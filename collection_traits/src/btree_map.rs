use crate::{HasLength, Mapping};
use std::collections::BTreeMap;

impl<K, V> HasLength for BTreeMap<K, V> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
    {
        self.iter()
    }
}
