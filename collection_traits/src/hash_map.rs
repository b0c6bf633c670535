use crate::{HasLength, Mapping};
use std::collections::HashMap;

#[allow(clippy::disallowed_types)]
impl<K, V, S> HasLength for HashMap<K, V, S> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

#[allow(clippy::disallowed_types)]
impl<K, V, S> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
    {
        self.iter()
    }
}
