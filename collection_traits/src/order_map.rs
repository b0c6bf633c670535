use crate::{HasLength, Mapping};

#[allow(clippy::disallowed_types)]
impl<K, V, H> Mapping for ordermap::OrderMap<K, V, H> {
    type Key = K;
    type Value = V;

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
    {
        ordermap::OrderMap::iter(self)
    }
}

#[allow(clippy::disallowed_types)]
impl<K, V, H> HasLength for ordermap::OrderMap<K, V, H> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}
