//! Method syntax for the [array](crate::array) and [mapping](crate::mapping)
//! functions.
//!
//! Names differ from the free functions where the plain name is already taken
//! by an inherent slice or map method. [array::contains] and [array::concat]
//! have no method here: `[T]::contains` and `[&[T]]::concat` already behave
//! the same way.

use crate::{array, mapping};
use collection_traits::Mapping;
use std::hash::Hash;

pub trait ArrayExt<T> {
    fn map_indexed<R>(&self, f: impl FnMut(usize, &T) -> R) -> Vec<R>;
    fn try_map_indexed<R, E>(&self, f: impl FnMut(usize, &T) -> Result<R, E>)
        -> Result<Vec<R>, E>;
    fn for_each_indexed(&self, f: impl FnMut(usize, &T));
    fn try_for_each_indexed<E>(&self, f: impl FnMut(usize, &T) -> Result<(), E>)
        -> Result<(), E>;
    fn filter_indexed(&self, predicate: impl FnMut(usize, &T) -> bool) -> Vec<T>
    where
        T: Clone;
    fn try_filter_indexed<E>(
        &self,
        predicate: impl FnMut(usize, &T) -> Result<bool, E>,
    ) -> Result<Vec<T>, E>
    where
        T: Clone;
    fn every(&self, predicate: impl FnMut(&T) -> bool) -> bool;
    fn any(&self, predicate: impl FnMut(&T) -> bool) -> bool;
    fn uniq(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;
    fn hash_uniq<H: Eq + Hash>(&self, hash: impl FnMut(&T) -> H) -> Vec<T>
    where
        T: Clone;
    fn find_indexed(&self, predicate: impl FnMut(usize, &T) -> bool) -> Option<&T>;
    fn find_or_default(&self, predicate: impl FnMut(usize, &T) -> bool) -> (T, bool)
    where
        T: Clone + Default;
    fn find_index(&self, predicate: impl FnMut(usize, &T) -> bool) -> Option<usize>;
    fn reversed(&self) -> Vec<T>
    where
        T: Clone;
    fn process<R>(&self, f: impl FnMut(&T) -> R) -> Vec<R>;
    fn try_process<R, E>(&self, f: impl FnMut(&T) -> Result<R, E>) -> Result<Vec<R>, E>;
}

impl<T> ArrayExt<T> for [T] {
    fn map_indexed<R>(&self, f: impl FnMut(usize, &T) -> R) -> Vec<R> {
        array::map(self, f)
    }

    fn try_map_indexed<R, E>(
        &self,
        f: impl FnMut(usize, &T) -> Result<R, E>,
    ) -> Result<Vec<R>, E> {
        array::try_map(self, f)
    }

    fn for_each_indexed(&self, f: impl FnMut(usize, &T)) {
        array::for_each(self, f)
    }

    fn try_for_each_indexed<E>(
        &self,
        f: impl FnMut(usize, &T) -> Result<(), E>,
    ) -> Result<(), E> {
        array::try_for_each(self, f)
    }

    fn filter_indexed(&self, predicate: impl FnMut(usize, &T) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        array::filter(self, predicate)
    }

    fn try_filter_indexed<E>(
        &self,
        predicate: impl FnMut(usize, &T) -> Result<bool, E>,
    ) -> Result<Vec<T>, E>
    where
        T: Clone,
    {
        array::try_filter(self, predicate)
    }

    fn every(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        array::every(self, predicate)
    }

    fn any(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        array::any(self, predicate)
    }

    fn uniq(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        array::uniq(self)
    }

    fn hash_uniq<H: Eq + Hash>(&self, hash: impl FnMut(&T) -> H) -> Vec<T>
    where
        T: Clone,
    {
        array::hash_uniq(self, hash)
    }

    fn find_indexed(&self, predicate: impl FnMut(usize, &T) -> bool) -> Option<&T> {
        array::find(self, predicate)
    }

    fn find_or_default(&self, predicate: impl FnMut(usize, &T) -> bool) -> (T, bool)
    where
        T: Clone + Default,
    {
        array::find_or_default(self, predicate)
    }

    fn find_index(&self, predicate: impl FnMut(usize, &T) -> bool) -> Option<usize> {
        array::find_index(self, predicate)
    }

    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        array::reverse(self)
    }

    fn process<R>(&self, f: impl FnMut(&T) -> R) -> Vec<R> {
        array::process(self, f)
    }

    fn try_process<R, E>(&self, f: impl FnMut(&T) -> Result<R, E>) -> Result<Vec<R>, E> {
        array::try_process(self, f)
    }
}

pub trait MappingExt: Mapping {
    fn walk<R>(&self, f: impl FnMut(&Self::Key, &Self::Value) -> R) -> Vec<R>;
    fn try_walk<R, E>(
        &self,
        f: impl FnMut(&Self::Key, &Self::Value) -> Result<R, E>,
    ) -> Result<Vec<R>, E>;
    fn for_each_pair(&self, f: impl FnMut(&Self::Key, &Self::Value));
    fn try_for_each_pair<E>(
        &self,
        f: impl FnMut(&Self::Key, &Self::Value) -> Result<(), E>,
    ) -> Result<(), E>;
    fn filter_pairs(&self, predicate: impl FnMut(&Self::Key, &Self::Value) -> bool) -> Self
    where
        Self: Sized + FromIterator<(Self::Key, Self::Value)>,
        Self::Key: Clone,
        Self::Value: Clone;
    fn key_list(&self) -> Vec<Self::Key>
    where
        Self::Key: Clone;
    fn value_list(&self) -> Vec<Self::Value>
    where
        Self::Value: Clone;
}

impl<M: Mapping> MappingExt for M {
    fn walk<R>(&self, f: impl FnMut(&M::Key, &M::Value) -> R) -> Vec<R> {
        mapping::walk(self, f)
    }

    fn try_walk<R, E>(
        &self,
        f: impl FnMut(&M::Key, &M::Value) -> Result<R, E>,
    ) -> Result<Vec<R>, E> {
        mapping::try_walk(self, f)
    }

    fn for_each_pair(&self, f: impl FnMut(&M::Key, &M::Value)) {
        mapping::for_each(self, f)
    }

    fn try_for_each_pair<E>(
        &self,
        f: impl FnMut(&M::Key, &M::Value) -> Result<(), E>,
    ) -> Result<(), E> {
        mapping::try_for_each(self, f)
    }

    fn filter_pairs(&self, predicate: impl FnMut(&M::Key, &M::Value) -> bool) -> Self
    where
        Self: Sized + FromIterator<(Self::Key, Self::Value)>,
        Self::Key: Clone,
        Self::Value: Clone,
    {
        mapping::filter(self, predicate)
    }

    fn key_list(&self) -> Vec<M::Key>
    where
        M::Key: Clone,
    {
        mapping::keys(self)
    }

    fn value_list(&self) -> Vec<M::Value>
    where
        M::Value: Clone,
    {
        mapping::values(self)
    }
}
