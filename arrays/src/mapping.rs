//! Operations over key-value maps.
//!
//! Anything implementing [Mapping] is accepted. Iteration order of the
//! underlying map leaks into every sequence produced here and must not be
//! relied upon.

use collection_traits::Mapping;
use tracing::trace;


/// Applies `f` to every pair and collects the results.
pub fn walk<M: Mapping, R>(map: &M, mut f: impl FnMut(&M::Key, &M::Value) -> R) -> Vec<R> {
    map.pairs().map(|(key, value)| f(key, value)).collect()
}

/// Fallible version of [walk]. Stops on the first error and returns it as is.
pub fn try_walk<M: Mapping, R, E>(
    map: &M,
    mut f: impl FnMut(&M::Key, &M::Value) -> Result<R, E>,
) -> Result<Vec<R>, E> {
    let mut out = Vec::with_capacity(map.len());
    for (key, value) in map.pairs() {
        match f(key, value) {
            Ok(item) => out.push(item),
            Err(err) => {
                trace!(walked = out.len(), "callback failed, aborting");
                return Err(err);
            }
        }
    }
    Ok(out)
}

/// Calls `f` for every pair.
pub fn for_each<M: Mapping>(map: &M, mut f: impl FnMut(&M::Key, &M::Value)) {
    map.pairs().for_each(|(key, value)| f(key, value));
}

/// Fallible version of [for_each], stops on the first error.
pub fn try_for_each<M: Mapping, E>(
    map: &M,
    mut f: impl FnMut(&M::Key, &M::Value) -> Result<(), E>,
) -> Result<(), E> {
    map.pairs().try_for_each(|(key, value)| {
        f(key, value).inspect_err(|_| trace!("callback failed, aborting"))
    })
}

/// Builds a new map of the same type holding only the pairs for which
/// `predicate` holds.
pub fn filter<M>(map: &M, mut predicate: impl FnMut(&M::Key, &M::Value) -> bool) -> M
where
    M: Mapping + FromIterator<(M::Key, M::Value)>,
    M::Key: Clone,
    M::Value: Clone,
{
    map.pairs()
        .filter(|&(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Collects every key.
pub fn keys<M: Mapping>(map: &M) -> Vec<M::Key>
where
    M::Key: Clone,
{
    map.pairs().map(|(key, _)| key.clone()).collect()
}

/// Collects every value, duplicates included.
pub fn values<M: Mapping>(map: &M) -> Vec<M::Value>
where
    M::Value: Clone,
{
    map.pairs().map(|(_, value)| value.clone()).collect()
}
