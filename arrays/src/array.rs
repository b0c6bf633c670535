//! Operations over ordered sequences.
//!
//! Every function borrows its input and builds a fresh output, the input
//! slice is never modified. Index-aware callbacks receive the zero-based
//! position of the element alongside the element itself.

use crate::map::HashMap;
use itertools::Itertools;
use std::hash::Hash;
use tracing::trace;


fn aborted_at(index: usize) {
    trace!(index, "callback failed, aborting");
}

/// Applies `f` to every element, keeping positional correspondence.
pub fn map<T, R>(items: &[T], mut f: impl FnMut(usize, &T) -> R) -> Vec<R> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| f(index, item))
        .collect()
}

/// Fallible version of [map].
///
/// Stops on the first failing element and returns its error as is. No
/// partial output is produced.
pub fn try_map<T, R, E>(
    items: &[T],
    mut f: impl FnMut(usize, &T) -> Result<R, E>,
) -> Result<Vec<R>, E> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| f(index, item).inspect_err(|_| aborted_at(index)))
        .try_collect()
}

/// Calls `f` for every element, from the first to the last.
pub fn for_each<T>(items: &[T], mut f: impl FnMut(usize, &T)) {
    items
        .iter()
        .enumerate()
        .for_each(|(index, item)| f(index, item));
}

/// Fallible version of [for_each], stops on the first error.
pub fn try_for_each<T, E>(
    items: &[T],
    mut f: impl FnMut(usize, &T) -> Result<(), E>,
) -> Result<(), E> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| f(index, item).inspect_err(|_| aborted_at(index)))
}

/// Returns the elements for which `predicate` holds, in their original order.
pub fn filter<T: Clone>(items: &[T], mut predicate: impl FnMut(usize, &T) -> bool) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|&(index, item)| predicate(index, item))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Fallible version of [filter], stops on the first error.
pub fn try_filter<T: Clone, E>(
    items: &[T],
    mut predicate: impl FnMut(usize, &T) -> Result<bool, E>,
) -> Result<Vec<T>, E> {
    let mut kept = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if predicate(index, item).inspect_err(|_| aborted_at(index))? {
            kept.push(item.clone());
        }
    }
    Ok(kept)
}

/// Joins `parts` in argument order.
pub fn concat<T: Clone>(parts: &[&[T]]) -> Vec<T> {
    concat_all(parts.iter().copied())
}

/// Same as [concat], for when the parts come from an iterator.
pub fn concat_all<'a, T: Clone + 'a>(parts: impl IntoIterator<Item = &'a [T]>) -> Vec<T> {
    parts.into_iter().flatten().cloned().collect()
}

/// Checks that `predicate` holds for every element. True for an empty slice.
pub fn every<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().all(predicate)
}

/// Checks that `predicate` holds for at least one element. False for an
/// empty slice.
pub fn any<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().any(predicate)
}

/// Removes duplicate elements.
///
/// Duplicates are equal by definition, so which of them survives is not
/// observable. The order of the result is unspecified.
pub fn uniq<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    items.iter().unique().cloned().collect()
}

/// Removes elements that produce the same key under `hash`.
///
/// For every key the last element carrying it is kept. The order of the
/// result is unspecified.
pub fn hash_uniq<T: Clone, H: Eq + Hash>(items: &[T], mut hash: impl FnMut(&T) -> H) -> Vec<T> {
    let mut by_key: HashMap<H, &T> = HashMap::default();
    for item in items {
        by_key.insert(hash(item), item);
    }
    by_key.into_values().cloned().collect()
}

/// Returns the first element for which `predicate` holds.
pub fn find<T>(items: &[T], mut predicate: impl FnMut(usize, &T) -> bool) -> Option<&T> {
    items
        .iter()
        .enumerate()
        .find(|&(index, item)| predicate(index, item))
        .map(|(_, item)| item)
}

/// Like [find], but returns an owned copy of the element and a found flag.
///
/// When nothing matches, `T::default()` is returned with `false`.
pub fn find_or_default<T: Clone + Default>(
    items: &[T],
    predicate: impl FnMut(usize, &T) -> bool,
) -> (T, bool) {
    match find(items, predicate) {
        Some(item) => (item.clone(), true),
        None => (T::default(), false),
    }
}

/// Returns the lowest index for which `predicate` holds.
pub fn find_index<T>(items: &[T], mut predicate: impl FnMut(usize, &T) -> bool) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .position(|(index, item)| predicate(index, item))
}

/// Returns a reversed copy of `items`.
pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

/// Checks whether any element equals `target`.
pub fn contains<T: PartialEq>(items: &[T], target: &T) -> bool {
    items.contains(target)
}

/// Index-free version of [map].
pub fn process<T, R>(items: &[T], f: impl FnMut(&T) -> R) -> Vec<R> {
    items.iter().map(f).collect()
}

/// Index-free version of [try_map].
pub fn try_process<T, R, E>(
    items: &[T],
    mut f: impl FnMut(&T) -> Result<R, E>,
) -> Result<Vec<R>, E> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| f(item).inspect_err(|_| aborted_at(index)))
        .try_collect()
}
