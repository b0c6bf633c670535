#[allow(clippy::disallowed_types)]
pub type Hasher = ahash::AHasher;
pub type BuildHasher = std::hash::BuildHasherDefault<Hasher>;

// Keys are hashed in-process only, so a fixed-seed hasher is fine
#[allow(clippy::disallowed_types)]
pub type HashMap<K, V> = std::collections::HashMap<K, V, BuildHasher>;
#[allow(clippy::disallowed_types)]
pub type HashSet<V> = std::collections::HashSet<V, BuildHasher>;

/// Hashes `t` with the same hasher the [HashMap] and [HashSet] aliases use.
pub fn hash_of<T: std::hash::Hash>(t: &T) -> u64 {
    let mut h = Hasher::default();
    t.hash(&mut h);
    std::hash::Hasher::finish(&h)
}
