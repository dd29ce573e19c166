use std::hash::Hash;

/// A wrapper around an implementation of a HashMap.
///
/// Lookups made during validation are collected in insertion order so that the
/// first failing reference is always the one reported, regardless of hashing.
/// We use indexmap::IndexMap for this, but wrap it in a newtype so the choice
/// stays an implementation detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Map<K: Eq + Hash, V>(indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>);

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self(indexmap::IndexMap::default())
    }
}

impl<K: Eq + Hash, V> std::ops::Deref for Map<K, V> {
    type Target = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Eq + Hash, V> std::ops::DerefMut for Map<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
