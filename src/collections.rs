use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion ordered set - iteration order only depends on the search, never on hashing
pub type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
