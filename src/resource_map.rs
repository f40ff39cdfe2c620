/*!
 * Canonical key-value model shared by every localization format.
 *
 * All resource formats, flat or nested, are parsed into a [`ResourceMap`]:
 * an insertion-ordered mapping from string key to string value. Order matters
 * because target files are long-lived artifacts that get compared across runs,
 * so serialization must be deterministic.
 */

use std::collections::{HashMap, HashSet};

/// Insertion-ordered map of localization keys to values.
///
/// Backed by an entry vector plus a key-to-position index. Inserting an
/// existing key updates the value in place and keeps its original position;
/// inserting a new key appends it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ResourceMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or update a pair. Existing keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Merge `other` into `self`; pairs from `other` win on key collision.
    pub fn extend(&mut self, other: ResourceMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Restrict the map to the given key set, preserving this map's order.
    pub fn sub_map(&self, keys: &HashSet<String>) -> ResourceMap {
        self.iter()
            .filter(|(k, _)| keys.contains(*k))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for ResourceMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut map = ResourceMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for ResourceMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ResourceMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Partition a map into batches of at most `size` pairs, preserving order.
///
/// Batch boundaries are purely a batching mechanism; the union of the returned
/// batches is always exactly the input map.
pub fn chunk_map(map: &ResourceMap, size: usize) -> Vec<ResourceMap> {
    let size = size.max(1);
    let mut chunks = Vec::new();
    let mut current = ResourceMap::new();

    for (key, value) in map.iter() {
        current.insert(key, value);
        if current.len() == size {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Union of several maps. Later maps win on key collision.
pub fn simple_union(maps: Vec<ResourceMap>) -> ResourceMap {
    let mut result = ResourceMap::new();
    for map in maps {
        result.extend(map);
    }
    result
}
