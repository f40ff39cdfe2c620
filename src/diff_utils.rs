/*!
 * Change detection between the source snapshot and the last synced state.
 */

use std::collections::HashSet;

use crate::lockfile::hash_key_value_pair;
use crate::resource_map::ResourceMap;

/// Source keys that are new or modified ("NOM") relative to the lock hashes.
///
/// A key is NOM iff its pair digest is absent from the lock set. The check is
/// forward-only: deleted source keys are not detected, and stale target keys
/// are never pruned.
pub fn retrieve_nom_source_keys(
    key_value_hashes: &HashSet<String>,
    source_map: &ResourceMap,
) -> HashSet<String> {
    source_map
        .iter()
        .filter(|(key, value)| !key_value_hashes.contains(&hash_key_value_pair(key, value)))
        .map(|(key, _)| key.to_string())
        .collect()
}

/// The exact key set one target language must receive translations for:
/// source keys missing from the target, plus NOM source keys even when the
/// target already has them. Every other target key is left untouched.
pub fn retrieve_keys_to_be_localized(
    source_map: &ResourceMap,
    target_map: &ResourceMap,
    nom_keys: &HashSet<String>,
) -> HashSet<String> {
    source_map
        .keys()
        .filter(|key| !target_map.contains_key(key) || nom_keys.contains(*key))
        .map(str::to_string)
        .collect()
}
