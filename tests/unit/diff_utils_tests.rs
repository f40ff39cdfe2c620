/*!
 * Tests for the diff engine: NOM detection and keys-to-localize
 */

use std::collections::HashSet;

use l10nsync::diff_utils::{retrieve_keys_to_be_localized, retrieve_nom_source_keys};
use l10nsync::lockfile::hash_key_value_pair;
use l10nsync::resource_map::ResourceMap;

fn key_set(keys: &[&str]) -> HashSet<String> {
    keys.iter().map(|s| s.to_string()).collect()
}

fn sample_source() -> ResourceMap {
    ResourceMap::from([("a", "b"), ("c", "d"), ("e", "f")])
}

#[test]
fn test_retrieveNomSourceKeys_withNoHashes_shouldReturnAllKeys() {
    let nom = retrieve_nom_source_keys(&HashSet::new(), &sample_source());
    assert_eq!(nom, key_set(&["a", "c", "e"]));
}

#[test]
fn test_retrieveNomSourceKeys_withOneMatchingHash_shouldReturnTheRest() {
    let mut hashes = HashSet::new();
    hashes.insert(hash_key_value_pair("a", "b"));

    let nom = retrieve_nom_source_keys(&hashes, &sample_source());

    assert_eq!(nom, key_set(&["c", "e"]));
}

#[test]
fn test_retrieveNomSourceKeys_withStaleHash_shouldTreatKeyAsModified() {
    // The lock knows 'a' with an old value, so 'a' counts as modified
    let mut hashes = HashSet::new();
    hashes.insert(hash_key_value_pair("a", "d"));

    let nom = retrieve_nom_source_keys(&hashes, &sample_source());

    assert_eq!(nom, key_set(&["a", "c", "e"]));
}

#[test]
fn test_retrieveNomSourceKeys_withUpToDateLock_shouldReturnEmptySet() {
    let mut hashes = HashSet::new();
    hashes.insert(hash_key_value_pair("a", "b"));
    hashes.insert(hash_key_value_pair("c", "d"));
    hashes.insert(hash_key_value_pair("e", "f"));

    let nom = retrieve_nom_source_keys(&hashes, &sample_source());

    assert!(nom.is_empty());
}

#[test]
fn test_retrieveNomSourceKeys_withExtraHashes_shouldIgnoreThem() {
    // Hashes for keys deleted from the source do not matter
    let mut hashes = HashSet::new();
    hashes.insert(hash_key_value_pair("a", "b"));
    hashes.insert(hash_key_value_pair("c", "d"));
    hashes.insert(hash_key_value_pair("e", "f"));
    hashes.insert(hash_key_value_pair("g", "q"));
    hashes.insert(hash_key_value_pair("h", "1"));

    let nom = retrieve_nom_source_keys(&hashes, &sample_source());

    assert!(nom.is_empty());
}

#[test]
fn test_retrieveKeysToBeLocalized_withEmptyTarget_shouldReturnAllSourceKeys() {
    let source = ResourceMap::from([("a", "x"), ("b", "y")]);
    let target = ResourceMap::new();

    let keys = retrieve_keys_to_be_localized(&source, &target, &key_set(&["b", "a"]));

    assert_eq!(keys, key_set(&["a", "b"]));
}

#[test]
fn test_retrieveKeysToBeLocalized_withFullTargetAndNoNomKeys_shouldBeEmpty() {
    let source = ResourceMap::from([("a", "x"), ("b", "y")]);
    let target = ResourceMap::from([("a", "translated"), ("b", "translated")]);

    let keys = retrieve_keys_to_be_localized(&source, &target, &HashSet::new());

    assert!(keys.is_empty());
}

#[test]
fn test_retrieveKeysToBeLocalized_shouldUnionMissingAndNomKeys() {
    let source = ResourceMap::from([("a", "x"), ("b", "y"), ("c", "z")]);
    // 'c' is missing from the target; 'a' is modified at the source
    let target = ResourceMap::from([("a", "old"), ("b", "ok")]);

    let keys = retrieve_keys_to_be_localized(&source, &target, &key_set(&["a"]));

    assert_eq!(keys, key_set(&["a", "c"]));
}

#[test]
fn test_retrieveKeysToBeLocalized_shouldIgnoreNomKeysAbsentFromSource() {
    let source = ResourceMap::from([("a", "x")]);
    let target = ResourceMap::from([("a", "t")]);

    let keys = retrieve_keys_to_be_localized(&source, &target, &key_set(&["ghost"]));

    assert!(keys.is_empty());
}

#[test]
fn test_retrieveKeysToBeLocalized_shouldLeaveStaleTargetKeysAlone() {
    // Keys only present in the target are never selected (no pruning)
    let source = ResourceMap::from([("a", "x")]);
    let target = ResourceMap::from([("a", "t"), ("obsolete", "old")]);

    let keys = retrieve_keys_to_be_localized(&source, &target, &HashSet::new());

    assert!(keys.is_empty());
}
