/*!
 * Tests for the canonical insertion-ordered map and its helpers
 */

use std::collections::HashSet;

use l10nsync::resource_map::{ResourceMap, chunk_map, simple_union};

#[test]
fn test_insert_withNewKeys_shouldPreserveInsertionOrder() {
    let mut map = ResourceMap::new();
    map.insert("zebra", "1");
    map.insert("apple", "2");
    map.insert("mango", "3");

    let keys: Vec<&str> = map.keys().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_insert_withExistingKey_shouldUpdateInPlace() {
    let mut map = ResourceMap::new();
    map.insert("first", "1");
    map.insert("second", "2");
    map.insert("first", "updated");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("first"), Some("updated"));
    let keys: Vec<&str> = map.keys().collect();
    assert_eq!(keys, vec!["first", "second"]);
}

#[test]
fn test_get_withMissingKey_shouldReturnNone() {
    let map = ResourceMap::from([("present", "yes")]);
    assert_eq!(map.get("absent"), None);
    assert!(map.contains_key("present"));
    assert!(!map.contains_key("absent"));
}

#[test]
fn test_extend_shouldLetRightSideWin() {
    let mut base = ResourceMap::from([("a", "1"), ("b", "2")]);
    let overlay = ResourceMap::from([("b", "two"), ("c", "3")]);

    base.extend(overlay);

    assert_eq!(base.len(), 3);
    assert_eq!(base.get("b"), Some("two"));
    let keys: Vec<&str> = base.keys().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn test_subMap_shouldPreserveSourceOrder() {
    let map = ResourceMap::from([("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
    let wanted: HashSet<String> = ["d", "b"].iter().map(|s| s.to_string()).collect();

    let sub = map.sub_map(&wanted);

    let keys: Vec<&str> = sub.keys().collect();
    assert_eq!(keys, vec!["b", "d"]);
    assert_eq!(sub.get("b"), Some("2"));
}

#[test]
fn test_chunkMap_withEmptyMap_shouldReturnNoChunks() {
    let chunks = chunk_map(&ResourceMap::new(), 10);
    assert!(chunks.is_empty());
}

#[test]
fn test_chunkMap_withSingleElement_shouldReturnOneChunk() {
    let map = ResourceMap::from([("key1", "value1")]);
    let chunks = chunk_map(&map, 1);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], map);
}

#[test]
fn test_chunkMap_withSevenEntriesAndSizeThree_shouldYieldThreeChunks() {
    let map = ResourceMap::from([
        ("k1", "v1"),
        ("k2", "v2"),
        ("k3", "v3"),
        ("k4", "v4"),
        ("k5", "v5"),
        ("k6", "v6"),
        ("k7", "v7"),
    ]);

    let chunks = chunk_map(&map, 3);

    let sizes: Vec<usize> = chunks.iter().map(ResourceMap::len).collect();
    assert_eq!(sizes, vec![3, 3, 1]);

    // The chunks cover every key exactly once, in input order
    let flattened: Vec<&str> = chunks.iter().flat_map(|c| c.keys()).collect();
    assert_eq!(flattened, vec!["k1", "k2", "k3", "k4", "k5", "k6", "k7"]);
}

#[test]
fn test_chunkMap_withSizeLargerThanMap_shouldYieldSingleChunk() {
    let map = ResourceMap::from([("a", "1"), ("b", "2")]);
    let chunks = chunk_map(&map, 50);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), 2);
}

#[test]
fn test_simpleUnion_withEmptyMaps_shouldBeEmpty() {
    let result = simple_union(vec![ResourceMap::new(), ResourceMap::new()]);
    assert!(result.is_empty());
}

#[test]
fn test_simpleUnion_withOneEmptyOneFull_shouldEqualTheFullMap() {
    let full = ResourceMap::from([("k1", "v1"), ("k2", "v2")]);
    let result = simple_union(vec![ResourceMap::new(), full.clone()]);
    assert_eq!(result, full);
}

#[test]
fn test_simpleUnion_withThreeMaps_shouldMergeAll() {
    let result = simple_union(vec![
        ResourceMap::from([("k1", "v1")]),
        ResourceMap::from([("k2", "v2")]),
        ResourceMap::from([("k3", "v3")]),
    ]);

    assert_eq!(result, ResourceMap::from([("k1", "v1"), ("k2", "v2"), ("k3", "v3")]));
}
