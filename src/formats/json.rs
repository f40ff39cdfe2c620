/*!
 * Nested JSON resource codec.
 *
 * Nested objects of string leaves are flattened into the canonical map by
 * joining key path segments with [`NESTING_SEPARATOR`]. Unflattening reverses
 * the split. Both directions are identities of each other provided no raw key
 * contains the separator; a key that does is rejected rather than silently
 * truncated, because target files are compared byte-for-byte across runs.
 */

use serde_json::{Map, Value};

use crate::errors::{FlattenError, ParseError};
use crate::resource_map::ResourceMap;

/// Separator joining nested key segments in flattened form.
///
/// This token is part of the on-disk compatibility surface and must not
/// change between releases.
pub const NESTING_SEPARATOR: &str = "_/";

/// Parse nested JSON resource content into the canonical flat map.
pub fn parse_json_string(content: &str) -> Result<ResourceMap, ParseError> {
    if content.trim().is_empty() {
        return Ok(ResourceMap::new());
    }

    let value: Value = serde_json::from_str(content)
        .map_err(|e| ParseError::Json(e.to_string()))?;
    let Value::Object(object) = value else {
        return Err(ParseError::Json("Root element must be an object".to_string()));
    };

    flatten(&object, NESTING_SEPARATOR).map_err(|e| ParseError::Json(e.to_string()))
}

/// Serialize the canonical flat map back to pretty-printed nested JSON.
pub fn serialize_to_json(map: &ResourceMap) -> Result<String, ParseError> {
    let nested = Value::Object(unflatten(map, NESTING_SEPARATOR));
    let mut content = serde_json::to_string_pretty(&nested)
        .map_err(|e| ParseError::Json(e.to_string()))?;
    content.push('\n');
    Ok(content)
}

/// Flatten a nested JSON object of string leaves into a flat map.
///
/// Leaf order follows document order. A raw key containing `separator` is a
/// usage error; non-string scalar leaves are carried as their JSON rendering.
pub fn flatten(object: &Map<String, Value>, separator: &str) -> Result<ResourceMap, FlattenError> {
    let mut map = ResourceMap::new();
    flatten_into(object, separator, "", &mut map)?;
    Ok(map)
}

fn flatten_into(
    object: &Map<String, Value>,
    separator: &str,
    prefix: &str,
    map: &mut ResourceMap,
) -> Result<(), FlattenError> {
    for (key, value) in object {
        if key.contains(separator) {
            return Err(FlattenError::KeyContainsSeparator {
                key: key.clone(),
                separator: separator.to_string(),
            });
        }

        let flat_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{separator}{key}")
        };

        match value {
            Value::Object(child) => flatten_into(child, separator, &flat_key, map)?,
            Value::String(leaf) => map.insert(flat_key, leaf.clone()),
            other => map.insert(flat_key, other.to_string()),
        }
    }
    Ok(())
}

/// Rebuild the nested JSON object from a flat map by splitting keys on
/// `separator`. Later entries win when a leaf and a group collide.
pub fn unflatten(map: &ResourceMap, separator: &str) -> Map<String, Value> {
    let mut root = Map::new();

    for (flat_key, value) in map.iter() {
        let segments: Vec<&str> = flat_key.split(separator).collect();
        let mut current = &mut root;

        for segment in &segments[..segments.len() - 1] {
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            current = slot.as_object_mut().expect("slot was just made an object");
        }

        let leaf = segments[segments.len() - 1];
        current.insert(leaf.to_string(), Value::String(value.to_string()));
    }

    root
}
