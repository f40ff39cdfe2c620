/*!
 * Content-addressed sync state.
 *
 * The lock file records one SHA-256 digest per source (key, value) pair at
 * the time of the last successful sync. It deliberately knows nothing about
 * which key produced which digest; hash collisions between unrelated pairs
 * are an accepted, vanishingly small risk.
 */

use std::collections::HashSet;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::errors::AppError;
use crate::file_utils;
use crate::resource_map::ResourceMap;

/// Default lock file name inside the localization root.
pub const LOCK_FILE_NAME: &str = "i18n.lock";

/// Deterministic digest of a single key-value pair.
pub fn hash_key_value_pair(key: &str, value: &str) -> String {
    format!("{:x}", Sha256::digest(format!("{key}={value}")))
}

/// Read the lock hash set. An absent or blank file is an empty set.
pub async fn read_lock_file(path: impl AsRef<Path>) -> Result<HashSet<String>, AppError> {
    let Some(content) = file_utils::read_to_string_if_exists(path.as_ref()).await? else {
        return Ok(HashSet::new());
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Render the lock content for a source map: one digest per line, in map
/// iteration order.
pub fn create_lock_file_content(map: &ResourceMap) -> String {
    let mut content = String::new();
    for (key, value) in map.iter() {
        content.push_str(&hash_key_value_pair(key, value));
        content.push('\n');
    }
    content
}

/// Persist the lock file for the given source snapshot.
pub async fn write_lock_file(path: impl AsRef<Path>, map: &ResourceMap) -> Result<(), AppError> {
    let content = create_lock_file_content(map);
    file_utils::write_atomically(path.as_ref(), &content).await?;
    Ok(())
}
