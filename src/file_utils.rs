/*!
 * Async file system helpers.
 *
 * All resource and lock file I/O funnels through here so that writes stay
 * atomic: content lands in a sibling temp file first and is renamed over the
 * destination, so a failed run never leaves a half-written file behind.
 */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

/// Read a file to a string, or `None` when it does not exist.
pub async fn read_to_string_if_exists(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
    }
}

/// Write a string to a file atomically (temp file + rename in place).
pub async fn write_atomically(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let temp_path = temp_sibling(path);
    fs::write(&temp_path, content)
        .await
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .await
        .with_context(|| format!("Failed to move temp file into place: {}", path.display()))?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

/// Resolve a concrete file name from a `{language}` pattern,
/// e.g. `("fr", "messages_{language}.properties")` -> `messages_fr.properties`.
pub fn generate_localization_file_name(lang_code: &str, file_name_pattern: &str) -> String {
    file_name_pattern.replace("{language}", lang_code)
}
