/*!
 * Localization format detection and codec dispatch.
 *
 * Each supported format has one parser and one serializer converting between
 * raw file content and the canonical [`ResourceMap`]:
 * - `properties`: flat Java-style key-value files
 * - `json`: nested JSON objects of string leaves
 * - `android`: Android `strings.xml` resources
 */

use std::path::Path;

use log::debug;

use crate::errors::AppError;
use crate::file_utils;
use crate::resource_map::ResourceMap;

pub mod android;
pub mod json;
pub mod properties;

/// Supported localization file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizationFormat {
    /// Java-style `.properties` file
    Properties,
    /// Nested JSON resource file
    Json,
    /// Android `strings.xml` resource file
    AndroidXml,
}

/// Extract the extension of a path: the suffix after the final `.`,
/// lower-cased. Empty when the trimmed path contains no dot.
pub fn find_suffix(path: &str) -> String {
    let trimmed = path.trim();
    match trimmed.rfind('.') {
        Some(pos) => trimmed[pos + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// Map a file path to its localization format via the extension.
///
/// An unrecognized or empty extension is a reportable error, never a silent
/// default.
pub fn detect_format(path: &str) -> Result<LocalizationFormat, AppError> {
    match find_suffix(path).as_str() {
        "properties" => Ok(LocalizationFormat::Properties),
        "json" => Ok(LocalizationFormat::Json),
        "xml" => Ok(LocalizationFormat::AndroidXml),
        other => Err(AppError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a localization file into the canonical map.
///
/// An absent or empty file yields an empty map without touching format
/// detection, so a target that does not exist yet is not an error.
pub async fn parse(path: impl AsRef<Path>) -> Result<ResourceMap, AppError> {
    let path = path.as_ref();

    let Some(content) = file_utils::read_to_string_if_exists(path).await? else {
        debug!("Resource file {} does not exist, using empty map", path.display());
        return Ok(ResourceMap::new());
    };

    let format = detect_format(&path.to_string_lossy())?;
    parse_string(&content, format)
}

/// Parse raw content already known to be in `format`.
pub fn parse_string(content: &str, format: LocalizationFormat) -> Result<ResourceMap, AppError> {
    let map = match format {
        LocalizationFormat::Properties => properties::parse_properties_string(content)?,
        LocalizationFormat::Json => json::parse_json_string(content)?,
        LocalizationFormat::AndroidXml => android::parse_xml_string(content)?,
    };
    Ok(map)
}

/// Serialize the canonical map into the given format.
pub fn serialize(map: &ResourceMap, format: LocalizationFormat) -> Result<String, AppError> {
    let content = match format {
        LocalizationFormat::Properties => properties::serialize_to_properties(map),
        LocalizationFormat::Json => json::serialize_to_json(map)?,
        LocalizationFormat::AndroidXml => android::serialize_to_xml(map),
    };
    Ok(content)
}

/// Serialize `map` in the format implied by `path`'s own extension and persist
/// it atomically, so a failed run never leaves a half-written target file.
pub async fn serialize_and_save(map: &ResourceMap, path: impl AsRef<Path>) -> Result<(), AppError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();
    if path_str.trim().is_empty() {
        return Err(AppError::File("Cannot save to an empty path".to_string()));
    }

    let format = detect_format(&path_str)?;
    let content = serialize(map, format)?;
    file_utils::write_atomically(path, &content).await?;
    Ok(())
}
