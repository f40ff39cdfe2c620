/*!
 * Android `strings.xml` codec.
 *
 * Parses `<string>`, `<string-array>` and `<plurals>` resources into the
 * canonical flat map and serializes them back. Repetition is bridged into the
 * flat model with structural key markers:
 *
 * - array item `i` of `name`   -> `name_/_<i>`
 * - plural quantity `q` of `name` -> `name___<q>`
 *
 * The marker tokens and the first-seen group ordering are part of the on-disk
 * compatibility surface and must not change between releases. Element values
 * are carried as raw inner markup: entities and inline tags such as `<b>` are
 * preserved byte-for-byte in both directions.
 */

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::errors::ParseError;
use crate::resource_map::ResourceMap;

/// Marker joining an array name and an item index in flattened form.
pub const ARRAY_ITEM_SEPARATOR: &str = "_/_";

/// Marker joining a plural name and a quantity in flattened form.
pub const PLURAL_SEPARATOR: &str = "___";

/// Android plural quantities in canonical emission order.
pub const PLURAL_QUANTITIES: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";

/// Parse Android strings XML content into the canonical flat map.
///
/// Unknown elements under `<resources>` are skipped; a structurally invalid
/// document is a [`ParseError::AndroidXml`].
pub fn parse_xml_string(content: &str) -> Result<ResourceMap, ParseError> {
    if content.trim().is_empty() {
        return Ok(ResourceMap::new());
    }

    let mut reader = Reader::from_str(content);
    let mut map = ResourceMap::new();

    loop {
        match reader.read_event().map_err(to_parse_error)? {
            Event::Start(element) => match element.name().as_ref() {
                b"resources" => {}
                b"string" => {
                    let name = require_attribute(&element, "name")?;
                    let value = reader.read_text(element.name()).map_err(to_parse_error)?;
                    map.insert(name, value.into_owned());
                }
                b"string-array" => {
                    let name = require_attribute(&element, "name")?;
                    parse_string_array(&mut reader, &name, &mut map)?;
                }
                b"plurals" => {
                    let name = require_attribute(&element, "name")?;
                    parse_plurals(&mut reader, &name, &mut map)?;
                }
                _ => {
                    reader
                        .read_to_end(element.name())
                        .map_err(to_parse_error)?;
                }
            },
            Event::Empty(element) => {
                if element.name().as_ref() == b"string" {
                    let name = require_attribute(&element, "name")?;
                    map.insert(name, String::new());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(map)
}

fn parse_string_array(
    reader: &mut Reader<&[u8]>,
    name: &str,
    map: &mut ResourceMap,
) -> Result<(), ParseError> {
    let mut index = 0usize;
    loop {
        match reader.read_event().map_err(to_parse_error)? {
            Event::Start(element) if element.name().as_ref() == b"item" => {
                let value = reader.read_text(element.name()).map_err(to_parse_error)?;
                map.insert(format!("{name}{ARRAY_ITEM_SEPARATOR}{index}"), value.into_owned());
                index += 1;
            }
            Event::Empty(element) if element.name().as_ref() == b"item" => {
                map.insert(format!("{name}{ARRAY_ITEM_SEPARATOR}{index}"), String::new());
                index += 1;
            }
            Event::End(element) if element.name().as_ref() == b"string-array" => return Ok(()),
            Event::Eof => {
                return Err(ParseError::AndroidXml(format!(
                    "Unterminated string-array '{name}'"
                )));
            }
            _ => {}
        }
    }
}

fn parse_plurals(
    reader: &mut Reader<&[u8]>,
    name: &str,
    map: &mut ResourceMap,
) -> Result<(), ParseError> {
    loop {
        match reader.read_event().map_err(to_parse_error)? {
            Event::Start(element) if element.name().as_ref() == b"item" => {
                let quantity = require_attribute(&element, "quantity")?;
                let value = reader.read_text(element.name()).map_err(to_parse_error)?;
                map.insert(format!("{name}{PLURAL_SEPARATOR}{quantity}"), value.into_owned());
            }
            Event::Empty(element) if element.name().as_ref() == b"item" => {
                let quantity = require_attribute(&element, "quantity")?;
                map.insert(format!("{name}{PLURAL_SEPARATOR}{quantity}"), String::new());
            }
            Event::End(element) if element.name().as_ref() == b"plurals" => return Ok(()),
            Event::Eof => {
                return Err(ParseError::AndroidXml(format!("Unterminated plurals '{name}'")));
            }
            _ => {}
        }
    }
}

fn require_attribute(element: &BytesStart<'_>, attribute: &str) -> Result<String, ParseError> {
    let value = element
        .try_get_attribute(attribute)
        .map_err(|e| ParseError::AndroidXml(e.to_string()))?
        .ok_or_else(|| {
            ParseError::AndroidXml(format!(
                "<{}> element is missing its '{attribute}' attribute",
                String::from_utf8_lossy(element.name().as_ref())
            ))
        })?;
    value
        .unescape_value()
        .map(|v| v.into_owned())
        .map_err(|e| ParseError::AndroidXml(e.to_string()))
}

fn to_parse_error(error: quick_xml::Error) -> ParseError {
    ParseError::AndroidXml(error.to_string())
}

/// One output unit of the serializer, recorded in first-seen order.
enum ResourceGroup {
    PlainString(String),
    StringArray(String),
    Plurals(String),
}

/// Serialize the canonical flat map back to Android strings XML.
///
/// Groups are emitted in first-seen order of their group name; plural
/// quantities in canonical order; array items by contiguous ascending index.
/// An empty map serializes to a self-closed root.
pub fn serialize_to_xml(map: &ResourceMap) -> String {
    if map.is_empty() {
        return format!("{XML_DECLARATION}\n<resources />");
    }

    let mut content = format!("{XML_DECLARATION}\n<resources>\n");
    for group in collect_groups(map) {
        match group {
            ResourceGroup::PlainString(key) => {
                let value = map.get(&key).unwrap_or_default();
                content.push_str(&format!("    <string name=\"{key}\">{value}</string>\n"));
            }
            ResourceGroup::StringArray(name) => {
                content.push_str(&format!("    <string-array name=\"{name}\">\n"));
                let mut index = 0usize;
                while let Some(value) = map.get(&format!("{name}{ARRAY_ITEM_SEPARATOR}{index}")) {
                    content.push_str(&format!("        <item>{value}</item>\n"));
                    index += 1;
                }
                content.push_str("    </string-array>\n");
            }
            ResourceGroup::Plurals(name) => {
                content.push_str(&format!("    <plurals name=\"{name}\">\n"));
                for quantity in PLURAL_QUANTITIES {
                    if let Some(value) = map.get(&format!("{name}{PLURAL_SEPARATOR}{quantity}")) {
                        content.push_str(&format!(
                            "        <item quantity=\"{quantity}\">{value}</item>\n"
                        ));
                    }
                }
                content.push_str("    </plurals>\n");
            }
        }
    }
    content.push_str("</resources>");
    content
}

/// Classify every flat key and record each group once, in first-seen order.
fn collect_groups(map: &ResourceMap) -> Vec<ResourceGroup> {
    let mut groups = Vec::new();
    let mut seen_arrays = std::collections::HashSet::new();
    let mut seen_plurals = std::collections::HashSet::new();

    for key in map.keys() {
        if let Some(name) = array_group_name(key) {
            if seen_arrays.insert(name.to_string()) {
                groups.push(ResourceGroup::StringArray(name.to_string()));
            }
        } else if let Some(name) = plural_group_name(key) {
            if seen_plurals.insert(name.to_string()) {
                groups.push(ResourceGroup::Plurals(name.to_string()));
            }
        } else {
            groups.push(ResourceGroup::PlainString(key.to_string()));
        }
    }
    groups
}

/// `name_/_<idx>` with a numeric index is an array item key.
fn array_group_name(key: &str) -> Option<&str> {
    let (name, index) = key.rsplit_once(ARRAY_ITEM_SEPARATOR)?;
    if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
        Some(name)
    } else {
        None
    }
}

/// `name___<quantity>` with a known quantity is a plural item key.
fn plural_group_name(key: &str) -> Option<&str> {
    let (name, quantity) = key.rsplit_once(PLURAL_SEPARATOR)?;
    if PLURAL_QUANTITIES.contains(&quantity) {
        Some(name)
    } else {
        None
    }
}
