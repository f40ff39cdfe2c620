/*!
 * Java-style `.properties` codec.
 *
 * The parser understands the full logical-line syntax: `=`/`:`/whitespace
 * separators, `#`/`!` comments, backslash line continuations and the usual
 * escape sequences, including `\uXXXX`. The serializer emits one `key=value`
 * line per entry in sorted key order, escaping values back into single-line
 * form so that a parse of the output reproduces the input map exactly.
 */

use crate::errors::ParseError;
use crate::resource_map::ResourceMap;

/// Parse properties file content into the canonical map.
pub fn parse_properties_string(content: &str) -> Result<ResourceMap, ParseError> {
    let mut map = ResourceMap::new();

    for logical_line in logical_lines(content) {
        let line = logical_line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (raw_key, raw_value) = split_pair(line);
        let key = unescape(raw_key)?;
        let value = unescape(raw_value)?;
        map.insert(key, value);
    }

    Ok(map)
}

/// Assemble physical lines into logical lines, honoring trailing-backslash
/// continuations. The continued line's leading whitespace is skipped.
fn logical_lines(content: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut pending: Option<String> = None;

    for physical in content.lines() {
        let mut line = match pending.take() {
            Some(mut acc) => {
                acc.push_str(physical.trim_start());
                acc
            }
            None => physical.to_string(),
        };

        // Comment lines are never continued
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') || trimmed.starts_with('!') {
            result.push(line);
            continue;
        }

        if ends_with_odd_backslashes(&line) {
            line.pop();
            pending = Some(line);
        } else {
            result.push(line);
        }
    }

    // A dangling continuation at EOF still counts as a line
    if let Some(rest) = pending {
        result.push(rest);
    }
    result
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Split a logical line into raw (still escaped) key and value parts.
///
/// The key ends at the first unescaped `=`, `:` or whitespace; whitespace
/// around the separator is consumed, and the value keeps its trailing
/// whitespace.
fn split_pair(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let mut escaped = false;
    let mut key_end = bytes.len();
    let mut has_separator = false;

    for (i, &b) in bytes.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'=' | b':' => {
                key_end = i;
                has_separator = true;
                break;
            }
            b' ' | b'\t' | b'\x0c' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    if key_end == bytes.len() {
        return (line, "");
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];

    // Consume whitespace after the key, then at most one `=`/`:` separator,
    // then the whitespace preceding the value.
    if !has_separator {
        rest = rest.trim_start_matches([' ', '\t', '\x0c']);
        if rest.starts_with('=') || rest.starts_with(':') {
            rest = &rest[1..];
        }
    } else {
        rest = &rest[1..];
    }
    let value = rest.trim_start_matches([' ', '\t', '\x0c']);

    (key, value)
}

/// Resolve escape sequences in a raw key or value.
fn unescape(raw: &str) -> Result<String, ParseError> {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('f') => result.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    return Err(ParseError::Properties(format!(
                        "Truncated unicode escape '\\u{hex}'"
                    )));
                }
                let code = u32::from_str_radix(&hex, 16).map_err(|_| {
                    ParseError::Properties(format!("Invalid unicode escape '\\u{hex}'"))
                })?;
                let decoded = char::from_u32(code).ok_or_else(|| {
                    ParseError::Properties(format!("Invalid unicode code point '\\u{hex}'"))
                })?;
                result.push(decoded);
            }
            // Any other escaped character stands for itself
            Some(other) => result.push(other),
            None => {}
        }
    }

    Ok(result)
}

/// Serialize the canonical map to properties content, keys in sorted order.
pub fn serialize_to_properties(map: &ResourceMap) -> String {
    let mut keys: Vec<&str> = map.keys().collect();
    keys.sort_unstable();

    let mut content = String::new();
    for key in keys {
        let value = map.get(key).unwrap_or_default();
        content.push_str(&escape_key(key));
        content.push('=');
        content.push_str(&escape_value(value));
        content.push('\n');
    }
    content
}

fn escape_key(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\x0c' => result.push_str("\\f"),
            ' ' => result.push_str("\\ "),
            '=' => result.push_str("\\="),
            ':' => result.push_str("\\:"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            _ => result.push(c),
        }
    }
    result
}

fn escape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\x0c' => result.push_str("\\f"),
            // A leading space would be swallowed by the parser
            ' ' if i == 0 => result.push_str("\\ "),
            _ => result.push(c),
        }
    }
    result
}
