use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use tracing::debug;

use crate::error::ParseError;
use crate::options::{FormatOptions, FormatStyle};

/// Reformats JSON text according to a [`FormatOptions`] record.
///
/// # Example
///
/// ```rust
/// use refmt::{FormatStyle, JsonReformatter};
///
/// let mut reformatter = JsonReformatter::new();
/// reformatter.options.style = FormatStyle::Minified;
///
/// let output = reformatter.reformat(r#"{ "a": 1 }"#).unwrap();
/// assert_eq!(output, r#"{"a":1}"#);
/// ```
#[derive(Debug, Default)]
pub struct JsonReformatter {
    pub options: FormatOptions,
}

impl JsonReformatter {
    pub fn new() -> Self {
        Self { options: FormatOptions::default() }
    }

    /// Parses `text` and re-serializes it per the configured style.
    ///
    /// Empty or whitespace-only input is a success producing an empty
    /// string, not an error. Invalid JSON fails with a [`ParseError`]
    /// carrying the parser's message and produces no output.
    pub fn reformat(&self, text: &str) -> Result<String, ParseError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        debug!(bytes = text.len(), style = ?self.options.style, "reformatting JSON");

        let mut value: Value =
            serde_json::from_str(text).map_err(|e| ParseError::new(e.to_string()))?;

        if self.options.sort_keys || self.options.style == FormatStyle::Sorted {
            value = sort_keys(value);
        }

        let serialized = match self.options.style {
            FormatStyle::Minified => {
                serde_json::to_string(&value).map_err(|e| ParseError::new(e.to_string()))?
            }
            FormatStyle::Compact => serialize_indented(&value, b" ")?,
            FormatStyle::Pretty
            | FormatStyle::Sorted
            | FormatStyle::Table
            | FormatStyle::Tree => {
                let unit = " ".repeat(self.options.indent_width.spaces());
                serialize_indented(&value, unit.as_bytes())?
            }
        };

        if self.options.escape_non_ascii {
            Ok(escape_non_ascii(&serialized))
        } else {
            Ok(serialized)
        }
    }

    /// Parses `text` without producing output, for validity reporting.
    pub fn parse(&self, text: &str) -> Result<Option<Value>, ParseError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(text)
            .map(Some)
            .map_err(|e| ParseError::new(e.to_string()))
    }
}

/// Checks whether `text` is syntactically valid JSON.
///
/// Empty or whitespace-only input validates, mirroring
/// [`JsonReformatter::reformat`].
pub fn validate(text: &str) -> Result<(), ParseError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    serde_json::from_str::<Value>(text)
        .map(|_| ())
        .map_err(|e| ParseError::new(e.to_string()))
}

/// Rewrites every object so its keys appear in ascending lexicographic
/// order, at every depth. Arrays are mapped element-wise; primitives pass
/// through unchanged.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sort_keys(v))).collect())
        }
        other => other,
    }
}

fn serialize_indented(value: &Value, indent: &[u8]) -> Result<String, ParseError> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent);
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ParseError::new(e.to_string()))?;
    String::from_utf8(out).map_err(|e| ParseError::new(e.to_string()))
}

// Escapes UTF-16 code units, so supplementary-plane characters become
// surrogate pairs. Standard JSON unescaping inverts this exactly.
fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut units = [0u16; 2];
    for ch in text.chars() {
        if (ch as u32) < 0x7F {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
