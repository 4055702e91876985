use std::sync::OnceLock;

use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use tracing::debug;

use crate::error::XmlError;

const INDENT_UNIT: &str = "  ";

/// Re-derives the line structure and indentation of XML text.
///
/// The input is first validated for well-formedness; malformed XML fails
/// with an [`XmlError`] carrying the parser's diagnostic and produces no
/// output. Indentation itself is then recomputed by a separate textual
/// pass over tag boundaries, not from the parsed document. Empty or
/// whitespace-only input yields empty output without error.
///
/// # Example
///
/// ```rust
/// let output = refmt::xml::reindent("<a><b>1</b></a>").unwrap();
/// assert_eq!(output, "<a>\n  <b>1</b>\n</a>");
/// ```
pub fn reindent(text: &str) -> Result<String, XmlError> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    debug!(bytes = text.len(), "reindenting XML");

    validate(text)?;
    Ok(reindent_text(text))
}

/// Checks well-formedness without producing output.
///
/// Empty or whitespace-only input validates, mirroring [`reindent`].
pub fn validate(text: &str) -> Result<(), XmlError> {
    if text.trim().is_empty() {
        return Ok(());
    }

    let mut reader = Reader::from_str(text);
    let mut open_elements: Vec<String> = Vec::new();
    let mut saw_element = false;

    // Mismatched end tags are reported by the reader itself; the stack
    // catches elements still open at end of input.
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                saw_element = true;
                open_elements.push(String::from_utf8_lossy(start.name().as_ref()).into_owned());
            }
            Ok(Event::End(_)) => {
                open_elements.pop();
            }
            Ok(Event::Empty(_)) => saw_element = true,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(XmlError::new(format!(
                    "parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
    }

    if let Some(name) = open_elements.pop() {
        return Err(XmlError::new(format!("element <{}> is never closed", name)));
    }
    if !saw_element {
        return Err(XmlError::new("no root element found"));
    }
    Ok(())
}

// The textual pass: collapse inter-tag whitespace, break at every >< tag
// boundary, then walk the lines tracking an indent depth.
fn reindent_text(text: &str) -> String {
    let collapsed = tag_gap_re().replace_all(text.trim(), "><");
    let broken = boundary_re().replace_all(&collapsed, "$1\n$2$3");

    let mut pad = 0usize;
    let mut lines: Vec<String> = Vec::new();
    for line in broken.split('\n') {
        let mut step = 0usize;
        if inline_close_re().is_match(line) {
            // Opening and closing tag on one line: depth unchanged.
        } else if closing_re().is_match(line) {
            pad = pad.saturating_sub(1);
        } else if opening_re().is_match(line) {
            step = 1;
        }
        // Text content, self-closing tags, processing instructions and
        // comments all land here with step 0.
        lines.push(format!("{}{}", INDENT_UNIT.repeat(pad), line));
        pad += step;
    }

    lines.join("\n").trim().to_string()
}

fn tag_gap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">\s*<").expect("valid pattern"))
}

fn boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(>)(<)(/*)").expect("valid pattern"))
}

fn inline_close_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r".+</\w[^>]*>$").expect("valid pattern"))
}

fn closing_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^</\w").expect("valid pattern"))
}

fn opening_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Matches an opening tag that is neither self-closed nor immediately
    // closed on the same line; single-character tag names included.
    RE.get_or_init(|| Regex::new(r"^<\w([^>]*[^/])?>").expect("valid pattern"))
}
