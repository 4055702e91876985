/// Serialization style for JSON output.
///
/// `Table` and `Tree` select a projected view when the host can render one
/// (see [`crate::table`] and [`crate::tree`]); as plain text they fall back
/// to the same indented output as `Pretty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// Indented output using [`FormatOptions::indent_width`] spaces per level.
    Pretty,
    /// Indented output with exactly one space per level, regardless of
    /// [`FormatOptions::indent_width`].
    Compact,
    /// Like `Pretty`, with every object's keys rewritten in ascending
    /// lexicographic order at every depth.
    Sorted,
    /// No inter-token whitespace at all.
    Minified,
    /// Tabular projection (rows and inferred columns); text fallback is `Pretty`.
    Table,
    /// Interactive tree projection; text fallback is `Pretty`.
    Tree,
}

/// Number of spaces per indentation level.
///
/// Only these three widths are supported, so the width is a closed enum
/// rather than a bare count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentWidth {
    Two,
    Four,
    Eight,
}

impl IndentWidth {
    pub fn spaces(self) -> usize {
        match self {
            IndentWidth::Two => 2,
            IndentWidth::Four => 4,
            IndentWidth::Eight => 8,
        }
    }
}

/// Configuration for one JSON reformat call.
///
/// Constructed by the caller, passed by value, never mutated by the engines.
///
/// # Example
///
/// ```rust
/// use refmt::{FormatOptions, FormatStyle, IndentWidth};
///
/// let mut options = FormatOptions::default();
/// options.style = FormatStyle::Pretty;
/// options.indent_width = IndentWidth::Four;
/// options.sort_keys = true;
/// ```
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Output style. Default: [`FormatStyle::Pretty`].
    pub style: FormatStyle,

    /// Spaces per indentation level for indented styles.
    /// Default: [`IndentWidth::Two`].
    pub indent_width: IndentWidth,

    /// Recursively sort every object's keys, independent of style.
    /// [`FormatStyle::Sorted`] implies this. Default: false.
    pub sort_keys: bool,

    /// Replace every character with code point >= 0x7F in the serialized
    /// output with its `\uXXXX` escape. Default: false.
    pub escape_non_ascii: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: FormatStyle::Pretty,
            indent_width: IndentWidth::Two,
            sort_keys: false,
            escape_non_ascii: false,
        }
    }
}

impl FormatOptions {
    /// Creates a new `FormatOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`].
    pub fn recommended() -> Self {
        Self::default()
    }
}
