//! # refmt
//!
//! Reformatting engines for structured text: JSON, XML and SQL.
//!
//! Each engine is a pure, synchronous function over an in-memory string.
//! Calls are independent and side-effect-free; the same input and options
//! always produce byte-identical output.
//!
//! - **JSON** ([`JsonReformatter`]): parse, optionally sort keys at every
//!   depth, re-serialize as pretty/compact/minified text, optionally escape
//!   non-ASCII characters. Parsed values can also be projected as an
//!   interactive tree ([`tree::project`]) or a flat table
//!   ([`table::project`]).
//! - **XML** ([`xml::reindent`]): validate well-formedness, then recompute
//!   line structure and depth-based indentation from tag boundaries.
//! - **SQL** ([`sql::compact`]): merge short fragments of already
//!   pretty-printed SQL back onto single lines under a length budget.
//!
//! ## Command-Line Tool
//!
//! The crate ships the `refmt` binary:
//!
//! ```sh
//! echo '{"b":2,"a":1}' | refmt json --style sorted
//! refmt xml input.xml -o output.xml
//! refmt sql query.sql
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use refmt::{FormatStyle, JsonReformatter};
//!
//! let mut reformatter = JsonReformatter::new();
//! reformatter.options.style = FormatStyle::Sorted;
//!
//! let output = reformatter.reformat(r#"{"b": 2, "a": 1}"#).unwrap();
//! assert_eq!(output, "{\n  \"a\": 1,\n  \"b\": 2\n}");
//! ```
//!
//! ## Error Handling
//!
//! Invalid JSON and malformed XML are the only failure modes, surfaced as
//! [`ParseError`] and [`XmlError`] results carrying the underlying parser's
//! message. The SQL compactor is text-agnostic and never errors. A failed
//! call produces no output and has no effect on later calls.

pub mod error;
pub mod json;
pub mod options;
pub mod sql;
pub mod table;
pub mod tree;
pub mod xml;

pub use crate::error::{ParseError, XmlError};
pub use crate::json::JsonReformatter;
pub use crate::options::{FormatOptions, FormatStyle, IndentWidth};
pub use crate::table::{Cell, TableProjection};
pub use crate::tree::TreeNode;
