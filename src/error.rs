use std::fmt::{self, Display};

/// Error produced when input text is not syntactically valid JSON.
///
/// The message is passed through from the underlying parser, so it carries
/// whatever position/expectation detail the parser reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid JSON: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Error produced when input text is not well-formed XML.
///
/// As with [`ParseError`], the message is the validating parser's own
/// diagnostic text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlError {
    pub message: String,
}

impl XmlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid XML: {}", self.message)
    }
}

impl std::error::Error for XmlError {}
