//! Error types for the parsing pipeline.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised by the tokenizer and parsers.
///
/// Unrecognized characters are not represented here: in the default lenient
/// mode the tokenizer drops them silently, and in strict mode they surface
/// as [`ParseError::Syntax`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyInput,

    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("unknown unit '{name}' at offset {offset}")]
    UnknownUnit { name: String, offset: usize },
}

impl ParseError {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            offset,
            message: message.into(),
        }
    }
}
