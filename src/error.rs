use std::io;

use thiserror::Error;

/// The single failure taxonomy of the parser.
///
/// The public contract is only "fully parsed" vs "not parsed": no variant is
/// stable API, they exist to make failures diagnosable. A failed grammar rule
/// always restores the input cursor and discards any partially built node, so
/// an error never leaves partial state observable by the caller.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unexpected end of input while parsing {0}")]
    Eof(&'static str),

    #[error("expected {expected} at offset {offset}")]
    Expected { expected: &'static str, offset: usize },

    #[error("string starting at offset {0} has no closing delimiter")]
    UnclosedString(usize),

    #[error("document root must be an object or array")]
    InvalidRoot,

    #[error("trailing characters after document at offset {0}")]
    TrailingCharacters(usize),

    #[error("exceeded maximum nesting depth of {0}")]
    TooDeep(usize),

    #[error("invalid utf-8 in string literal")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ParseError {
    pub(crate) fn expected(expected: &'static str, offset: usize) -> Self {
        Self::Expected { expected, offset }
    }
}
