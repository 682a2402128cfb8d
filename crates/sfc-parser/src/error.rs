//! Errors raised while splitting a document into blocks.
//!
//! Every error is fatal: the tokenizer stops at the first one and returns no
//! blocks.

use core::fmt;

use strum_macros::Display;
use thiserror::Error;

/// Where in the source a character was read.
///
/// `offset` counts characters (not bytes) from the start of the input;
/// `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// Character offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
}

impl SourcePosition {
    /// Position of the first character of a document.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The position of the character following `c`.
    #[must_use]
    pub const fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                offset: self.offset + 1,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The syntactically valid alternatives at the point an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Expected {
    /// Between blocks.
    #[strum(to_string = "whitespace or '<'")]
    WhitespaceOrTagOpen,
    /// After `<`, while reading a tag name.
    #[strum(to_string = "tag name or '>'")]
    TagNameOrTagClose,
    /// Inside an opening tag, where a new attribute may start.
    #[strum(to_string = "whitespace, attribute name, or '>'")]
    AttributeNameOrTagClose,
    /// Right after `=`.
    #[strum(to_string = "attribute value")]
    AttributeValue,
    /// After a quoted attribute value.
    #[strum(to_string = "whitespace or '>'")]
    WhitespaceOrTagClose,
}

/// A fatal syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that cannot continue the construct being scanned.
    #[error("Unexpected '{found}', expected {expected} at {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// What would have been accepted instead.
        expected: Expected,
        /// Where `found` was read.
        position: SourcePosition,
    },

    /// A quoted attribute value ran into `>` before its closing quote.
    #[error("Unexpected end of attribute, expected '{quote}' terminator at {position}.")]
    UnterminatedAttributeValue {
        /// The quote character that opened the value.
        quote: char,
        /// Where the `>` was read.
        position: SourcePosition,
    },

    /// The input ended inside a block, tag, attribute or comment.
    #[error("Unexpected end of file.")]
    UnexpectedEndOfInput,
}

impl ParseError {
    /// Where the error was raised, if it is tied to a character.
    #[must_use]
    pub const fn position(&self) -> Option<SourcePosition> {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedAttributeValue { position, .. } => Some(*position),
            Self::UnexpectedEndOfInput => None,
        }
    }

    /// Whether this is the end-of-input class of error.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_advances_over_newlines() {
        let position = "ab\nc"
            .chars()
            .fold(SourcePosition::start(), SourcePosition::advance);
        assert_eq!(
            position,
            SourcePosition {
                offset: 4,
                line: 2,
                column: 2,
            }
        );
    }

    #[test]
    fn unexpected_character_message() {
        let error = ParseError::UnexpectedCharacter {
            found: 'x',
            expected: Expected::WhitespaceOrTagOpen,
            position: SourcePosition::start(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected 'x', expected whitespace or '<' at line 1, column 1."
        );
        assert_eq!(error.position(), Some(SourcePosition::start()));
        assert!(!error.is_eof());
    }

    #[test]
    fn end_of_input_has_no_position() {
        let error = ParseError::UnexpectedEndOfInput;
        assert_eq!(error.to_string(), "Unexpected end of file.");
        assert_eq!(error.position(), None);
        assert!(error.is_eof());
    }
}
