//! Errors raised while compiling a pattern.

use thiserror::Error;

/// Structural failures found while compiling a pattern.
///
/// Offsets count characters (not bytes) from the start of the pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("regex not terminated: escape at offset {0} is missing characters")]
    UnterminatedEscape(usize),

    #[error("invalid hex escape '\\x{digits}' at offset {offset}")]
    InvalidHexEscape { offset: usize, digits: String },

    #[error("unmatched [] starting at offset {0}")]
    UnmatchedBracket(usize),

    #[error("empty [] at offset {0}")]
    EmptyBracket(usize),

    #[error("'{ch}' inside {{}} not supported (offset {offset})")]
    InvalidQuantifierBody { offset: usize, ch: char },

    #[error("malformed range {{{body}}} at offset {offset}")]
    MalformedRange { offset: usize, body: String },

    #[error("bad range {{{min},{max}}} at offset {offset}")]
    InvertedRange { offset: usize, min: usize, max: usize },

    #[error("repeat count {count} at offset {offset} exceeds the limit of {limit}")]
    RepeatTooLarge { offset: usize, count: usize, limit: usize },

    #[error("quantifier at offset {0} has nothing to repeat")]
    DanglingQuantifier(usize),

    #[error("unknown pattern character '{0}'")]
    UnknownPatternLetter(char),
}
