//! Compiled token types and compiler diagnostics.

use std::collections::TryReserveError;
use std::fmt;

use super::char_class::CharClass;

/// One output position: a class to draw from, and where in the pattern it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: CharClass,
    /// Character offset of the construct that produced this token.
    pub offset: usize,
}

impl Token {
    pub fn new(class: CharClass, offset: usize) -> Self {
        debug_assert!(!class.is_empty(), "token with empty class at {offset}");
        Self { class, offset }
    }
}

/// Tokens in pattern order. Each token yields exactly one output character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    pub(crate) fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Append `count` copies of `token`, failing instead of aborting when
    /// the memory cannot be reserved.
    pub(crate) fn try_extend(&mut self, token: Token, count: usize) -> Result<(), TryReserveError> {
        self.tokens.try_reserve(count)?;
        self.tokens.extend(std::iter::repeat_n(token, count));
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// What a pattern character asks the compiler to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Literal(char),
    AnyClass,
    Escape,
    Bracket,
    Star,
    Plus,
    Question,
    Brace,
}

impl Trigger {
    pub fn classify(ch: char) -> Self {
        match ch {
            '.' => Self::AnyClass,
            '\\' => Self::Escape,
            '[' => Self::Bracket,
            '*' => Self::Star,
            '+' => Self::Plus,
            '?' => Self::Question,
            '{' => Self::Brace,
            c => Self::Literal(c),
        }
    }
}

/// Regex metacharacters the compiler does not implement; they are kept literally.
pub fn is_unsupported_metachar(ch: char) -> bool {
    matches!(ch, '$' | '^' | '*' | '(' | ')' | '+' | '{' | '}' | ']' | '|' | '?')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A regex metacharacter with no meaning here, kept as a literal.
    UnsupportedMetachar,
    /// `\X` where `X` names no shorthand, kept as literal `X`.
    UnknownEscape,
    /// `\0`..`\7`; octal is not parsed, the digit is kept literally.
    OctalEscape,
    /// A non-word character inside `[]`, kept literally.
    BracketLiteral,
    /// `[z-a]`; the range adds nothing beyond its start character.
    ReversedRange,
}

/// A non-fatal anomaly found while compiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub ch: char,
    pub offset: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = self.ch.escape_debug();
        match self.kind {
            DiagnosticKind::UnsupportedMetachar => {
                write!(f, "'{ch}' not implemented, treating literally")?
            }
            DiagnosticKind::UnknownEscape => write!(f, "'\\{ch}' being treated as literal '{ch}'")?,
            DiagnosticKind::OctalEscape => {
                write!(f, "octal parsing not implemented, treating '{ch}' literally")?
            }
            DiagnosticKind::BracketLiteral => write!(f, "'{ch}' will be treated literally inside []")?,
            DiagnosticKind::ReversedRange => {
                write!(f, "range ending in '{ch}' is reversed and adds nothing")?
            }
        }
        write!(f, " (offset {})", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_special_characters() {
        assert_eq!(Trigger::classify('.'), Trigger::AnyClass);
        assert_eq!(Trigger::classify('\\'), Trigger::Escape);
        assert_eq!(Trigger::classify('['), Trigger::Bracket);
        assert_eq!(Trigger::classify('*'), Trigger::Star);
        assert_eq!(Trigger::classify('+'), Trigger::Plus);
        assert_eq!(Trigger::classify('?'), Trigger::Question);
        assert_eq!(Trigger::classify('{'), Trigger::Brace);
    }

    #[test]
    fn classify_everything_else_as_literal() {
        for ch in ['a', ']', '}', '$', '-', ' ', '\u{e9}'] {
            assert_eq!(Trigger::classify(ch), Trigger::Literal(ch));
        }
    }

    #[test]
    fn unsupported_metachars() {
        for ch in ['$', '^', '(', ')', '}', ']', '|'] {
            assert!(is_unsupported_metachar(ch), "expected unsupported: {ch}");
        }
        assert!(!is_unsupported_metachar('a'));
        assert!(!is_unsupported_metachar('-'));
    }

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic {
            kind: DiagnosticKind::UnknownEscape,
            ch: 'q',
            offset: 3,
        };
        assert_eq!(d.to_string(), "'\\q' being treated as literal 'q' (offset 3)");
    }

    #[test]
    fn sequence_push_pop() {
        let mut seq = TokenSequence::new();
        assert!(seq.is_empty());
        seq.push(Token::new(CharClass::single('a'), 0));
        seq.push(Token::new(CharClass::single('b'), 1));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.last().map(|t| t.offset), Some(1));
        assert_eq!(seq.pop().map(|t| t.class), Some(CharClass::single('b')));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn try_extend_appends_copies() {
        let mut seq = TokenSequence::new();
        seq.try_extend(Token::new(CharClass::single('z'), 4), 3).unwrap();
        assert_eq!(seq.len(), 3);
        assert!(seq.iter().all(|t| t.offset == 4));
    }

    #[test]
    fn try_extend_reports_impossible_reservation() {
        let mut seq = TokenSequence::new();
        assert!(seq.try_extend(Token::new(CharClass::single('z'), 0), usize::MAX).is_err());
        assert!(seq.is_empty());
    }
}
