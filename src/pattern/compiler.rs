//! Single-pass compiler from pattern strings to [`TokenSequence`]s.
//!
//! The scan never backtracks. Quantifiers act on the token most recently
//! produced, so `ab{3}` repeats only `b`.

use std::iter::Peekable;
use std::str::Chars;

use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;

use super::char_class::{ANY, CharClass, Shorthand};
use super::token::{
    Diagnostic, DiagnosticKind, Token, TokenSequence, Trigger, is_unsupported_metachar,
};
use crate::error::PatternError;

/// Upper bound used by `*`, `+` and `{n,}` when none is given.
pub const DEFAULT_MAX: usize = 10;

/// Largest repeat count a quantifier may ask for by default.
pub const DEFAULT_REPEAT_LIMIT: usize = 65_536;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Ceiling for quantifiers with an open upper bound.
    pub default_max: usize,
    /// Hard cap on any quantifier's upper bound, explicit or not.
    pub repeat_limit: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            default_max: DEFAULT_MAX,
            repeat_limit: DEFAULT_REPEAT_LIMIT,
        }
    }
}

/// Result of a successful compile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compiled {
    pub tokens: TokenSequence,
    /// Non-fatal anomalies, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile `pattern` into a token sequence.
///
/// `rng` picks the repeat count of ranged quantifiers such as `{2,5}`. The
/// count is fixed in the returned sequence; sampling it again repeats it.
pub fn compile<R: Rng + ?Sized>(
    pattern: &str,
    options: &CompileOptions,
    rng: &mut R,
) -> Result<Compiled, PatternError> {
    let compiled = Compiler {
        chars: pattern.chars().peekable(),
        pos: 0,
        last_close: pattern.chars().positions(|c| c == '}').last(),
        options,
        rng,
        tokens: TokenSequence::new(),
        diagnostics: Vec::new(),
    }
    .compile_pattern()?;
    debug!(
        "compiled {pattern:?} into {} tokens ({} diagnostics)",
        compiled.tokens.len(),
        compiled.diagnostics.len()
    );
    Ok(compiled)
}

struct Compiler<'a, R: ?Sized> {
    chars: Peekable<Chars<'a>>,
    /// Offset of the next unread character.
    pos: usize,
    /// Offset of the final `}` in the pattern, if any.
    last_close: Option<usize>,
    options: &'a CompileOptions,
    rng: &'a mut R,
    tokens: TokenSequence,
    diagnostics: Vec<Diagnostic>,
}

impl<R: Rng + ?Sized> Compiler<'_, R> {
    fn compile_pattern(mut self) -> Result<Compiled, PatternError> {
        while let Some(ch) = self.bump() {
            let offset = self.pos - 1;
            match Trigger::classify(ch) {
                Trigger::Literal(c) => {
                    if is_unsupported_metachar(c) {
                        self.diagnose(DiagnosticKind::UnsupportedMetachar, c, offset);
                    }
                    self.push(CharClass::single(c), offset);
                }
                Trigger::AnyClass => self.push(ANY.clone(), offset),
                Trigger::Escape => self.compile_escape(offset)?,
                Trigger::Bracket => self.compile_bracket(offset)?,
                Trigger::Star => self.repeat(0, None, offset)?,
                Trigger::Plus => self.repeat(1, None, offset)?,
                Trigger::Question => self.repeat(0, Some(1), offset)?,
                Trigger::Brace => self.compile_brace(offset)?,
            }
        }
        Ok(Compiled {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        })
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.pos += 1;
        Some(ch)
    }

    fn push(&mut self, class: CharClass, offset: usize) {
        self.tokens.push(Token::new(class, offset));
    }

    fn diagnose(&mut self, kind: DiagnosticKind, ch: char, offset: usize) {
        let diagnostic = Diagnostic { kind, ch, offset };
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// Handle the character(s) after `\` (already consumed at `offset`).
    fn compile_escape(&mut self, offset: usize) -> Result<(), PatternError> {
        let ch = self.bump().ok_or(PatternError::UnterminatedEscape(offset))?;
        if ch == 'x' {
            let (Some(hi), Some(lo)) = (self.bump(), self.bump()) else {
                return Err(PatternError::UnterminatedEscape(offset));
            };
            let byte = match (hi.to_digit(16), lo.to_digit(16)) {
                (Some(hi), Some(lo)) => (hi * 16 + lo) as u8,
                _ => {
                    return Err(PatternError::InvalidHexEscape {
                        offset,
                        digits: [hi, lo].iter().collect(),
                    });
                }
            };
            self.push(CharClass::single(char::from(byte)), offset);
        } else if ('0'..='7').contains(&ch) {
            self.diagnose(DiagnosticKind::OctalEscape, ch, offset);
            self.push(CharClass::single(ch), offset);
        } else if let Some(shorthand) = Shorthand::lookup(ch) {
            self.push(shorthand.class(), offset);
        } else {
            self.diagnose(DiagnosticKind::UnknownEscape, ch, offset);
            self.push(CharClass::single(ch), offset);
        }
        Ok(())
    }

    /// Collect a `[...]` set (the `[` at `offset` has been consumed).
    fn compile_bracket(&mut self, offset: usize) -> Result<(), PatternError> {
        let mut members: Vec<char> = Vec::new();
        loop {
            let at = self.pos;
            let ch = self.bump().ok_or(PatternError::UnmatchedBracket(offset))?;
            if ch == ']' {
                break;
            }

            // `-` is a range marker only between two characters; `[-a]` and `[a-]` are literal.
            let range_end = match members.last() {
                Some(&start) if ch == '-' => self
                    .chars
                    .peek()
                    .copied()
                    .filter(|&end| end != ']')
                    .map(|end| (start, end)),
                _ => None,
            };
            if let Some((start, end)) = range_end {
                self.bump();
                self.expand_range(&mut members, start, end, at + 1);
                continue;
            }

            if !is_word_char(ch) {
                self.diagnose(DiagnosticKind::BracketLiteral, ch, at);
            }
            members.push(ch);
        }

        if members.is_empty() {
            return Err(PatternError::EmptyBracket(offset));
        }
        self.push(members.into_iter().collect(), offset);
        Ok(())
    }

    /// Append every code point after `start` up to and including `end`.
    fn expand_range(&mut self, members: &mut Vec<char>, start: char, end: char, end_offset: usize) {
        if start > end {
            self.diagnose(DiagnosticKind::ReversedRange, end, end_offset);
            return;
        }
        members.extend((u32::from(start) + 1..=u32::from(end)).filter_map(char::from_u32));
    }

    /// Parse a `{...}` quantifier (the `{` at `offset` has been consumed).
    fn compile_brace(&mut self, offset: usize) -> Result<(), PatternError> {
        if !self.last_close.is_some_and(|close| close >= self.pos) {
            self.diagnose(DiagnosticKind::UnsupportedMetachar, '{', offset);
            self.push(CharClass::single('{'), offset);
            return Ok(());
        }

        let body_start = self.pos;
        let body: String = self.chars.peeking_take_while(|&c| c != '}').collect();
        self.pos += body.chars().count();
        self.bump(); // closing '}'

        if let Some((i, ch)) = body
            .chars()
            .enumerate()
            .find(|&(_, c)| !(c.is_ascii_digit() || c == ','))
        {
            return Err(PatternError::InvalidQuantifierBody {
                offset: body_start + i,
                ch,
            });
        }

        let malformed = || PatternError::MalformedRange {
            offset,
            body: body.clone(),
        };
        let (min, max) = match body.split_once(',') {
            None => {
                let n = parse_count(&body).ok_or_else(malformed)?;
                (n, Some(n))
            }
            Some((_, hi)) if hi.contains(',') => return Err(malformed()),
            Some((lo, hi)) => {
                let min = if lo.is_empty() {
                    0
                } else {
                    parse_count(lo).ok_or_else(malformed)?
                };
                let max = if hi.is_empty() {
                    None
                } else {
                    Some(parse_count(hi).ok_or_else(malformed)?)
                };
                (min, max)
            }
        };
        self.repeat(min, max, offset)
    }

    /// Repeat the last token between `min` and `max` times in total.
    ///
    /// An absent `max` means the configured default ceiling. A count of
    /// zero removes the token. Bounds above the repeat limit are rejected
    /// before the sequence grows.
    fn repeat(&mut self, min: usize, max: Option<usize>, offset: usize) -> Result<(), PatternError> {
        let max = max.unwrap_or(self.options.default_max);
        if min > max {
            return Err(PatternError::InvertedRange { offset, min, max });
        }
        let limit = self.options.repeat_limit;
        if max > limit {
            return Err(PatternError::RepeatTooLarge { offset, count: max, limit });
        }
        let last = self
            .tokens
            .last()
            .cloned()
            .ok_or(PatternError::DanglingQuantifier(offset))?;

        let count = if min == max {
            min
        } else {
            self.rng.random_range(min..=max)
        };
        if count == 0 {
            self.tokens.pop();
        } else {
            self.tokens
                .try_extend(last, count - 1)
                .map_err(|_| PatternError::RepeatTooLarge { offset, count, limit })?;
        }
        Ok(())
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn parse_count(digits: &str) -> Option<usize> {
    digits.parse().ok()
}
