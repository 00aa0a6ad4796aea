//! Character classes and the static named sets used by the compiler.
//!
//! A class is an ordered list of candidate characters. Duplicates are kept:
//! a character listed twice is twice as likely to be picked.
//!
//! Bytes `0..=255` are represented as the `char` with the same scalar value,
//! so `\xff` and the binary set produce `'\u{ff}'`.

use std::fmt;
use std::ops::{Deref, RangeInclusive};
use std::sync::{Arc, LazyLock};

use itertools::Itertools;
use phf::{Map, phf_map};

/// An ordered, possibly duplicated list of candidate characters.
///
/// Cloning is cheap; the characters are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass(Arc<[char]>);

impl CharClass {
    /// A class holding exactly one character.
    pub fn single(ch: char) -> Self {
        Self(Arc::from([ch]))
    }

    /// Concatenate several classes, keeping order and duplicates.
    pub fn union<'a>(parts: impl IntoIterator<Item = &'a CharClass>) -> Self {
        parts.into_iter().flat_map(|c| c.iter()).collect()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, char>> {
        self.0.iter().copied()
    }

    /// Return a copy without any occurrence of `ch`.
    pub fn without(&self, ch: char) -> Self {
        self.iter().filter(|&c| c != ch).collect()
    }
}

impl Deref for CharClass {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl FromIterator<char> for CharClass {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for CharClass {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().map(|c| c.escape_debug()).join(""))
    }
}

fn byte_range(range: RangeInclusive<u8>) -> impl Iterator<Item = char> {
    range.map(char::from)
}

pub static UPPER: LazyLock<CharClass> = LazyLock::new(|| byte_range(b'A'..=b'Z').collect());
pub static LOWER: LazyLock<CharClass> = LazyLock::new(|| byte_range(b'a'..=b'z').collect());
pub static DIGIT: LazyLock<CharClass> = LazyLock::new(|| byte_range(b'0'..=b'9').collect());

/// Printable ASCII that is neither alphanumeric nor space.
pub static PUNCT: LazyLock<CharClass> = LazyLock::new(|| {
    [33..=47, 58..=64, 91..=96, 123..=126]
        .into_iter()
        .flat_map(byte_range)
        .collect()
});

/// Every printable, non-space ASCII character. Also what `.` expands to.
pub static ANY: LazyLock<CharClass> =
    LazyLock::new(|| CharClass::union([&*UPPER, &*LOWER, &*DIGIT, &*PUNCT]));

/// Alphabet of the classic `crypt(3)` salt.
pub static SALT: LazyLock<CharClass> = LazyLock::new(|| {
    CharClass::union([&*UPPER, &*LOWER, &*DIGIT, &CharClass::from("./")])
});

pub static BINARY: LazyLock<CharClass> = LazyLock::new(|| byte_range(0..=255).collect());

/// Encode `s` one byte per character, the inverse of the byte mapping above.
///
/// Returns `None` if any character is above U+00FF.
pub fn to_latin1(s: &str) -> Option<Vec<u8>> {
    s.chars().map(|c| u8::try_from(c).ok()).collect()
}

/// Classes reachable through a two-character `\X` escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    Digit,
    NonDigit,
    Word,
    NonWord,
    Space,
    NonSpace,
    Tab,
    Newline,
    Return,
    FormFeed,
    Bell,
    Escape,
}

/// Keyed by the character following the backslash.
static SHORTHANDS: Map<char, Shorthand> = phf_map! {
    'd' => Shorthand::Digit,
    'D' => Shorthand::NonDigit,
    'w' => Shorthand::Word,
    'W' => Shorthand::NonWord,
    's' => Shorthand::Space,
    'S' => Shorthand::NonSpace,
    't' => Shorthand::Tab,
    'n' => Shorthand::Newline,
    'r' => Shorthand::Return,
    'f' => Shorthand::FormFeed,
    'a' => Shorthand::Bell,
    'e' => Shorthand::Escape,
};

static NON_DIGIT: LazyLock<CharClass> =
    LazyLock::new(|| CharClass::union([&*UPPER, &*LOWER, &*PUNCT]));
static WORD: LazyLock<CharClass> =
    LazyLock::new(|| CharClass::union([&*UPPER, &*LOWER, &*DIGIT, &CharClass::single('_')]));
static NON_WORD: LazyLock<CharClass> = LazyLock::new(|| PUNCT.without('_'));
static SPACE: LazyLock<CharClass> = LazyLock::new(|| CharClass::from(" \t"));

impl Shorthand {
    /// Look up the shorthand spelled `\` followed by `ch`.
    pub fn lookup(ch: char) -> Option<Self> {
        SHORTHANDS.get(&ch).copied()
    }

    pub fn class(self) -> CharClass {
        match self {
            Self::Digit => DIGIT.clone(),
            Self::NonDigit => NON_DIGIT.clone(),
            Self::Word => WORD.clone(),
            Self::NonWord => NON_WORD.clone(),
            Self::Space => SPACE.clone(),
            Self::NonSpace => ANY.clone(),
            Self::Tab => CharClass::single('\t'),
            Self::Newline => CharClass::single('\n'),
            Self::Return => CharClass::single('\r'),
            Self::FormFeed => CharClass::single('\x0c'),
            Self::Bell => CharClass::single('\x07'),
            Self::Escape => CharClass::single('\x1b'),
        }
    }
}
