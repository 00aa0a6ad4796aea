//! Regex-like pattern compiler and random sampler.
//!
//! A pattern is compiled into a sequence of character classes, one per
//! output position, and a string is drawn by picking one member of each.
//! Nothing is ever matched against a pattern.
//!
//! # Pattern syntax
//!
//! | Token         | Meaning                                               |
//! |---------------|-------------------------------------------------------|
//! | `c`           | The literal character `c`                             |
//! | `.`           | Any printable, non-space ASCII character              |
//! | `\d` `\D`     | Digit / letter or punctuation                         |
//! | `\w` `\W`     | Letter, digit or `_` / punctuation other than `_`     |
//! | `\s` `\S`     | Space or tab / any printable, non-space character     |
//! | `\t \n \r \f \a \e` | The matching control character                  |
//! | `\xHH`        | The byte `HH` (two hex digits)                        |
//! | `\X`          | Any other escaped character, literally (with warning) |
//! | `[...]`       | One of the listed characters; `a-z` spans a range     |
//! | `X*`          | `X{0,}`                                               |
//! | `X+`          | `X{1,}`                                               |
//! | `X?`          | `X{0,1}`                                              |
//! | `X{n}`        | `X` exactly `n` times (`{0}` drops it)                |
//! | `X{m,n}`      | `X` between `m` and `n` times; either side optional   |
//!
//! An omitted upper bound is [`CompileOptions::default_max`]. Any bound
//! above [`CompileOptions::repeat_limit`] is an error. There are no
//! groups, alternation, anchors or backreferences; `$ ^ ( ) | ] }` are
//! kept as literals and reported as [`Diagnostic`]s.

pub mod char_class;
pub mod compiler;
pub mod sampler;
pub mod token;

pub use char_class::CharClass;
pub use compiler::{CompileOptions, Compiled, DEFAULT_MAX, DEFAULT_REPEAT_LIMIT, compile};
pub use sampler::sample;
pub use token::{Diagnostic, DiagnosticKind, Token, TokenSequence};
