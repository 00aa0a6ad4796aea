//! Random strings from regex-like patterns.
//!
//! A pattern is compiled into one character class per output position, and
//! a string is drawn by picking a member of each class. See [`pattern`] for
//! the syntax.
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strrand::Generator;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let generator = Generator::default();
//!
//! let id = generator.rand_regex(r"[A-F]\d{4}-x", &mut rng).unwrap();
//! assert_eq!(id.len(), 7);
//! assert!(id.ends_with("-x"));
//!
//! // Legacy single-letter patterns: upper, lower, digit.
//! let s = generator.rand_pattern("Ccn", &mut rng).unwrap();
//! assert_eq!(s.len(), 3);
//! ```

mod error;
mod generator;
pub mod pattern;
mod registry;

pub use error::PatternError;
pub use generator::{Generated, Generator, PatternSpec};
pub use pattern::{
    CharClass, CompileOptions, Compiled, DEFAULT_MAX, DEFAULT_REPEAT_LIMIT, Diagnostic, DiagnosticKind,
    TokenSequence, compile, sample,
};
pub use registry::Registry;

/// Draw a string from `pattern` with the default options and the thread-local RNG.
pub fn rand_regex(pattern: &str) -> Result<String, PatternError> {
    Generator::default().rand_regex(pattern, &mut rand::rng())
}
