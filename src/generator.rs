//! Batch entry point tying the compiler, sampler and registry together.

use log::debug;
use rand::Rng;

use crate::error::PatternError;
use crate::pattern::{CompileOptions, compile, sample};
use crate::registry::Registry;

/// One pattern or an ordered batch of patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpec {
    Single(String),
    Batch(Vec<String>),
}

impl From<&str> for PatternSpec {
    fn from(pattern: &str) -> Self {
        Self::Single(pattern.to_string())
    }
}

impl From<String> for PatternSpec {
    fn from(pattern: String) -> Self {
        Self::Single(pattern)
    }
}

impl<S: Into<String>> From<Vec<S>> for PatternSpec {
    fn from(patterns: Vec<S>) -> Self {
        Self::Batch(patterns.into_iter().map(Into::into).collect())
    }
}

/// Output shaped like the [`PatternSpec`] that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Single(String),
    Batch(Vec<String>),
}

impl Generated {
    /// Flatten into a list; a single result becomes a one-element list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s],
            Self::Batch(v) => v,
        }
    }
}

/// Generates random strings from regex-like or legacy patterns.
///
/// Every call recompiles its pattern, so ranged quantifiers pick a new
/// count each time.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: CompileOptions,
    registry: Registry,
}

impl Generator {
    /// A generator whose open-ended quantifiers stop at `max`.
    pub fn new(max: usize) -> Self {
        Self::with_options(CompileOptions {
            default_max: max,
            ..CompileOptions::default()
        })
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            options,
            registry: Registry::default(),
        }
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Draw one string for a single pattern.
    pub fn rand_regex<R: Rng + ?Sized>(&self, pattern: &str, rng: &mut R) -> Result<String, PatternError> {
        let compiled = compile(pattern, &self.options, rng)?;
        Ok(sample(&compiled.tokens, rng))
    }

    /// Draw one string per pattern, preserving order.
    ///
    /// A batch is all-or-nothing: the first pattern that fails to compile
    /// fails the whole call and no results are returned.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        spec: impl Into<PatternSpec>,
        rng: &mut R,
    ) -> Result<Generated, PatternError> {
        match spec.into() {
            PatternSpec::Single(pattern) => self.rand_regex(&pattern, rng).map(Generated::Single),
            PatternSpec::Batch(patterns) => {
                debug!("generating batch of {} patterns", patterns.len());
                patterns
                    .iter()
                    .map(|pattern| self.rand_regex(pattern, rng))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Generated::Batch)
            }
        }
    }

    /// Draw a string from a legacy pattern, where each character is a
    /// registry letter standing for one random member of its class.
    pub fn rand_pattern<R: Rng + ?Sized>(&self, pattern: &str, rng: &mut R) -> Result<String, PatternError> {
        pattern
            .chars()
            .map(|letter| {
                let class = self
                    .registry
                    .get(letter)
                    .ok_or(PatternError::UnknownPatternLetter(letter))?;
                Ok(class[rng.random_range(0..class.len())])
            })
            .collect()
    }
}
