//! Draws strings from compiled token sequences.

use rand::Rng;
use rand::distr::Distribution;

use super::token::TokenSequence;

/// Draw one character from every token, uniformly over its class, and
/// concatenate them in order.
///
/// Duplicated class members are proportionally more likely.
pub fn sample<R: Rng + ?Sized>(tokens: &TokenSequence, rng: &mut R) -> String {
    tokens
        .iter()
        .map(|token| token.class[rng.random_range(0..token.class.len())])
        .collect()
}

/// Sampling a [`TokenSequence`] with `rand`'s combinators, e.g.
/// `rng.sample_iter(&tokens).take(5)`.
impl Distribution<String> for TokenSequence {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        sample(self, rng)
    }
}
