//! Secret word lists
//!
//! Provides the embedded word list and the secret-word source used by a session.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Error for a word pool without any usable words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPool;

impl fmt::Display for EmptyPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word list contains no valid 5-letter words")
    }
}

impl std::error::Error for EmptyPool {}

/// Non-empty list of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool(Vec<Word>);

impl WordPool {
    /// # Errors
    ///
    /// Returns `EmptyPool` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, EmptyPool> {
        if words.is_empty() {
            Err(EmptyPool)
        } else {
            Ok(Self(words))
        }
    }

    /// Pool of the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed pool
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pick a word uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        self.0.choose(rng).unwrap_or(&self.0[0])
    }
}

/// Where each round's secret comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Same secret every round
    Fixed(Word),
    /// Uniform random pick from a pool
    Random(WordPool),
}

impl SecretSource {
    /// Secret for the next round
    pub fn next_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        match self {
            Self::Fixed(word) => word.clone(),
            Self::Random(pool) => pool.pick(rng).clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_pool_is_complete() {
        let pool = WordPool::embedded();
        assert_eq!(pool.len(), WORDS_COUNT);
        assert!(!pool.is_empty());
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert_eq!(WordPool::new(Vec::new()), Err(EmptyPool));
    }

    #[test]
    fn pick_stays_in_pool() {
        let pool = WordPool::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(pool.words().contains(pool.pick(&mut rng)));
        }
    }

    #[test]
    fn pick_reaches_every_word() {
        let words = loader::words_from_slice(&["apple", "zebra", "mango"]);
        let pool = WordPool::new(words.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(pool.pick(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn fixed_source_repeats_secret() {
        let secret = Word::new("yacht").unwrap();
        let source = SecretSource::Fixed(secret.clone());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(source.next_secret(&mut rng), secret);
        assert_eq!(source.next_secret(&mut rng), secret);
    }
}
