//! Feedback summary for the latest guess

use crate::core::{Feedback, LetterStatus, Word};
use std::collections::BTreeSet;

/// Deduplicated, sorted feedback sets for one guess
///
/// A letter that is correct at one position and present at another appears in both sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub guess: Word,
    pub feedback: Feedback,
    pub attempt: usize,
    pub remaining: usize,
    /// Letters in the secret but at a different position
    pub present: BTreeSet<char>,
    /// Letters at their correct position
    pub correct: BTreeSet<char>,
}

impl Review {
    #[must_use]
    pub fn new(guess: &Word, secret: &Word, attempt: usize, remaining: usize) -> Self {
        let feedback = Feedback::score(guess, secret);
        let mut present = BTreeSet::new();
        let mut correct = BTreeSet::new();

        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            match status {
                LetterStatus::Correct => {
                    correct.insert(char::from(letter));
                }
                LetterStatus::Present => {
                    present.insert(char::from(letter));
                }
                LetterStatus::Absent | LetterStatus::None => {}
            }
        }

        Self {
            guess: guess.clone(),
            feedback,
            attempt,
            remaining,
            present,
            correct,
        }
    }
}
