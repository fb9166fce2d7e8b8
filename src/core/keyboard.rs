//! Aggregate on-screen keyboard
//!
//! Tracks the best status seen for each letter across all guesses of a round.

use super::{Feedback, LetterStatus, Word};

const ALPHABET_LEN: usize = 26;

/// Per-letter status for `a`-`z`
///
/// Statuses only ever move up the `LetterStatus` ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keyboard([LetterStatus; ALPHABET_LEN]);

impl Keyboard {
    /// QWERTY rows used when rendering the keyboard
    pub const ROWS: [&'static str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

    /// Fresh keyboard with every letter at `None`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scored guess
    ///
    /// Each position's classification is merged into the stored status for its letter.
    pub fn update(&mut self, guess: &Word, secret: &Word) {
        let feedback = Feedback::score(guess, secret);
        for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
            let slot = &mut self.0[index(letter)];
            *slot = slot.upgrade(status);
        }
    }

    /// Status of a lowercase ASCII letter
    ///
    /// # Panics
    /// Panics if `letter` is not in `a..=z`
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        self.0[index(letter)]
    }

    /// Iterate over `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'a'..=b'z').zip(self.0.iter().copied())
    }
}

fn index(letter: u8) -> usize {
    assert!(letter.is_ascii_lowercase(), "not a lowercase letter: {letter}");
    usize::from(letter - b'a')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn keyboard_starts_empty() {
        let keyboard = Keyboard::new();
        assert!(keyboard.iter().all(|(_, s)| s == LetterStatus::None));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn keyboard_records_guess() {
        let secret = word("apple");
        let mut keyboard = Keyboard::new();
        keyboard.update(&word("peppy"), &secret);

        assert_eq!(keyboard.status(b'p'), LetterStatus::Correct);
        assert_eq!(keyboard.status(b'e'), LetterStatus::Present);
        assert_eq!(keyboard.status(b'y'), LetterStatus::Absent);
        assert_eq!(keyboard.status(b'a'), LetterStatus::None);
    }

    #[test]
    fn keyboard_never_downgrades() {
        let secret = word("zebra");
        let mut keyboard = Keyboard::new();

        // E is correct at position 1
        keyboard.update(&word("beach"), &secret);
        assert_eq!(keyboard.status(b'e'), LetterStatus::Correct);

        // E only present here, keyboard keeps Correct
        keyboard.update(&word("eagle"), &secret);
        assert_eq!(keyboard.status(b'e'), LetterStatus::Correct);
    }

    #[test]
    fn keyboard_monotonic_over_sequence() {
        let secret = word("raven");
        let guesses = ["apple", "nerve", "grape", "raven", "tiger", "ocean"];
        let mut keyboard = Keyboard::new();
        let mut previous = keyboard;

        for guess in guesses {
            keyboard.update(&word(guess), &secret);
            for ((_, before), (_, after)) in previous.iter().zip(keyboard.iter()) {
                assert!(after >= before);
            }
            previous = keyboard;
        }
    }

    #[test]
    fn rows_cover_alphabet() {
        let mut letters: Vec<u8> = Keyboard::ROWS.iter().flat_map(|row| row.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }
}
