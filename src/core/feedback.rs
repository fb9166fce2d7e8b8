//! Per-guess feedback calculation
//!
//! Each guess position is classified on its own:
//! - Correct: same letter at the same position in the secret
//! - Present: letter occurs anywhere else in the secret
//! - Absent: letter does not occur in the secret
//!
//! Presence is a plain membership test against the secret's letters. It is not
//! capped by how many times the letter occurs, so a guess with two `p`s against
//! a secret with one `p` can mark both of them.

use super::{LetterStatus, WORD_LEN, Word};

/// Classified feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LEN]);

impl Feedback {
    /// Classify every position of `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_fsm::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("peppy").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[
    ///         LetterStatus::Present,
    ///         LetterStatus::Present,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Present,
    ///         LetterStatus::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LEN];

        for (i, (&letter, &target)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            result[i] = if letter == target {
                LetterStatus::Correct
            } else if secret.has_letter(letter) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            };
        }

        Self(result)
    }

    /// Status of every position, in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LEN] {
        &self.0
    }

    /// Status at a single position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = score("crwth", "apple");
        assert_eq!(feedback.statuses(), &[Absent; 5]);
        assert_eq!(feedback.count(Absent), 5);
    }

    #[test]
    fn feedback_all_correct() {
        let feedback = score("apple", "apple");
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn feedback_duplicate_letters_are_uncapped() {
        // APPLE has two P's, PEPPY has three: every P is marked
        let feedback = score("peppy", "apple");
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn feedback_single_occurrence_marks_every_copy() {
        // ZEBRA has one E, EERIE has three
        let feedback = score("eerie", "zebra");
        assert_eq!(
            feedback.statuses(),
            &[Present, Correct, Present, Absent, Present]
        );
        assert_eq!(feedback.count(Present), 3);
    }

    #[test]
    fn feedback_is_deterministic() {
        let first = score("grape", "raven");
        for _ in 0..10 {
            assert_eq!(score("grape", "raven"), first);
        }
    }

    #[test]
    fn feedback_to_emoji() {
        assert_eq!(score("peppy", "apple").to_emoji(), "🟨🟨🟩🟨⬜");
        assert_eq!(score("apple", "apple").to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
