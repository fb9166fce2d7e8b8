//! Round state and outcomes

use crate::core::{Feedback, Keyboard, Word};

/// Number of scored guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
    Aborted,
}

/// Mutable state of one round
///
/// Only the round state machine mutates it. `attempt_count()` is always the
/// number of recorded guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    secret: Word,
    guesses: Vec<Word>,
    won: bool,
}

impl RoundState {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            won: false,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Scored guesses in the order they were made
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Word> {
        self.guesses.last()
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempt_count())
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.won
    }

    /// Won, or out of attempts
    ///
    /// Informational only; the state machine decides termination from its own transitions.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.won || self.attempt_count() >= MAX_ATTEMPTS
    }

    /// Each guess paired with its feedback against the secret
    pub fn history(&self) -> impl Iterator<Item = (&Word, Feedback)> + '_ {
        self.guesses
            .iter()
            .map(|guess| (guess, Feedback::score(guess, &self.secret)))
    }

    pub(crate) fn record_guess(&mut self, guess: Word) {
        debug_assert!(self.attempt_count() < MAX_ATTEMPTS, "round already exhausted");
        self.guesses.push(guess);
    }

    /// Set the win flag from the latest guess and return it
    pub(crate) fn check_win(&mut self) -> bool {
        self.won = self.last_guess() == Some(&self.secret);
        self.won
    }
}

/// Everything known about a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub outcome: Outcome,
    pub state: RoundState,
    pub keyboard: Keyboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_round_is_empty() {
        let state = RoundState::new(word("zebra"));
        assert_eq!(state.attempt_count(), 0);
        assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS);
        assert!(!state.has_won());
        assert!(!state.is_game_over());
        assert!(state.last_guess().is_none());
    }

    #[test]
    fn attempt_count_tracks_guesses() {
        let mut state = RoundState::new(word("zebra"));
        state.record_guess(word("apple"));
        state.record_guess(word("brave"));

        assert_eq!(state.attempt_count(), state.guesses().len());
        assert_eq!(state.attempt_count(), 2);
        assert_eq!(state.last_guess(), Some(&word("brave")));
    }

    #[test]
    fn check_win_compares_latest_guess() {
        let mut state = RoundState::new(word("zebra"));
        state.record_guess(word("apple"));
        assert!(!state.check_win());

        state.record_guess(word("ZEBRA"));
        assert!(state.check_win());
        assert!(state.is_game_over());
    }

    #[test]
    fn game_over_after_max_attempts() {
        let mut state = RoundState::new(word("zebra"));
        for _ in 0..MAX_ATTEMPTS {
            state.record_guess(word("apple"));
            state.check_win();
        }
        assert!(state.is_game_over());
        assert!(!state.has_won());
        assert_eq!(state.remaining_attempts(), 0);
    }

    #[test]
    fn history_scores_each_guess() {
        let mut state = RoundState::new(word("apple"));
        state.record_guess(word("peppy"));
        state.record_guess(word("apple"));

        let feedback: Vec<_> = state.history().map(|(_, f)| f).collect();
        assert!(!feedback[0].is_perfect());
        assert!(feedback[1].is_perfect());
    }
}
