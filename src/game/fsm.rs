//! Round state machine
//!
//! ```text
//! WordEntry ─▶ Confirm ─▶ Score ─▶ CheckWin ─▶ Display
//!     ▲           │                   │
//!     └───────────┘                   ▼
//!     ▲                            Review ─▶ Display (out of attempts)
//!     └───────────────────────────────┘
//! ```
//!
//! Only `WordEntry` and `Confirm` wait for input. `quit` at `WordEntry`, or the
//! end of input at either, aborts the round without a final report.

use super::{MAX_ATTEMPTS, Outcome, Review, RoundReport, RoundState};
use crate::core::{Keyboard, Word};
use crate::input::LineInput;
use crate::output::Surface;
use std::io;

/// Word that abandons the round at guess entry
pub const QUIT: &str = "quit";

pub const GUESS_PROMPT: &str = "Enter a 5-letter guess (or type 'quit' to exit round)";

pub const CONFIRM_PROMPT: &str = "Proceed with this guess? (y/n)";

/// Phases of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    WordEntry,
    Confirm(Word),
    Score(Word),
    CheckWin,
    Review,
    Display,
}

#[derive(Debug)]
enum Transition {
    Next(Phase),
    Finish(Outcome),
}

/// Drives a single round against one secret word
///
/// Each round gets a fresh machine; the state and keyboard are handed back in
/// the `RoundReport` once it finishes.
pub struct RoundFsm<'a, I: ?Sized, S: ?Sized> {
    state: RoundState,
    keyboard: Keyboard,
    input: &'a mut I,
    surface: &'a mut S,
}

impl<'a, I, S> RoundFsm<'a, I, S>
where
    I: LineInput + ?Sized,
    S: Surface + ?Sized,
{
    pub fn new(secret: Word, input: &'a mut I, surface: &'a mut S) -> Self {
        Self {
            state: RoundState::new(secret),
            keyboard: Keyboard::new(),
            input,
            surface,
        }
    }

    /// Play the round to completion
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input fails.
    pub fn run(mut self) -> io::Result<RoundReport> {
        self.surface.round_started(MAX_ATTEMPTS);

        let mut phase = Phase::WordEntry;
        let outcome = loop {
            match self.step(phase)? {
                Transition::Next(next) => {
                    log::debug!("{:<16}{:?}", "phase", next);
                    phase = next;
                }
                Transition::Finish(outcome) => break outcome,
            }
        };

        log::info!(
            "{:<16}{:?} after {} attempt(s)",
            "round finished",
            outcome,
            self.state.attempt_count()
        );

        Ok(RoundReport {
            outcome,
            state: self.state,
            keyboard: self.keyboard,
        })
    }

    fn step(&mut self, phase: Phase) -> io::Result<Transition> {
        let transition = match phase {
            Phase::WordEntry => self.word_entry()?,
            Phase::Confirm(guess) => self.confirm(guess)?,
            Phase::Score(guess) => {
                self.keyboard.update(&guess, self.state.secret());
                self.state.record_guess(guess);
                Transition::Next(Phase::CheckWin)
            }
            Phase::CheckWin => {
                if self.state.check_win() {
                    Transition::Next(Phase::Display)
                } else {
                    Transition::Next(Phase::Review)
                }
            }
            Phase::Review => self.review(),
            Phase::Display => {
                self.surface.display(&self.state, &self.keyboard);
                Transition::Finish(if self.state.has_won() {
                    Outcome::Won
                } else {
                    Outcome::Lost
                })
            }
        };
        Ok(transition)
    }

    fn word_entry(&mut self) -> io::Result<Transition> {
        loop {
            let Some(line) = self.input.read_line(GUESS_PROMPT)? else {
                log::debug!("input closed during word entry");
                return Ok(self.abort());
            };

            if line == QUIT {
                return Ok(self.abort());
            }

            match Word::new(line.as_str()) {
                Ok(guess) => return Ok(Transition::Next(Phase::Confirm(guess))),
                Err(err) => self.surface.invalid_guess(&line, &err),
            }
        }
    }

    fn confirm(&mut self, guess: Word) -> io::Result<Transition> {
        let prompt = format!("You entered '{guess}'. {CONFIRM_PROMPT}");
        loop {
            let Some(response) = self.input.read_line(&prompt)? else {
                log::debug!("input closed during confirmation");
                return Ok(self.abort());
            };

            match response.as_str() {
                "y" | "yes" => return Ok(Transition::Next(Phase::Score(guess))),
                "n" | "no" => {
                    self.surface.guess_discarded(&guess);
                    return Ok(Transition::Next(Phase::WordEntry));
                }
                other => self.surface.invalid_confirmation(other),
            }
        }
    }

    fn review(&mut self) -> Transition {
        if let Some(guess) = self.state.last_guess() {
            let review = Review::new(
                guess,
                self.state.secret(),
                self.state.attempt_count(),
                self.state.remaining_attempts(),
            );
            self.surface.review(&review, &self.keyboard);
        }

        if self.state.attempt_count() >= MAX_ATTEMPTS {
            Transition::Next(Phase::Display)
        } else {
            Transition::Next(Phase::WordEntry)
        }
    }

    fn abort(&mut self) -> Transition {
        self.surface.round_aborted();
        Transition::Finish(Outcome::Aborted)
    }
}
