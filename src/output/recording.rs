//! Headless surface that records what would have been shown

use super::{MenuSurface, Surface};
use crate::commands::SessionStats;
use crate::core::{Keyboard, Word, WordError};
use crate::game::{Review, RoundState};

/// One rendering call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RoundStarted,
    InvalidGuess { input: String, error: WordError },
    InvalidConfirmation(String),
    GuessDiscarded(Word),
    RoundAborted,
    Review { review: Review, keyboard: Keyboard },
    Display { state: RoundState, keyboard: Keyboard },
    Menu,
    InvalidMenuChoice(String),
    Farewell(SessionStats),
}

/// Surface that stores every call as an `Event`
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub events: Vec<Event>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reviews in the order they were shown
    pub fn reviews(&self) -> impl Iterator<Item = &Review> {
        self.events.iter().filter_map(|event| match event {
            Event::Review { review, .. } => Some(review),
            _ => None,
        })
    }

    /// Number of final reports shown
    #[must_use]
    pub fn displays(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Display { .. }))
            .count()
    }

    #[must_use]
    pub fn count(&self, wanted: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|event| wanted(event)).count()
    }
}

impl Surface for RecordingSurface {
    fn round_started(&mut self, _max_attempts: usize) {
        self.events.push(Event::RoundStarted);
    }

    fn invalid_guess(&mut self, input: &str, error: &WordError) {
        self.events.push(Event::InvalidGuess {
            input: input.to_string(),
            error: error.clone(),
        });
    }

    fn invalid_confirmation(&mut self, response: &str) {
        self.events.push(Event::InvalidConfirmation(response.to_string()));
    }

    fn guess_discarded(&mut self, guess: &Word) {
        self.events.push(Event::GuessDiscarded(guess.clone()));
    }

    fn round_aborted(&mut self) {
        self.events.push(Event::RoundAborted);
    }

    fn review(&mut self, review: &Review, keyboard: &Keyboard) {
        self.events.push(Event::Review {
            review: review.clone(),
            keyboard: *keyboard,
        });
    }

    fn display(&mut self, state: &RoundState, keyboard: &Keyboard) {
        self.events.push(Event::Display {
            state: state.clone(),
            keyboard: *keyboard,
        });
    }
}

impl MenuSurface for RecordingSurface {
    fn menu(&mut self) {
        self.events.push(Event::Menu);
    }

    fn invalid_menu_choice(&mut self, choice: &str) {
        self.events.push(Event::InvalidMenuChoice(choice.to_string()));
    }

    fn farewell(&mut self, stats: &SessionStats) {
        self.events.push(Event::Farewell(stats.clone()));
    }
}
