//! Menu session
//!
//! Repeatedly offers a round from the main menu until the player leaves.

use crate::game::{Outcome, RoundFsm, RoundReport};
use crate::input::LineInput;
use crate::output::MenuSurface;
use crate::wordlists::SecretSource;
use rand::Rng;
use std::io;

pub const MENU_PROMPT: &str = "Select an option (1-2)";

pub const RETURN_PROMPT: &str = "Press Enter to return to the main menu";

/// In-memory tally of the rounds played this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
    pub aborted: usize,
}

impl SessionStats {
    pub fn record(&mut self, outcome: Outcome) {
        self.played += 1;
        match outcome {
            Outcome::Won => self.won += 1,
            Outcome::Lost => self.lost += 1,
            Outcome::Aborted => self.aborted += 1,
        }
    }
}

/// Main menu loop around fresh rounds
pub struct Session<'a, R, I: ?Sized, S: ?Sized> {
    source: SecretSource,
    rng: R,
    input: &'a mut I,
    surface: &'a mut S,
    stats: SessionStats,
}

impl<'a, R, I, S> Session<'a, R, I, S>
where
    R: Rng,
    I: LineInput + ?Sized,
    S: MenuSurface + ?Sized,
{
    pub fn new(source: SecretSource, rng: R, input: &'a mut I, surface: &'a mut S) -> Self {
        Self {
            source,
            rng,
            input,
            surface,
            stats: SessionStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Run the menu until the player leaves or input ends
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(mut self) -> io::Result<SessionStats> {
        loop {
            self.surface.menu();

            match self.input.read_line(MENU_PROMPT)?.as_deref() {
                None | Some("2") => break,
                Some("1") => {
                    let report = self.play_round()?;
                    if report.outcome != Outcome::Aborted
                        && self.input.read_line(RETURN_PROMPT)?.is_none()
                    {
                        break;
                    }
                }
                Some(other) => self.surface.invalid_menu_choice(other),
            }
        }

        self.surface.farewell(&self.stats);
        Ok(self.stats)
    }

    /// Play one round with a new secret
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn play_round(&mut self) -> io::Result<RoundReport> {
        let secret = self.source.next_secret(&mut self.rng);
        log::debug!("{:<16}{}", "new round", self.stats.played + 1);

        let report = RoundFsm::new(secret, &mut *self.input, &mut *self.surface).run()?;
        self.stats.record(report.outcome);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::input::ScriptedInput;
    use crate::output::{Event, RecordingSurface};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(lines: &[&str]) -> (SessionStats, RecordingSurface) {
        let mut input = ScriptedInput::new(lines);
        let mut surface = RecordingSurface::new();
        let source = SecretSource::Fixed(Word::new("apple").unwrap());
        let stats = Session::new(source, StdRng::seed_from_u64(0), &mut input, &mut surface)
            .run()
            .unwrap();
        (stats, surface)
    }

    #[test]
    fn leave_immediately() {
        let (stats, surface) = run(&["2"]);
        assert_eq!(stats, SessionStats::default());
        assert_eq!(surface.events, [Event::Menu, Event::Farewell(stats)]);
    }

    #[test]
    fn end_of_input_leaves() {
        let (stats, surface) = run(&[]);
        assert_eq!(stats.played, 0);
        assert!(matches!(surface.events.last(), Some(Event::Farewell(_))));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (_, surface) = run(&["3", "play", "2"]);
        assert_eq!(
            surface.count(|e| matches!(e, Event::InvalidMenuChoice(_))),
            2
        );
        assert_eq!(surface.count(|e| *e == Event::Menu), 3);
    }

    #[test]
    fn rounds_are_tallied() {
        // A won round waits for Enter, an aborted one goes straight back to the menu
        let (stats, surface) = run(&["1", "apple", "y", "", "1", "quit", "2"]);

        assert_eq!(
            stats,
            SessionStats {
                played: 2,
                won: 1,
                lost: 0,
                aborted: 1,
            }
        );
        assert_eq!(surface.displays(), 1);
    }

    #[test]
    fn each_round_starts_fresh() {
        let (stats, surface) = run(&["1", "peppy", "y", "quit", "1", "apple", "y", "", "2"]);
        assert_eq!(stats.played, 2);

        let Some(Event::Display { state, keyboard }) = surface
            .events
            .iter()
            .find(|e| matches!(e, Event::Display { .. }))
        else {
            panic!("no final report");
        };
        assert_eq!(state.attempt_count(), 1);
        // Y was only guessed in the first round
        assert_eq!(keyboard.status(b'y'), crate::core::LetterStatus::None);
    }

    #[test]
    fn stats_record_outcomes() {
        let mut stats = SessionStats::default();
        stats.record(Outcome::Won);
        stats.record(Outcome::Lost);
        stats.record(Outcome::Lost);
        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.lost, 2);
        assert_eq!(stats.aborted, 0);
    }
}
