//! Console rendering surface
//!
//! Writes the game to any `Write`, in color when the terminal supports it and
//! as plain marked-up text otherwise.

use super::formatters::{guess_row, keyboard_rows, letter_list, plain_legend};
use super::{MenuSurface, Surface};
use crate::commands::SessionStats;
use crate::core::{Keyboard, Word, WordError};
use crate::game::{MAX_ATTEMPTS, Review, RoundState};
use colored::Colorize;
use std::io::{self, Write};

/// Color preference from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the terminal supports it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse a mode name
    ///
    /// Supported names: "auto", "always", "never".
    /// Defaults to auto if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "always" | "on" => Self::Always,
            "never" | "off" | "plain" => Self::Never,
            _ => Self::Auto,
        }
    }

    /// Decide whether to emit colors, enabling terminal support where needed
    ///
    /// Falls back to plain text whenever colors cannot be turned on.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Never => false,
            Self::Always => {
                colored::control::set_override(true);
                enable_ansi()
            }
            Self::Auto => enable_ansi() && colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }
}

#[cfg(windows)]
fn enable_ansi() -> bool {
    let enabled = colored::control::set_virtual_terminal(true).is_ok();
    if !enabled {
        log::warn!("console does not support ANSI colors, using plain text");
    }
    enabled
}

#[cfg(not(windows))]
fn enable_ansi() -> bool {
    true
}

/// Surface that prints to a terminal or any other writer
pub struct ConsoleSurface<W> {
    out: W,
    color: bool,
}

impl ConsoleSurface<io::Stdout> {
    #[must_use]
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(io::stdout(), mode.enabled())
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let result = writeln!(self.out, "{text}").and_then(|()| self.out.flush());
        if let Err(err) = result {
            log::warn!("{:<32}{err}", "failed to write output");
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bright_cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn keyboard_lines(&self, keyboard: &Keyboard) -> Vec<String> {
        let mut lines: Vec<String> = keyboard_rows(keyboard, self.color)
            .into_iter()
            .map(|row| format!("  {row}"))
            .collect();
        if !self.color {
            lines.push(format!("  {}", plain_legend()));
        }
        lines
    }
}

impl<W: Write> Surface for ConsoleSurface<W> {
    fn round_started(&mut self, max_attempts: usize) {
        let text = format!(
            "\n{}\nGuess the secret 5-letter word in {max_attempts} attempts.",
            self.heading("=== New Round ===")
        );
        self.emit(&text);
    }

    fn invalid_guess(&mut self, input: &str, error: &WordError) {
        let text = format!("Invalid input '{input}': {error}. Please enter exactly five letters.");
        let text = if self.color { text.red().to_string() } else { text };
        self.emit(&text);
    }

    fn invalid_confirmation(&mut self, response: &str) {
        self.emit(&format!("'{response}' is not an answer. Please answer with 'y' or 'n'."));
    }

    fn guess_discarded(&mut self, guess: &Word) {
        self.emit(&format!("Discarded '{guess}'. It did not use an attempt."));
    }

    fn round_aborted(&mut self) {
        self.emit("Round aborted by player.");
    }

    fn review(&mut self, review: &Review, keyboard: &Keyboard) {
        let title = format!("--- Review (attempt {}/{MAX_ATTEMPTS}) ---", review.attempt);
        let mut lines = vec![
            format!("\n{}", self.heading(&title)),
            format!("  {}", guess_row(&review.guess, &review.feedback, self.color)),
        ];

        lines.push(if review.present.is_empty() {
            "No letters from your guess are in the secret word.".to_string()
        } else {
            format!(
                "Letters in the word (any position): {}",
                letter_list(&review.present)
            )
        });

        lines.push(if review.correct.is_empty() {
            "No letters are in the correct position.".to_string()
        } else {
            format!(
                "Letters in the correct position: {}",
                letter_list(&review.correct)
            )
        });

        lines.extend(self.keyboard_lines(keyboard));
        lines.push(format!(
            "{} {} left",
            review.remaining,
            if review.remaining == 1 { "attempt" } else { "attempts" }
        ));
        self.emit(&lines.join("\n"));
    }

    fn display(&mut self, state: &RoundState, keyboard: &Keyboard) {
        let mut lines = vec![
            format!("\n{}", self.heading("=== Game Over ===")),
            format!("Secret word: {}", state.secret().text().to_uppercase()),
            format!("Attempts used: {}/{MAX_ATTEMPTS}", state.attempt_count()),
            "Your guesses:".to_string(),
        ];
        lines.extend(state.history().enumerate().map(|(i, (guess, feedback))| {
            format!(
                "  {}: {}  {}",
                i + 1,
                guess_row(guess, &feedback, self.color),
                feedback.to_emoji()
            )
        }));
        lines.push("Keyboard:".to_string());
        lines.extend(self.keyboard_lines(keyboard));

        let verdict = match (state.has_won(), self.color) {
            (true, true) => "You Won!".green().bold().to_string(),
            (true, false) => "You Won!".to_string(),
            (false, true) => "You Lost.".red().bold().to_string(),
            (false, false) => "You Lost.".to_string(),
        };
        lines.push(format!("\n{verdict}"));
        self.emit(&lines.join("\n"));
    }
}

impl<W: Write> MenuSurface for ConsoleSurface<W> {
    fn menu(&mut self) {
        let text = format!(
            "\n{}\n1) Play a round of Wordle\n2) Leave",
            self.heading("=== Wordle FSM ===")
        );
        self.emit(&text);
    }

    fn invalid_menu_choice(&mut self, choice: &str) {
        self.emit(&format!("Invalid selection '{choice}', please choose 1 or 2."));
    }

    fn farewell(&mut self, stats: &SessionStats) {
        let mut text = String::from("\nThanks for Playing and come back another time!");
        if stats.played > 0 {
            text.push_str(&format!(
                "\nRounds played: {} (won {}, lost {}, aborted {})",
                stats.played, stats.won, stats.lost, stats.aborted
            ));
        }
        self.emit(&text);
    }
}
