//! Formatting utilities for terminal output
//!
//! Every letter is drawn as a three-column cell. With color the status is the
//! cell's color; without it the status is carried by brackets and case:
//!
//! | status  | plain   |
//! |---------|---------|
//! | none    | ` A `   |
//! | absent  | ` a `   |
//! | present | `(A)`   |
//! | correct | `[A]`   |

use crate::core::{Feedback, Keyboard, LetterStatus, Word};
use colored::Colorize;
use std::collections::BTreeSet;

/// Format a single letter cell
#[must_use]
pub fn letter_cell(letter: u8, status: LetterStatus, color: bool) -> String {
    let upper = char::from(letter.to_ascii_uppercase());

    if !color {
        return match status {
            LetterStatus::None => format!(" {upper} "),
            LetterStatus::Absent => format!(" {} ", char::from(letter.to_ascii_lowercase())),
            LetterStatus::Present => format!("({upper})"),
            LetterStatus::Correct => format!("[{upper}]"),
        };
    }

    let cell = format!(" {upper} ");
    match status {
        LetterStatus::None => cell.bold().to_string(),
        LetterStatus::Absent => cell.bright_black().to_string(),
        LetterStatus::Present => cell.black().on_yellow().bold().to_string(),
        LetterStatus::Correct => cell.black().on_green().bold().to_string(),
    }
}

/// Format a scored guess as a row of cells
#[must_use]
pub fn guess_row(guess: &Word, feedback: &Feedback, color: bool) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| letter_cell(letter, status, color))
        .collect()
}

/// Format the keyboard as QWERTY rows, each row offset like a real keyboard
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard, color: bool) -> Vec<String> {
    Keyboard::ROWS
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            let cells: String = row
                .bytes()
                .map(|letter| letter_cell(letter, keyboard.status(letter), color))
                .collect();
            format!("{}{cells}", " ".repeat(offset * 2))
        })
        .collect()
}

/// Format a letter set as "a, b, c"
#[must_use]
pub fn letter_list(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Legend explaining the plain-text cell markers
#[must_use]
pub fn plain_legend() -> &'static str {
    "[X] correct position   (X) in the word   x not in the word"
}
