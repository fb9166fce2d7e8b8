//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable values.

mod feedback;
mod keyboard;
mod status;
mod word;

pub use feedback::Feedback;
pub use keyboard::Keyboard;
pub use status::LetterStatus;
pub use word::{WORD_LEN, Word, WordError};
