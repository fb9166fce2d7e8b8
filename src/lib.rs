//! Wordle FSM
//!
//! A console Wordle whose rounds are driven by an explicit finite state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_fsm::core::{Feedback, LetterStatus, Word};
//!
//! let guess = Word::new("peppy").unwrap();
//! let secret = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.status_at(2), LetterStatus::Correct);
//! assert_eq!(feedback.status_at(3), LetterStatus::Present);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Secret word lists
pub mod wordlists;

// Line-based input providers
pub mod input;

// Terminal rendering surface
pub mod output;

// Menu session
pub mod commands;
