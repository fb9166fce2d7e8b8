//! One round of Wordle
//!
//! `RoundFsm` drives a round through its phases, scoring confirmed guesses and
//! keeping the keyboard up to date, until the round is won, lost, or aborted.

mod fsm;
mod review;
mod state;

pub use fsm::{CONFIRM_PROMPT, GUESS_PROMPT, Phase, QUIT, RoundFsm};
pub use review::Review;
pub use state::{MAX_ATTEMPTS, Outcome, RoundReport, RoundState};
