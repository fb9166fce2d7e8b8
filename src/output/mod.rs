//! Terminal output
//!
//! The round state machine and the session talk to a rendering surface through
//! these traits. Color support is decided entirely inside the surface.

pub mod console;
pub mod formatters;
pub mod recording;

use crate::commands::SessionStats;
use crate::core::{Keyboard, Word, WordError};
use crate::game::{Review, RoundState};

pub use console::{ColorMode, ConsoleSurface};
pub use recording::{Event, RecordingSurface};

/// Rendering surface for one round
///
/// Implementations must not fail: a surface that cannot write or color its
/// output degrades instead of ending the round.
pub trait Surface {
    fn round_started(&mut self, max_attempts: usize);

    /// Rejected guess, the player is asked again
    fn invalid_guess(&mut self, input: &str, error: &WordError);

    /// Confirmation answer that was neither yes nor no
    fn invalid_confirmation(&mut self, response: &str);

    /// Player declined to submit `guess`
    fn guess_discarded(&mut self, guess: &Word);

    fn round_aborted(&mut self);

    /// Feedback for the latest scored guess
    fn review(&mut self, review: &Review, keyboard: &Keyboard);

    /// Final report: full guess history, keyboard, and win/loss
    fn display(&mut self, state: &RoundState, keyboard: &Keyboard);
}

/// Rendering surface for the outer menu
pub trait MenuSurface: Surface {
    fn menu(&mut self);

    fn invalid_menu_choice(&mut self, choice: &str);

    fn farewell(&mut self, stats: &SessionStats);
}
