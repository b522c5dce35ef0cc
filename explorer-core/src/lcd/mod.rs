//! Character LCD text engine
//!
//! Emulates a small wrapping terminal on a two-row character display:
//! printable bytes fill a row left to right and continue on the other row,
//! `\r`, `\n`, `\b` and `\f` move the cursor or clear the screen.

pub mod command;
pub mod cursor;
pub mod engine;

pub use command::Command;
pub use cursor::{Cursor, MAX_COLUMN, ROWS};
pub use engine::TextDisplay;

use explorer_hal::TransportError;

/// Display errors
///
/// Only raised by [`TextDisplay::initialize`]; printing and cursor motion
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The transport reported that the display did not come up
    Transport(TransportError),
}

impl From<TransportError> for DisplayError {
    fn from(e: TransportError) -> Self {
        DisplayError::Transport(e)
    }
}
