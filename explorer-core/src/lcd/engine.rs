//! Text display engine
//!
//! Owns the cursor and the transport, and turns characters into timed
//! controller instructions. The two rows form a circular buffer: running
//! off the right edge of one row continues at the left edge of the other,
//! and backing off the left edge lands on the last column of the other row.
//!
//! The engine tracks the cursor itself because the controller cannot be
//! read back over this bus.

use core::fmt;

use explorer_hal::DisplayTransport;

use super::command::Command;
use super::cursor::{Cursor, MAX_COLUMN};
use super::DisplayError;
use crate::config::LcdTiming;

/// Vendor wake-up and mode sequence
const STARTUP_SEQUENCE: [Command; 5] = [
    Command::StartUp1,
    Command::StartUp2,
    Command::SetMode8Bit,
    Command::CursorOff,
    Command::EnterDataMode,
];

const BACKSPACE: u8 = 0x08;
const FORM_FEED: u8 = 0x0C;

/// Two-row wrapping text display
pub struct TextDisplay<T> {
    transport: T,
    timing: LcdTiming,
    cursor: Cursor,
}

impl<T: DisplayTransport> TextDisplay<T> {
    /// Create a new engine
    ///
    /// Nothing is sent until [`initialize`](Self::initialize).
    pub fn new(transport: T, timing: LcdTiming) -> Self {
        Self {
            transport,
            timing,
            cursor: Cursor::HOME,
        }
    }

    /// Wait out the controller's power-on time
    ///
    /// Issues the startup delay twice. Only needed when nothing else has
    /// already waited since power was applied.
    pub fn wait_for_power_on(&mut self) {
        self.transport.delay(self.timing.startup);
        self.transport.delay(self.timing.startup);
    }

    /// Initialize the display
    ///
    /// Sends the wake-up and mode sequence, then clears the screen. Leaves
    /// the display blank with a hidden cursor at (0, 0).
    ///
    /// Fails only when the transport can observe the display and reports
    /// that it did not accept the sequence. That points at wiring or timing
    /// configuration, so callers should treat it as fatal.
    pub fn initialize(&mut self) -> Result<(), DisplayError> {
        for command in STARTUP_SEQUENCE {
            self.command(command);
        }

        self.clear_screen();

        if let Err(e) = self.transport.check_ready() {
            #[cfg(feature = "defmt")]
            defmt::warn!("LCD did not come up: {:?}", e);
            return Err(e.into());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("LCD initialized ({:?})", self.timing);

        Ok(())
    }

    /// Clear the screen and home the cursor
    pub fn clear_screen(&mut self) {
        self.command(Command::ClearScreen);
        self.command(Command::ReturnHome);
        self.cursor = Cursor::HOME;
    }

    /// Print one character
    ///
    /// - `\r` returns to column 0 of the current row
    /// - `\n` moves to the other row, keeping the column
    /// - `\b` erases the previous character
    /// - `\f` clears the screen
    ///
    /// Any other byte is written as-is, whether or not the controller's
    /// character ROM has a glyph for it.
    pub fn put_char(&mut self, c: u8) {
        match c {
            b'\r' => self.carriage_return(),
            b'\n' => {
                // Toggles between the rows rather than scrolling
                if self.cursor.row == 0 {
                    self.shift_cursor_down();
                } else {
                    self.shift_cursor_up();
                }
            }
            BACKSPACE => {
                self.shift_cursor_left();
                self.put_char(b' ');
                self.shift_cursor_left();
            }
            FORM_FEED => self.clear_screen(),
            _ => {
                self.transport.send_data(c, self.timing.fast);
                self.advance_column();
            }
        }
    }

    /// Print at most `length` characters of `buf`
    ///
    /// Stops early at a NUL byte, which is not printed. A `length` past the
    /// end of `buf` prints the whole buffer.
    pub fn put_string(&mut self, buf: &[u8], length: usize) {
        for &c in buf.iter().take(length).take_while(|&&c| c != 0) {
            self.put_char(c);
        }
    }

    /// Show or hide the cursor
    pub fn set_cursor_visible(&mut self, enabled: bool) {
        let command = if enabled {
            Command::CursorOn
        } else {
            Command::CursorOff
        };
        self.command(command);
    }

    /// Move the cursor one position left, wrapping to the end of the other row
    ///
    /// The shift operations are navigation helpers beyond the printing
    /// surface; `\b` and `\n` are built on them.
    pub fn shift_cursor_left(&mut self) {
        if self.cursor.column == 0 {
            self.wrap_row();
            for _ in 0..MAX_COLUMN - 1 {
                self.shift_cursor_right();
            }
        } else {
            self.cursor.column -= 1;
            self.command(Command::MoveCursorLeft);
        }
    }

    /// Move the cursor one position right, wrapping to the start of the other row
    pub fn shift_cursor_right(&mut self) {
        self.command(Command::MoveCursorRight);
        self.advance_column();
    }

    /// Move the cursor one row up (a full row of left shifts)
    pub fn shift_cursor_up(&mut self) {
        for _ in 0..MAX_COLUMN {
            self.shift_cursor_left();
        }
    }

    /// Move the cursor one row down (a full row of right shifts)
    pub fn shift_cursor_down(&mut self) {
        for _ in 0..MAX_COLUMN {
            self.shift_cursor_right();
        }
    }

    /// Position the next printable character will occupy
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Settle delays in use
    pub fn timing(&self) -> &LcdTiming {
        &self.timing
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport
    ///
    /// Bytes sent directly bypass cursor tracking.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the engine and return the transport
    pub fn release(self) -> T {
        self.transport
    }

    fn carriage_return(&mut self) {
        self.command(Command::row_home(self.cursor.row));
        self.cursor.column = 0;
    }

    /// Step the column after the controller's address counter moved right
    fn advance_column(&mut self) {
        self.cursor.column += 1;
        if self.cursor.column == MAX_COLUMN {
            self.cursor.column = 0;
            self.wrap_row();
        }
    }

    /// Jump to column 0 of the other row
    fn wrap_row(&mut self) {
        let row = self.cursor.other_row();
        self.command(Command::row_home(row));
        self.cursor.row = row;

        #[cfg(feature = "defmt")]
        defmt::trace!("LCD wrap to row {}", row);
    }

    /// Send an instruction followed by the delay its class needs
    fn command(&mut self, command: Command) {
        let settle = if command.is_slow() {
            self.timing.slow
        } else {
            self.timing.fast
        };
        self.transport.send_command(command.opcode(), settle);
    }
}

impl<T: DisplayTransport> fmt::Write for TextDisplay<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_string(s.as_bytes(), s.len());
        Ok(())
    }
}
