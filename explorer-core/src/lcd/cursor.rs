//! Cursor position on the two-row grid

/// Number of character columns per row
pub const MAX_COLUMN: u8 = 16;

/// Number of physical rows
pub const ROWS: u8 = 2;

/// Position the next printable character will occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Physical row (0 or 1)
    pub row: u8,
    /// Column (0..MAX_COLUMN)
    pub column: u8,
}

impl Cursor {
    /// Top-left corner
    pub const HOME: Self = Self { row: 0, column: 0 };

    /// Create a cursor at the given position
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// The row the cursor wraps to
    pub const fn other_row(&self) -> u8 {
        (self.row + 1) % ROWS
    }
}
