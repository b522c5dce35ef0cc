//! HD44780 instruction opcodes used by the text engine

/// Controller instructions
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Fill DDRAM with spaces, address 0
    ClearScreen = 0x01,
    /// Address 0, undo display shift
    ReturnHome = 0x02,
    /// Entry mode: increment, no display shift
    EnterDataMode = 0x06,
    /// Display on, cursor off, blink off
    CursorOff = 0x0C,
    /// Display on, cursor on, blink on
    CursorOn = 0x0F,
    /// Cursor shift left
    MoveCursorLeft = 0x10,
    /// Cursor shift right
    MoveCursorRight = 0x14,
    /// Function set: 8-bit interface, 2 lines, 5x8 font
    SetMode8Bit = 0x38,
    /// Set DDRAM address 0x00
    Row0Home = 0x80,
    /// Set DDRAM address 0x40
    Row1Home = 0xC0,
    /// First vendor wake-up instruction
    StartUp1 = 0x33,
    /// Second vendor wake-up instruction
    StartUp2 = 0x32,
}

impl Command {
    /// Raw opcode byte
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Home command for a physical row (0 or 1)
    pub const fn row_home(row: u8) -> Self {
        if row == 0 {
            Command::Row0Home
        } else {
            Command::Row1Home
        }
    }

    /// Whether the controller needs the slow settle delay after this command
    pub const fn is_slow(self) -> bool {
        matches!(self, Command::ClearScreen | Command::ReturnHome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcodes() {
        assert_eq!(Command::ClearScreen.opcode(), 0x01);
        assert_eq!(Command::MoveCursorRight.opcode(), 0x14);
        assert_eq!(Command::Row1Home.opcode(), 0xC0);
    }

    #[test]
    fn test_row_home() {
        assert_eq!(Command::row_home(0), Command::Row0Home);
        assert_eq!(Command::row_home(1), Command::Row1Home);
    }

    #[test]
    fn test_slow_commands() {
        assert!(Command::ClearScreen.is_slow());
        assert!(Command::ReturnHome.is_slow());
        assert!(!Command::Row0Home.is_slow());
        assert!(!Command::CursorOn.is_slow());
    }
}
