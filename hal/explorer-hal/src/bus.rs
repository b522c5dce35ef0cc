//! Raw LCD bus abstraction
//!
//! The lab board maps the LCD controller into the external bus address
//! space: one address latches instruction bytes (RS low), the next one
//! latches data bytes (RS high). Chip-select strobes and wait states are
//! configured once by the board code and are not modelled here.

/// Byte-wide write access to an HD44780-class controller
///
/// Writes never fail: the bus has no acknowledge line and the display
/// has no feedback path. Implementations only move the byte, the settle
/// time is the caller's responsibility.
pub trait LcdBus {
    /// Latch a byte into the instruction register
    fn write_command(&mut self, opcode: u8);

    /// Latch a byte into the data register
    fn write_data(&mut self, byte: u8);
}

impl<B: LcdBus + ?Sized> LcdBus for &mut B {
    fn write_command(&mut self, opcode: u8) {
        (**self).write_command(opcode);
    }

    fn write_data(&mut self, byte: u8) {
        (**self).write_data(byte);
    }
}
