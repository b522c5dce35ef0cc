//! Simulated HD44780 controller
//!
//! A host-side model of a 16x2 character LCD controller for exercising the
//! text engine without hardware. It decodes the instruction set the engine
//! uses, keeps display data RAM and the address counter the way the real
//! controller does, and checks every settle delay against the datasheet
//! minimums.
//!
//! Unlike the parallel bus, the simulation can see what the display did,
//! so it reports problems through [`DisplayTransport::check_ready`]:
//!
//! - commands before the power-on time elapsed
//! - a settle delay shorter than the instruction needs
//! - no display attached at all
//!
//! # DDRAM layout (2-line mode)
//!
//! ```text
//! line 0: 0x00 ..= 0x27   (columns 0-15 visible)
//! line 1: 0x40 ..= 0x67   (columns 0-15 visible)
//! ```

use heapless::String;

use explorer_hal::{DisplayTransport, Micros, TransportError};

/// Characters stored per DDRAM line
pub const DDRAM_LINE_LEN: usize = 40;

/// Columns visible on a 16x2 module
pub const VISIBLE_COLUMNS: usize = 16;

/// Lines on a 2-line module
pub const LINES: usize = 2;

/// Datasheet timing minimums
pub mod datasheet {
    /// Clear display and return home execution time (µs)
    pub const SLOW_INSTRUCTION_US: u32 = 1520;
    /// All other instructions and data writes (µs)
    pub const FAST_INSTRUCTION_US: u32 = 37;
    /// Wait after Vcc rises before the first instruction (µs)
    pub const POWER_ON_US: u32 = 40_000;
}

/// Start address of DDRAM line 1
const LINE_1_BASE: u8 = 0x40;

/// Last DDRAM address in 1-line mode
const ONE_LINE_END: u8 = 0x4F;

/// Simulated character LCD
pub struct SimulatedLcd {
    ddram: [[u8; DDRAM_LINE_LEN]; LINES],
    /// DDRAM address counter
    address: u8,
    /// Entry mode I/D: address increments after each write
    increment: bool,
    display_on: bool,
    cursor_visible: bool,
    cursor_blink: bool,
    eight_bit: bool,
    two_line: bool,
    /// Whether a display is attached
    connected: bool,
    /// Time before which instructions are lost
    power_on: Micros,
    /// Simulated time since power was applied
    elapsed: Micros,
    /// First problem observed, sticky
    fault: Option<TransportError>,
    commands: u32,
    data_writes: u32,
}

impl Default for SimulatedLcd {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedLcd {
    /// Create a display whose power-on time has already elapsed
    pub fn new() -> Self {
        Self {
            ddram: [[b' '; DDRAM_LINE_LEN]; LINES],
            address: 0,
            increment: true,
            display_on: false,
            cursor_visible: false,
            cursor_blink: false,
            eight_bit: true,
            two_line: false,
            connected: true,
            power_on: Micros::ZERO,
            elapsed: Micros::ZERO,
            fault: None,
            commands: 0,
            data_writes: 0,
        }
    }

    /// Create a display that was just powered
    ///
    /// Instructions sent before the datasheet power-on time has been waited
    /// out are lost and reported as [`TransportError::NotPoweredUp`].
    pub fn cold() -> Self {
        Self {
            power_on: Micros(datasheet::POWER_ON_US),
            ..Self::new()
        }
    }

    /// Create a bus with no display attached
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            ..Self::new()
        }
    }

    /// Visible characters of a line
    pub fn visible_row(&self, line: usize) -> [u8; VISIBLE_COLUMNS] {
        let mut row = [b' '; VISIBLE_COLUMNS];
        if let Some(ddram) = self.ddram.get(line) {
            row.copy_from_slice(&ddram[..VISIBLE_COLUMNS]);
        }
        row
    }

    /// Visible characters of a line as text, non-ASCII shown as `?`
    pub fn row_text(&self, line: usize) -> String<VISIBLE_COLUMNS> {
        let mut text = String::new();
        for &byte in self.visible_row(line).iter() {
            let c = if byte.is_ascii() && !byte.is_ascii_control() {
                byte as char
            } else {
                '?'
            };
            // Capacity matches the row width
            let _ = text.push(c);
        }
        text
    }

    /// Full DDRAM line, including the columns off screen
    pub fn line(&self, line: usize) -> Option<&[u8; DDRAM_LINE_LEN]> {
        self.ddram.get(line)
    }

    /// Current DDRAM address counter
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Address counter as (line, column), if it points into DDRAM
    pub fn cursor_position(&self) -> Option<(u8, u8)> {
        Self::cell(self.address, self.two_line).map(|(line, column)| (line as u8, column as u8))
    }

    /// Whether the display is switched on
    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    /// Whether the underline cursor is shown
    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Whether the cursor cell blinks
    pub fn is_cursor_blinking(&self) -> bool {
        self.cursor_blink
    }

    /// Whether the 8-bit interface is selected
    pub fn is_eight_bit(&self) -> bool {
        self.eight_bit
    }

    /// Whether 2-line mode is selected
    pub fn is_two_line(&self) -> bool {
        self.two_line
    }

    /// Simulated time since power-on
    pub fn elapsed(&self) -> Micros {
        self.elapsed
    }

    /// First problem observed, if any
    pub fn fault(&self) -> Option<TransportError> {
        self.fault
    }

    /// Number of instructions accepted
    pub fn command_count(&self) -> u32 {
        self.commands
    }

    /// Number of data bytes accepted
    pub fn data_count(&self) -> u32 {
        self.data_writes
    }

    fn record_fault(&mut self, fault: TransportError) {
        if self.fault.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Simulated LCD fault: {:?}", fault);
            self.fault = Some(fault);
        }
    }

    /// Common checks before the controller latches a byte
    ///
    /// Returns false if the byte is lost.
    fn accept(&mut self, settle: Micros, required: u32) -> bool {
        if !self.connected {
            return false;
        }

        if self.elapsed < self.power_on {
            self.record_fault(TransportError::NotPoweredUp);
            return false;
        }

        if settle.as_micros() < required {
            self.record_fault(TransportError::TimingViolation);
        }

        true
    }

    fn execute(&mut self, opcode: u8) {
        match opcode {
            0x80..=0xFF => self.address = opcode & 0x7F,
            // CGRAM address: custom glyphs are not modelled
            0x40..=0x7F => {}
            0x20..=0x3F => {
                self.eight_bit = opcode & 0x10 != 0;
                self.two_line = opcode & 0x08 != 0;
            }
            0x10..=0x1F => {
                // S/C set shifts the whole display, which the engine never does
                if opcode & 0x08 == 0 {
                    self.address = if opcode & 0x04 != 0 {
                        Self::next_address(self.address, self.two_line)
                    } else {
                        Self::prev_address(self.address, self.two_line)
                    };
                }
            }
            0x08..=0x0F => {
                self.display_on = opcode & 0x04 != 0;
                self.cursor_visible = opcode & 0x02 != 0;
                self.cursor_blink = opcode & 0x01 != 0;
            }
            0x04..=0x07 => self.increment = opcode & 0x02 != 0,
            0x02 | 0x03 => self.address = 0,
            0x01 => {
                for line in self.ddram.iter_mut() {
                    line.fill(b' ');
                }
                self.address = 0;
                self.increment = true;
            }
            0x00 => {}
        }
    }

    fn write(&mut self, byte: u8) {
        if let Some((line, column)) = Self::cell(self.address, self.two_line) {
            self.ddram[line][column] = byte;
        }
        self.address = if self.increment {
            Self::next_address(self.address, self.two_line)
        } else {
            Self::prev_address(self.address, self.two_line)
        };
    }

    fn required_settle(opcode: u8) -> u32 {
        if matches!(opcode, 0x01..=0x03) {
            datasheet::SLOW_INSTRUCTION_US
        } else {
            datasheet::FAST_INSTRUCTION_US
        }
    }

    /// DDRAM cell for an address
    fn cell(address: u8, two_line: bool) -> Option<(usize, usize)> {
        if two_line {
            let line = usize::from(address >= LINE_1_BASE);
            let column = (address & 0x3F) as usize;
            (column < DDRAM_LINE_LEN).then_some((line, column))
        } else {
            // One 80-character line spread over both storage lines
            (address <= ONE_LINE_END).then(|| {
                let index = address as usize;
                (index / DDRAM_LINE_LEN, index % DDRAM_LINE_LEN)
            })
        }
    }

    fn next_address(address: u8, two_line: bool) -> u8 {
        match (two_line, address) {
            (true, 0x27) => LINE_1_BASE,
            (true, 0x67) => 0x00,
            (false, ONE_LINE_END) => 0x00,
            _ => address.wrapping_add(1) & 0x7F,
        }
    }

    fn prev_address(address: u8, two_line: bool) -> u8 {
        match (two_line, address) {
            (true, 0x00) => 0x67,
            (true, LINE_1_BASE) => 0x27,
            (false, 0x00) => ONE_LINE_END,
            _ => address.wrapping_sub(1) & 0x7F,
        }
    }
}

impl DisplayTransport for SimulatedLcd {
    fn send_command(&mut self, opcode: u8, settle: Micros) {
        if self.accept(settle, Self::required_settle(opcode)) {
            self.execute(opcode);
            self.commands += 1;
        }
        self.elapsed = self.elapsed + settle;
    }

    fn send_data(&mut self, byte: u8, settle: Micros) {
        if self.accept(settle, datasheet::FAST_INSTRUCTION_US) {
            self.write(byte);
            self.data_writes += 1;
        }
        self.elapsed = self.elapsed + settle;
    }

    fn delay(&mut self, duration: Micros) {
        self.elapsed = self.elapsed + duration;
    }

    fn check_ready(&mut self) -> Result<(), TransportError> {
        if !self.connected {
            return Err(TransportError::NotResponding);
        }
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }
}
