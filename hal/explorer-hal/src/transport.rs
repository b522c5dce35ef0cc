//! Display transport abstraction
//!
//! A transport delivers command and data bytes to the display controller
//! and blocks for the settle time the controller needs before it accepts
//! the next byte. Every call is synchronous: when it returns, the byte has
//! been written and the delay has fully elapsed.

use core::ops::Add;

/// A duration in microseconds
///
/// Settle delays on character LCDs range from tens of microseconds for
/// ordinary writes to a few milliseconds for clear/home, so a `u32` count
/// of microseconds covers every delay with room to spare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Micros(pub u32);

impl Micros {
    /// Zero delay
    pub const ZERO: Self = Self(0);

    /// Create a delay from microseconds
    pub const fn from_micros(us: u32) -> Self {
        Self(us)
    }

    /// Create a delay from milliseconds
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms.saturating_mul(1000))
    }

    /// Delay in microseconds
    pub const fn as_micros(self) -> u32 {
        self.0
    }

    /// Delay in nanoseconds, saturating at `u32::MAX`
    pub const fn as_nanos(self) -> u32 {
        self.0.saturating_mul(1000)
    }
}

impl Add for Micros {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// Errors a feedback-capable transport can report
///
/// Real parallel buses cannot detect any of these; only transports with a
/// way to observe the display (such as a simulation) report them, and only
/// through [`DisplayTransport::check_ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// No display answered on the bus
    NotResponding,
    /// Commands arrived before the power-on delay elapsed
    NotPoweredUp,
    /// A command was followed by a shorter delay than it needs
    TimingViolation,
}

/// Timed byte transport to a character display
pub trait DisplayTransport {
    /// Write an instruction byte, then block for `settle`
    fn send_command(&mut self, opcode: u8, settle: Micros);

    /// Write a data byte, then block for `settle`
    fn send_data(&mut self, byte: u8, settle: Micros);

    /// Block for `duration` without touching the bus
    fn delay(&mut self, duration: Micros);

    /// Report whether the display accepted everything sent so far
    ///
    /// Transports without a feedback path keep the default, which always
    /// succeeds.
    fn check_ready(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for &mut T {
    fn send_command(&mut self, opcode: u8, settle: Micros) {
        (**self).send_command(opcode, settle);
    }

    fn send_data(&mut self, byte: u8, settle: Micros) {
        (**self).send_data(byte, settle);
    }

    fn delay(&mut self, duration: Micros) {
        (**self).delay(duration);
    }

    fn check_ready(&mut self) -> Result<(), TransportError> {
        (**self).check_ready()
    }
}
