//! Parallel bus transport
//!
//! Drives an HD44780-class controller wired to an external bus, where one
//! bus address selects the instruction register and the other the data
//! register. The controller's busy flag is never polled: every write is
//! followed by a blocking delay long enough for the slowest case of that
//! instruction class.

use embedded_hal::delay::DelayNs;
use explorer_hal::{DisplayTransport, LcdBus, Micros};

/// Transport over an [`LcdBus`] with an `embedded-hal` delay provider
pub struct ParallelTransport<B, D> {
    bus: B,
    delay: D,
}

impl<B: LcdBus, D: DelayNs> ParallelTransport<B, D> {
    /// Create a new parallel transport
    ///
    /// # Arguments
    /// - `bus`: The configured LCD bus
    /// - `delay`: Blocking delay provider used for settle times
    pub fn new(bus: B, delay: D) -> Self {
        Self { bus, delay }
    }

    /// Consume the transport and return the bus and delay provider
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

impl<B: LcdBus, D: DelayNs> DisplayTransport for ParallelTransport<B, D> {
    fn send_command(&mut self, opcode: u8, settle: Micros) {
        self.bus.write_command(opcode);
        self.delay.delay_us(settle.as_micros());
    }

    fn send_data(&mut self, byte: u8, settle: Micros) {
        self.bus.write_data(byte);
        self.delay.delay_us(settle.as_micros());
    }

    fn delay(&mut self, duration: Micros) {
        self.delay.delay_us(duration.as_micros());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::{LcdTiming, TextDisplay};
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Write {
        Command(u8),
        Data(u8),
    }

    /// Mock bus recording register writes
    struct MockBus {
        writes: Vec<Write, 64>,
    }

    impl MockBus {
        fn new() -> Self {
            Self { writes: Vec::new() }
        }
    }

    impl LcdBus for MockBus {
        fn write_command(&mut self, opcode: u8) {
            self.writes.push(Write::Command(opcode)).unwrap();
        }

        fn write_data(&mut self, byte: u8) {
            self.writes.push(Write::Data(byte)).unwrap();
        }
    }

    /// Mock delay accumulating the requested time
    struct MockDelay {
        total_ns: u64,
        calls: u32,
    }

    impl MockDelay {
        fn new() -> Self {
            Self {
                total_ns: 0,
                calls: 0,
            }
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
            self.calls += 1;
        }
    }

    #[test]
    fn test_command_then_settle() {
        let mut transport = ParallelTransport::new(MockBus::new(), MockDelay::new());
        transport.send_command(0x01, Micros(1640));
        transport.send_data(b'A', Micros(40));

        let (bus, delay) = transport.release();
        assert_eq!(
            bus.writes.as_slice(),
            &[Write::Command(0x01), Write::Data(b'A')]
        );
        assert_eq!(delay.total_ns, 1_680_000);
    }

    #[test]
    fn test_delay_does_not_touch_bus() {
        let mut transport = ParallelTransport::new(MockBus::new(), MockDelay::new());
        transport.delay(Micros::from_millis(60));

        let (bus, delay) = transport.release();
        assert!(bus.writes.is_empty());
        assert_eq!(delay.total_ns, 60_000_000);
    }

    #[test]
    fn test_always_ready() {
        let mut transport = ParallelTransport::new(MockBus::new(), MockDelay::new());
        assert_eq!(transport.check_ready(), Ok(()));
    }

    #[test]
    fn test_drives_text_display() {
        let transport = ParallelTransport::new(MockBus::new(), MockDelay::new());
        let mut lcd = TextDisplay::new(transport, LcdTiming::default());

        lcd.initialize().unwrap();
        lcd.put_string(b"OK", 2);

        let (bus, delay) = lcd.release().release();
        assert_eq!(
            bus.writes.as_slice(),
            &[
                Write::Command(0x33),
                Write::Command(0x32),
                Write::Command(0x38),
                Write::Command(0x0C),
                Write::Command(0x06),
                Write::Command(0x01),
                Write::Command(0x02),
                Write::Data(b'O'),
                Write::Data(b'K'),
            ]
        );
        // 5 fast commands, 2 slow commands, 2 data writes
        assert_eq!(delay.total_ns, (7 * 40 + 2 * 1640) * 1000);
        assert_eq!(delay.calls, 9);
    }

    #[test]
    fn test_bus_by_reference() {
        let mut bus = MockBus::new();
        {
            let mut transport = ParallelTransport::new(&mut bus, MockDelay::new());
            transport.send_data(b'x', Micros(40));
        }
        assert_eq!(bus.writes.as_slice(), &[Write::Data(b'x')]);
    }
}
