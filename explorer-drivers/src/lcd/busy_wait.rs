//! Clock-derived busy-wait delay
//!
//! Burns CPU cycles in a loop whose iteration count is computed from the
//! peripheral clock and the measured cost of one loop iteration. Crude, but
//! it needs no timer peripheral, which is all the LCD settle times need.

use embedded_hal::delay::DelayNs;
use explorer_core::DisplayConfig;
use explorer_hal::Micros;

/// Spin-loop delay provider
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusyWait {
    config: DisplayConfig,
}

impl BusyWait {
    /// Create a busy-wait delay
    ///
    /// A `cycles_per_loop` of zero is treated as one.
    pub fn new(clock_hz: u32, cycles_per_loop: u32) -> Self {
        Self::from_config(&DisplayConfig {
            peripheral_clock_hz: clock_hz,
            cycles_per_delay_loop: cycles_per_loop,
            ..DisplayConfig::default()
        })
    }

    /// Create a busy-wait delay from the display configuration
    pub fn from_config(config: &DisplayConfig) -> Self {
        let mut config = *config;
        config.cycles_per_delay_loop = config.cycles_per_delay_loop.max(1);
        Self { config }
    }

    /// Loop iterations needed to wait at least `ns` nanoseconds
    pub fn loops_for_ns(&self, ns: u32) -> u32 {
        self.config.delay_loops(Micros(ns.div_ceil(1000)))
    }
}

impl DelayNs for BusyWait {
    fn delay_ns(&mut self, ns: u32) {
        for _ in 0..self.loops_for_ns(ns) {
            core::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loops_match_config() {
        let config = DisplayConfig::default();
        let wait = BusyWait::from_config(&config);
        let timing = config.timing();

        for delay in [timing.fast, timing.slow, timing.startup] {
            assert_eq!(
                wait.loops_for_ns(delay.as_nanos()),
                config.delay_loops(delay)
            );
        }
    }

    #[test]
    fn test_loops_at_16mhz() {
        let wait = BusyWait::new(16_000_000, 12);
        assert_eq!(wait.loops_for_ns(Micros(40).as_nanos()), 53);
        assert_eq!(wait.loops_for_ns(Micros(1640).as_nanos()), 2186);
        assert_eq!(wait.loops_for_ns(0), 0);
    }

    #[test]
    fn test_sub_microsecond_rounds_up() {
        let wait = BusyWait::new(12_000_000, 1);
        assert_eq!(wait.loops_for_ns(1), 12);
        assert_eq!(wait.loops_for_ns(1001), 24);
    }

    #[test]
    fn test_zero_cycles_per_loop() {
        let wait = BusyWait::new(12_000_000, 0);
        assert_eq!(wait.loops_for_ns(1000), 12);
    }

    #[test]
    fn test_delay_returns() {
        let mut wait = BusyWait::new(16_000_000, 12);
        wait.delay_us(40);
        wait.delay_ms(1);
    }
}
