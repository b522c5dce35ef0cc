//! Display configuration
//!
//! The controller's settle times are fixed by its datasheet, but how long
//! a busy-wait takes depends on the peripheral clock the board runs at.
//! These types carry both, so neither the engine nor the drivers hardcode
//! a clock rate.

pub mod timing;

pub use timing::{LcdTiming, TimingConfig};

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use explorer_hal::Micros;

/// Default peripheral clock (16 MHz Fcy, 32 MHz Fosc)
pub const DEFAULT_PERIPHERAL_CLOCK_HZ: u32 = 16_000_000;

/// Default cycles per busy-wait loop iteration
///
/// Spans 12-18 depending on optimization mode; 12 gives the longest waits.
pub const DEFAULT_CYCLES_PER_DELAY_LOOP: u32 = 12;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML parsing failed
    Parse,
    /// Peripheral clock or cycles-per-loop is zero
    InvalidClock,
    /// Settle delays are zero or out of order
    InvalidTiming,
}

/// Board-level display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct DisplayConfig {
    /// Peripheral clock frequency in Hz
    pub peripheral_clock_hz: u32,
    /// CPU cycles spent per busy-wait loop iteration
    pub cycles_per_delay_loop: u32,
    /// Controller settle times
    pub timing: TimingConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            peripheral_clock_hz: DEFAULT_PERIPHERAL_CLOCK_HZ,
            cycles_per_delay_loop: DEFAULT_CYCLES_PER_DELAY_LOOP,
            timing: TimingConfig::default(),
        }
    }
}

impl DisplayConfig {
    /// Parse a configuration from TOML, filling missing keys with defaults
    #[cfg(feature = "config")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: DisplayConfig = toml::from_str(input).map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display config TOML parse error");
            ConfigError::Parse
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.peripheral_clock_hz == 0 || self.cycles_per_delay_loop == 0 {
            return Err(ConfigError::InvalidClock);
        }

        let t = &self.timing;
        if t.fast_instruction_us == 0 || t.slow_instruction_us < t.fast_instruction_us {
            return Err(ConfigError::InvalidTiming);
        }

        Ok(())
    }

    /// Settle delays for the text engine
    pub fn timing(&self) -> LcdTiming {
        self.timing.into()
    }

    /// Number of busy-wait loop iterations covering `delay`
    ///
    /// `((clock / 1000) * us / 1000) / cycles_per_loop`, computed in 64 bits
    /// and saturated, so long delays at high clock rates cannot wrap.
    pub fn delay_loops(&self, delay: Micros) -> u32 {
        if self.cycles_per_delay_loop == 0 {
            return 0;
        }

        let cycles = (self.peripheral_clock_hz as u64 / 1000) * delay.as_micros() as u64 / 1000;
        let loops = cycles / self.cycles_per_delay_loop as u64;
        loops.min(u32::MAX as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DisplayConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.peripheral_clock_hz, 16_000_000);
        assert_eq!(config.cycles_per_delay_loop, 12);
    }

    #[test]
    fn test_delay_loops_at_16mhz() {
        let config = DisplayConfig::default();
        let timing = config.timing();

        assert_eq!(config.delay_loops(timing.fast), 53);
        assert_eq!(config.delay_loops(timing.slow), 2186);
        assert_eq!(config.delay_loops(timing.startup), 80_000);
    }

    #[test]
    fn test_delay_loops_does_not_overflow() {
        let config = DisplayConfig {
            peripheral_clock_hz: u32::MAX,
            cycles_per_delay_loop: 1,
            ..DisplayConfig::default()
        };
        assert_eq!(config.delay_loops(Micros(u32::MAX)), u32::MAX);
    }

    #[test]
    fn test_validate_rejects_zero_clock() {
        let mut config = DisplayConfig::default();
        config.peripheral_clock_hz = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidClock));

        let mut config = DisplayConfig::default();
        config.cycles_per_delay_loop = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidClock));
        assert_eq!(config.delay_loops(Micros(40)), 0);
    }

    #[test]
    fn test_validate_rejects_slow_faster_than_fast() {
        let mut config = DisplayConfig::default();
        config.timing.slow_instruction_us = 10;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTiming));

        let mut config = DisplayConfig::default();
        config.timing.fast_instruction_us = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTiming));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_parse_full_config() {
        let toml = r#"
# Explorer 16/32 at 32 MHz Fosc
peripheral_clock_hz = 16000000
cycles_per_delay_loop = 18

[timing]
fast_instruction_us = 50
slow_instruction_us = 2000
startup_us = 80000
"#;
        let config = DisplayConfig::from_toml(toml).unwrap();
        assert_eq!(config.cycles_per_delay_loop, 18);

        let timing = config.timing();
        assert_eq!(timing.fast, Micros(50));
        assert_eq!(timing.slow, Micros(2000));
        assert_eq!(timing.startup, Micros(80_000));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = DisplayConfig::from_toml("peripheral_clock_hz = 8000000\n").unwrap();
        assert_eq!(config.peripheral_clock_hz, 8_000_000);
        assert_eq!(config.cycles_per_delay_loop, DEFAULT_CYCLES_PER_DELAY_LOOP);
        assert_eq!(config.timing(), LcdTiming::default());

        let config = DisplayConfig::from_toml("").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_parse_errors() {
        assert_eq!(
            DisplayConfig::from_toml("peripheral_clock_hz = \"fast\""),
            Err(ConfigError::Parse)
        );
        assert_eq!(
            DisplayConfig::from_toml("[timing"),
            Err(ConfigError::Parse)
        );
        assert_eq!(
            DisplayConfig::from_toml("peripheral_clock_hz = 0"),
            Err(ConfigError::InvalidClock)
        );
        assert_eq!(
            DisplayConfig::from_toml("[timing]\nslow_instruction_us = 1"),
            Err(ConfigError::InvalidTiming)
        );
    }
}
