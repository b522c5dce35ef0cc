//! Controller settle times

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use explorer_hal::Micros;

/// Settle times as they appear in the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct TimingConfig {
    /// Ordinary instruction and data write, typically > 40 µs
    pub fast_instruction_us: u32,
    /// Clear display and return home, typically > 1.64 ms
    pub slow_instruction_us: u32,
    /// Power-on time before the first instruction, typically > 60 ms
    pub startup_us: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fast_instruction_us: 40,
            slow_instruction_us: 1640,
            startup_us: 60_000,
        }
    }
}

/// Settle delays handed to the transport by the text engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdTiming {
    /// Delay after ordinary commands and data writes
    pub fast: Micros,
    /// Delay after clear and home commands
    pub slow: Micros,
    /// Power-on delay
    pub startup: Micros,
}

impl Default for LcdTiming {
    fn default() -> Self {
        TimingConfig::default().into()
    }
}

impl From<TimingConfig> for LcdTiming {
    fn from(config: TimingConfig) -> Self {
        Self {
            fast: Micros(config.fast_instruction_us),
            slow: Micros(config.slow_instruction_us),
            startup: Micros(config.startup_us),
        }
    }
}
