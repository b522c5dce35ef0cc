//! Board-agnostic core logic for the Explorer lab board LCD
//!
//! This crate contains everything about the character display that does
//! not depend on how bytes reach the controller:
//!
//! - Text display engine (cursor tracking, wraparound, control characters)
//! - Controller command opcodes
//! - Display timing configuration
//!
//! The engine talks to the hardware only through
//! [`explorer_hal::DisplayTransport`].

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod lcd;

pub use config::{ConfigError, DisplayConfig, LcdTiming};
pub use lcd::{Command, Cursor, DisplayError, TextDisplay, MAX_COLUMN, ROWS};
