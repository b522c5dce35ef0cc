//! Character LCD transports
//!
//! This crate provides concrete implementations of
//! [`explorer_hal::DisplayTransport`]:
//!
//! - Parallel bus transport (memory-mapped LCD + `embedded-hal` delay)
//! - Clock-derived busy-wait delay
//! - Simulated HD44780 controller for host testing

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
