//! Explorer Hardware Abstraction Layer
//!
//! This crate defines the traits the character LCD engine needs from the
//! board. Anything that can move a byte to the display controller and wait
//! for it to settle can drive the text engine, whether that is the parallel
//! master port of the lab board or a host-side simulation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  explorer-core (TextDisplay engine)     │
//! └─────────────────────────────────────────┘
//!                     │  DisplayTransport
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  explorer-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  Parallel bus │       │ Simulated LCD │
//! │   + DelayNs   │       │    (host)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`transport::DisplayTransport`] - Timed command/data writes
//! - [`bus::LcdBus`] - Raw command/data register writes

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod transport;

// Re-export key traits at crate root for convenience
pub use bus::LcdBus;
pub use transport::{DisplayTransport, Micros, TransportError};
