//! LCD transport implementations

pub mod busy_wait;
pub mod parallel;
pub mod sim;

pub use busy_wait::BusyWait;
pub use parallel::ParallelTransport;
pub use sim::SimulatedLcd;
