//! Program loading and simulation driver.
//!
//! Provides the loader that populates memory from the console and the
//! simulator that ties the machine state to its console and runs it.

/// Program loader (console and slice sources).
pub mod loader;

/// Simulator driver owning the CPU and console.
pub mod simulator;

pub use simulator::{RunReport, Simulator};
