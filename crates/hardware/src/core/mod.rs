//! Core processor implementation.
//!
//! This module contains the machine state and its execution cycle, along
//! with the execution units the cycle dispatches to.

/// CPU state and execution cycle.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, Step};
