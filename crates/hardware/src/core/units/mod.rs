//! Functional Units.
//!
//! Execution units used by the CPU core. The machine has a single one:
//! 1. **ALU:** Accumulator arithmetic for ADD and SUB under the configured overflow policy.

/// Arithmetic Logic Unit.
pub mod alu;
