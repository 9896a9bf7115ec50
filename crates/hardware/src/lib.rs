//! Decimal accumulator machine library.
//!
//! This crate implements a minimal stored-program accumulator machine with the following:
//! 1. **Core:** Accumulator, program counter, and the fetch-decode-execute cycle.
//! 2. **ISA:** Decimal instruction decoding (`opcode = word / 100`, `operand = word % 100`),
//!    the opcode table, and a disassembler.
//! 3. **Hardware:** Fixed-size word memory and the token console used for I/O.
//! 4. **Simulation:** Program loader, simulator driver, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use abacus_core::config::Config;
//! use abacus_core::soc::StreamConsole;
//! use abacus_core::Simulator;
//!
//! let mut config = Config::default();
//! config.console.prompts = false;
//! config.console.color = false;
//!
//! // LOAD 05, ADD 06, STORE 07, OUTPUT 07, HALT, data 2, data 3
//! let input = Cursor::new("405 106 307 907 0 2 3 -1");
//! let mut sim = Simulator::new(&config, StreamConsole::new(input, Vec::new()));
//! let report = sim.boot().unwrap();
//! assert_eq!(report.acc, 5);
//!
//! let (_, output) = sim.into_console().into_parts();
//! assert_eq!(String::from_utf8(output).unwrap(), "\nOUTPUT -> 5\n\n");
//! ```

/// Common types and constants (word type, addresses, errors).
pub mod common;
/// Machine configuration (defaults and JSON deserialization).
pub mod config;
/// CPU core (machine state, execution cycle, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and simulator driver.
pub mod sim;
/// Machine hardware (memory, console).
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Fatal machine error; every loader and execution failure is one of these.
pub use crate::common::MachineError;
/// Root configuration type; use `Config::default()` or parse JSON.
pub use crate::config::Config;
/// Machine state; steps one instruction at a time.
pub use crate::core::Cpu;
/// Top-level driver owning a `Cpu` and its console.
pub use crate::sim::Simulator;
