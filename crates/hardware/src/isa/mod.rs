//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, decoded instruction structures, the decoder,
//! and a disassembler for diagnostics.
//!
//! An instruction is a single signed word. Its opcode is the quotient by 100
//! and its operand the remainder, both truncated toward zero.

/// Instruction decoding (opcode / operand split).
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode enum and decoded instruction structure.
pub mod instruction;

/// Numeric opcode constants.
pub mod opcodes;

pub use instruction::{Decoded, Opcode};
