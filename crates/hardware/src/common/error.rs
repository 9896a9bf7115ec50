//! Machine and configuration error definitions.
//!
//! This module defines the error handling for the machine. It provides:
//! 1. **Fatal Machine Errors:** Every condition that stops loading or execution.
//! 2. **Error Kinds:** A fieldless classification for matching without inspecting payloads.
//! 3. **Configuration Errors:** Failures while reading or validating a [`Config`](crate::config::Config).
//!
//! Every machine error is fatal. The core never terminates the process itself;
//! errors are returned to the driver, which decides how to report them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::constants::Word;

/// Fatal conditions raised by the loader or the execution engine.
///
/// The `Display` text matches the diagnostics printed by the reference machine
/// (the driver prefixes them with `!!! -- `).
#[derive(Debug, Error)]
pub enum MachineError {
    /// A non-integer token, or end of input, where an integer was expected.
    ///
    /// Raised by the loader and by the INPUT instruction. `found` holds the
    /// offending token, or `None` when the input stream was exhausted.
    #[error("INVALID INPUT. ENTER AN INTEGER.")]
    InvalidInput {
        /// The token that failed to parse, if any.
        found: Option<String>,
    },

    /// More instructions were supplied than memory can hold before the sentinel.
    #[error("MEMORY OVERFLOW. MAXIMUM INSTRUCTIONS REACHED.")]
    MemoryOverflow {
        /// Number of cells in the memory that overflowed.
        capacity: usize,
    },

    /// A decoded operand lies outside the memory.
    #[error("INVALID OPERAND -> {0}")]
    InvalidOperand(Word),

    /// The program counter lies outside the memory at the start of a cycle.
    #[error("PROGRAM COUNTER OUT OF BOUNDS -> {0}")]
    ProgramCounterOutOfBounds(Word),

    /// The decoded opcode is not part of the instruction set.
    ///
    /// Carries the whole instruction word, not just the opcode.
    #[error("INVALID INSTRUCTION -> {0}")]
    InvalidInstruction(Word),

    /// ADD or SUB overflowed the accumulator while checked arithmetic is enabled.
    #[error("ARITHMETIC OVERFLOW -> {instruction} AT {pc}")]
    ArithmeticOverflow {
        /// Address of the faulting instruction.
        pc: Word,
        /// The faulting instruction word.
        instruction: Word,
    },

    /// The console failed while reading or writing.
    #[error("I/O ERROR -> {0}")]
    Io(#[from] io::Error),
}

/// Fieldless classification of [`MachineError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`MachineError::InvalidInput`].
    InvalidInput,
    /// See [`MachineError::MemoryOverflow`].
    MemoryOverflow,
    /// See [`MachineError::InvalidOperand`].
    InvalidOperand,
    /// See [`MachineError::ProgramCounterOutOfBounds`].
    ProgramCounterOutOfBounds,
    /// See [`MachineError::InvalidInstruction`].
    InvalidInstruction,
    /// See [`MachineError::ArithmeticOverflow`].
    ArithmeticOverflow,
    /// See [`MachineError::Io`].
    Io,
}

impl MachineError {
    /// Returns the kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::MemoryOverflow { .. } => ErrorKind::MemoryOverflow,
            Self::InvalidOperand(_) => ErrorKind::InvalidOperand,
            Self::ProgramCounterOutOfBounds(_) => ErrorKind::ProgramCounterOutOfBounds,
            Self::InvalidInstruction(_) => ErrorKind::InvalidInstruction,
            Self::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file '{}': {source}", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A setting has a value the machine cannot run with.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
