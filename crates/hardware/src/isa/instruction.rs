//! Instruction structures.
//!
//! Provides the decoded instruction representation and the opcode enum
//! used by the execution engine for dispatch.

use std::fmt;

use super::opcodes;
use crate::common::Word;

/// Operation selected by an instruction's opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Terminate successfully.
    Halt,
    /// Add a memory cell to the accumulator.
    Add,
    /// Subtract a memory cell from the accumulator.
    Sub,
    /// Store the accumulator to a memory cell.
    Store,
    /// Load a memory cell into the accumulator.
    Load,
    /// Unconditional jump.
    Jump,
    /// Jump when the accumulator is zero.
    JumpIfZero,
    /// Jump when the accumulator is strictly positive.
    JumpIfPositive,
    /// Read an integer from the console into a memory cell.
    Input,
    /// Write a memory cell to the console.
    Output,
}

impl Opcode {
    /// Every opcode, in numeric order.
    pub const ALL: [Self; 10] = [
        Self::Halt,
        Self::Add,
        Self::Sub,
        Self::Store,
        Self::Load,
        Self::Jump,
        Self::JumpIfZero,
        Self::JumpIfPositive,
        Self::Input,
        Self::Output,
    ];

    /// Numeric opcode value.
    pub const fn value(self) -> Word {
        match self {
            Self::Halt => opcodes::OP_HALT,
            Self::Add => opcodes::OP_ADD,
            Self::Sub => opcodes::OP_SUB,
            Self::Store => opcodes::OP_STORE,
            Self::Load => opcodes::OP_LOAD,
            Self::Jump => opcodes::OP_JUMP,
            Self::JumpIfZero => opcodes::OP_JUMP_ZERO,
            Self::JumpIfPositive => opcodes::OP_JUMP_POSITIVE,
            Self::Input => opcodes::OP_INPUT,
            Self::Output => opcodes::OP_OUTPUT,
        }
    }

    /// Upper-case mnemonic used by the disassembler.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Halt => "HALT",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Store => "STORE",
            Self::Load => "LOAD",
            Self::Jump => "JUMP",
            Self::JumpIfZero => "JZ",
            Self::JumpIfPositive => "JP",
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
        }
    }

    /// Returns `true` if this opcode may overwrite the program counter.
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::Jump | Self::JumpIfZero | Self::JumpIfPositive)
    }
}

impl TryFrom<Word> for Opcode {
    type Error = Word;

    /// Maps a numeric opcode to [`Opcode`], returning the value back if unrecognised.
    fn try_from(value: Word) -> Result<Self, Self::Error> {
        Ok(match value {
            opcodes::OP_HALT => Self::Halt,
            opcodes::OP_ADD => Self::Add,
            opcodes::OP_SUB => Self::Sub,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_JUMP => Self::Jump,
            opcodes::OP_JUMP_ZERO => Self::JumpIfZero,
            opcodes::OP_JUMP_POSITIVE => Self::JumpIfPositive,
            opcodes::OP_INPUT => Self::Input,
            opcodes::OP_OUTPUT => Self::Output,
            other => return Err(other),
        })
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// An instruction word split into its opcode and operand fields.
///
/// Decoding never fails; both fields are raw and unvalidated. The execution
/// engine checks the operand range and the opcode before acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decoded {
    /// The undecoded instruction word.
    pub raw: Word,
    /// `raw / 100`, truncated toward zero.
    pub opcode: Word,
    /// `raw % 100`, carrying the sign of `raw`.
    pub operand: Word,
}

impl Decoded {
    /// Resolves the opcode field to a known [`Opcode`], if any.
    pub fn op(&self) -> Option<Opcode> {
        Opcode::try_from(self.opcode).ok()
    }
}
