//! Opcode values.
//!
//! The opcode is the quotient of an instruction by
//! [`ENCODING_BASE`](crate::common::ENCODING_BASE).

use crate::common::Word;

/// Stop the machine successfully.
pub const OP_HALT: Word = 0;
/// `acc += mem[operand]`.
pub const OP_ADD: Word = 1;
/// `acc -= mem[operand]`.
pub const OP_SUB: Word = 2;
/// `mem[operand] = acc`.
pub const OP_STORE: Word = 3;
/// `acc = mem[operand]`.
pub const OP_LOAD: Word = 4;
/// `pc = operand`.
pub const OP_JUMP: Word = 5;
/// `if acc == 0 { pc = operand }`.
pub const OP_JUMP_ZERO: Word = 6;
/// `if acc > 0 { pc = operand }`.
pub const OP_JUMP_POSITIVE: Word = 7;
/// `mem[operand] = <next integer from the console>`.
pub const OP_INPUT: Word = 8;
/// Write `mem[operand]` to the console.
pub const OP_OUTPUT: Word = 9;
