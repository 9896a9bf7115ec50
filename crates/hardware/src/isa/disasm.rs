//! Instruction Disassembler.
//!
//! Converts an instruction word into a human-readable mnemonic string for
//! debug tracing, memory dumps, and test diagnostics. There is no assembler;
//! this is output-only.
//!
//! # Usage
//!
//! ```
//! use abacus_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(109), "ADD 09");
//! assert_eq!(disassemble(0), "HALT");
//! assert_eq!(disassemble(9900), "??? 9900");
//! ```

use crate::common::Word;
use crate::isa::decode::decode;
use crate::isa::instruction::Opcode;

/// Disassembles an instruction word.
///
/// Returns `"??? <word>"` for unknown opcodes and `"<MNEMONIC> ?<operand>"`
/// when the operand is negative (it can never address memory).
pub fn disassemble(raw: Word) -> String {
    let d = decode(raw);
    match d.op() {
        None => format!("??? {raw}"),
        Some(op) if d.operand < 0 => format!("{} ?{}", op.mnemonic(), d.operand),
        Some(Opcode::Halt) if d.operand == 0 => "HALT".to_string(),
        Some(op) => format!("{} {:02}", op.mnemonic(), d.operand),
    }
}
