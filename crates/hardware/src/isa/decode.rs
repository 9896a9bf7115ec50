//! Instruction Decoder.
//!
//! Splits an instruction word into opcode and operand using truncating
//! decimal division, so `-150` decodes to opcode `-1`, operand `-50`.

use crate::common::{ENCODING_BASE, Word};
use crate::isa::instruction::Decoded;

/// Decodes an instruction word.
///
/// # Examples
///
/// ```
/// use abacus_core::isa::decode::decode;
///
/// let d = decode(109);
/// assert_eq!((d.opcode, d.operand), (1, 9));
/// ```
#[inline(always)]
pub const fn decode(raw: Word) -> Decoded {
    Decoded {
        raw,
        opcode: raw / ENCODING_BASE,
        operand: raw % ENCODING_BASE,
    }
}

/// Builds an instruction word from an opcode and operand.
///
/// Performs no range validation and wraps on overflow.
#[inline(always)]
pub const fn encode(opcode: Word, operand: Word) -> Word {
    opcode.wrapping_mul(ENCODING_BASE).wrapping_add(operand)
}
