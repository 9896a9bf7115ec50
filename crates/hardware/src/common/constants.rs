//! Global Machine Constants.
//!
//! This module defines the constants shared across the machine. It includes:
//! 1. **Memory Constants:** Reference memory capacity.
//! 2. **Encoding Constants:** The decimal base that splits an instruction into opcode and operand.
//! 3. **Loader Constants:** The end-of-program sentinel.

/// Native signed machine word used for memory cells, the accumulator, and the program counter.
pub type Word = i32;

/// Number of memory cells in the reference machine.
pub const MEMORY_SIZE: usize = 256;

/// Decimal base separating the opcode from the operand.
///
/// `opcode = instruction / ENCODING_BASE`, `operand = instruction % ENCODING_BASE`.
/// Operands are therefore limited to two decimal digits regardless of memory size.
pub const ENCODING_BASE: Word = 100;

/// Value that terminates program input to the loader. It is never stored.
pub const LOAD_SENTINEL: Word = -1;

/// Address of the first instruction executed after loading.
pub const RESET_PC: Word = 0;
