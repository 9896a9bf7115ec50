//! Program Loader.
//!
//! This module populates memory before execution. It performs:
//! 1. **Console loading:** Reads integer tokens into consecutive cells from address 0
//!    until the `-1` sentinel.
//! 2. **Overflow guard:** Once every cell is filled, one more token is examined; any
//!    value other than the sentinel is a memory overflow.
//! 3. **Slice loading:** The same rules applied to an in-memory word slice.
//!
//! Instruction values are not validated here; illegal opcodes surface at execution.

use tracing::debug;

use crate::common::constants::LOAD_SENTINEL;
use crate::common::{MachineError, Word};
use crate::soc::traits::parse_word;
use crate::soc::{Console, Memory, Presentation};

/// Summary of a completed load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of words written, starting at address 0.
    pub words: usize,
    /// `true` if loading ended on the sentinel, `false` if input ended with memory full.
    pub sentinel: bool,
}

/// Stores `value` at the next free cell, or fails once memory is full.
fn store_next(memory: &mut Memory, count: &mut usize, value: Word) -> Result<(), MachineError> {
    let addr = Word::try_from(*count)
        .ok()
        .and_then(|raw| memory.address(raw))
        .ok_or(MachineError::MemoryOverflow {
            capacity: memory.len(),
        })?;
    memory.write(addr, value);
    *count += 1;
    Ok(())
}

/// Loads a program from the console into memory.
///
/// Prints the banner and program prompt (when enabled), then reads tokens until
/// the sentinel. Memory cells past the loaded words are left untouched.
///
/// # Errors
///
/// * [`MachineError::InvalidInput`] - a non-integer token, or end of input
///   before the sentinel while free cells remain.
/// * [`MachineError::MemoryOverflow`] - a non-sentinel value after every cell is filled.
/// * [`MachineError::Io`] - console failure.
pub fn load_program<C: Console + ?Sized>(
    console: &mut C,
    memory: &mut Memory,
    presentation: Presentation,
) -> Result<LoadReport, MachineError> {
    if let Some(banner) = presentation.banner() {
        console.write_str(&banner)?;
    }
    if let Some(prompt) = presentation.load_prompt() {
        console.write_str(&prompt)?;
    }

    let mut count = 0;
    loop {
        let value = if count == memory.len() {
            match console.read_token()? {
                Some(token) => parse_word(token)?,
                None => {
                    debug!(words = count, "memory filled, input ended without sentinel");
                    return Ok(LoadReport {
                        words: count,
                        sentinel: false,
                    });
                }
            }
        } else {
            console.read_word()?
        };

        if value == LOAD_SENTINEL {
            debug!(words = count, "program loaded");
            return Ok(LoadReport {
                words: count,
                sentinel: true,
            });
        }
        store_next(memory, &mut count, value)?;
    }
}

/// Loads a program from a word slice, with the same sentinel and overflow rules
/// as [`load_program`].
///
/// A slice without a sentinel is loaded completely. Words after a sentinel are ignored.
///
/// # Errors
///
/// Returns [`MachineError::MemoryOverflow`] if more words precede the sentinel
/// than memory can hold.
pub fn load_words(memory: &mut Memory, words: &[Word]) -> Result<LoadReport, MachineError> {
    let mut count = 0;
    for &value in words {
        if value == LOAD_SENTINEL {
            return Ok(LoadReport {
                words: count,
                sentinel: true,
            });
        }
        store_next(memory, &mut count, value)?;
    }
    Ok(LoadReport {
        words: count,
        sentinel: false,
    })
}
