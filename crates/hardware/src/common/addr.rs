//! Memory Address type.
//!
//! This module defines a strong type for validated memory addresses. It provides:
//! 1. **Type Safety:** An `Address` can only be produced by bounds-checking a raw word
//!    against a concrete memory (see [`Memory::address`](crate::soc::memory::Memory::address)).
//! 2. **Address Manipulation:** Access to the raw index and word value for display and tracing.

use std::fmt;

use super::constants::Word;

/// A memory address known to lie inside the memory it was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(usize);

impl Address {
    /// Wraps an index that the caller has already bounds-checked.
    #[inline(always)]
    pub(crate) const fn new_unchecked(index: usize) -> Self {
        Self(index)
    }

    /// Returns the cell index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the address as a machine word (e.g. for loading into the program counter).
    #[inline(always)]
    pub const fn as_word(self) -> Word {
        self.0 as Word
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
