//! Machine Memory.
//!
//! This module implements the machine's word-addressed memory. It provides:
//! 1. **Storage:** A fixed number of zero-initialised signed words.
//! 2. **Bounds Checking:** Raw words become [`Address`]es only after a range check,
//!    so reads and writes through an `Address` cannot go out of bounds.
//! 3. **Inspection:** Slices and non-zero cell iteration for dumps and tests.

use crate::common::{Address, Word};

/// Fixed-capacity memory of signed words.
///
/// The capacity is set at construction and never changes; it is shared by the
/// loader (initial population) and by STORE and INPUT during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[Word]>,
}

impl Memory {
    /// Creates a memory of `size` cells, all zero.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size].into_boxed_slice(),
        }
    }

    /// Number of cells.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the memory has no cells.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks a raw word against `[0, len)`.
    ///
    /// Returns `None` for negative words and for words at or past the end.
    #[inline(always)]
    pub fn address(&self, raw: Word) -> Option<Address> {
        let index = usize::try_from(raw).ok()?;
        (index < self.cells.len()).then(|| Address::new_unchecked(index))
    }

    /// Reads the cell at `addr`.
    #[inline(always)]
    pub fn read(&self, addr: Address) -> Word {
        self.cells[addr.index()]
    }

    /// Writes `value` to the cell at `addr`.
    #[inline(always)]
    pub fn write(&mut self, addr: Address, value: Word) {
        self.cells[addr.index()] = value;
    }

    /// Reads the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Word> {
        self.cells.get(index).copied()
    }

    /// All cells in address order.
    pub fn as_slice(&self) -> &[Word] {
        &self.cells
    }

    /// Iterates over `(index, value)` for every non-zero cell.
    pub fn non_zero(&self) -> impl Iterator<Item = (usize, Word)> + '_ {
        self.cells
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, value)| value != 0)
    }

    /// Resets every cell to zero.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}
