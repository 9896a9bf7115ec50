//! Arithmetic Logic Unit (ALU).
//!
//! Implements the accumulator's ADD and SUB under the configured
//! [`OverflowPolicy`]. Wrapping mode is two's complement wraparound;
//! checked mode reports overflow as `None` so the caller can raise a fatal error.

use crate::common::Word;
use crate::config::OverflowPolicy;

/// Arithmetic operations performed by the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `a + b`.
    Add,
    /// `a - b`.
    Sub,
}

/// Accumulator ALU bound to an overflow policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Alu {
    /// Overflow behaviour for every operation.
    pub policy: OverflowPolicy,
}

impl Alu {
    /// Creates an ALU with the given overflow policy.
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    /// Executes `op` on `a` and `b`.
    ///
    /// Returns `None` only when the policy is [`OverflowPolicy::Checked`] and
    /// the result does not fit in a word.
    ///
    /// # Examples
    ///
    /// ```
    /// use abacus_core::config::OverflowPolicy;
    /// use abacus_core::core::units::alu::{Alu, AluOp};
    ///
    /// let wrapping = Alu::new(OverflowPolicy::Wrapping);
    /// assert_eq!(wrapping.execute(AluOp::Add, i32::MAX, 1), Some(i32::MIN));
    ///
    /// let checked = Alu::new(OverflowPolicy::Checked);
    /// assert_eq!(checked.execute(AluOp::Add, i32::MAX, 1), None);
    /// assert_eq!(checked.execute(AluOp::Sub, 5, 7), Some(-2));
    /// ```
    #[inline(always)]
    pub const fn execute(self, op: AluOp, a: Word, b: Word) -> Option<Word> {
        match (self.policy, op) {
            (OverflowPolicy::Wrapping, AluOp::Add) => Some(a.wrapping_add(b)),
            (OverflowPolicy::Wrapping, AluOp::Sub) => Some(a.wrapping_sub(b)),
            (OverflowPolicy::Checked, AluOp::Add) => a.checked_add(b),
            (OverflowPolicy::Checked, AluOp::Sub) => a.checked_sub(b),
        }
    }
}
