//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Accumulator, program counter, and memory.
//! 2. **Execution Units:** The ALU and its overflow policy.
//! 3. **Console Rendering:** Presentation of the INPUT prompt and OUTPUT lines.
//! 4. **Observability:** Instruction tracing, statistics, and state dumps.

/// Fetch, decode, and execute cycle.
pub mod execution;

use std::fmt::Write as _;

use crate::common::Word;
use crate::common::constants::RESET_PC;
use crate::config::Config;
use crate::core::units::alu::Alu;
use crate::isa::disasm::disassemble;
use crate::soc::{Memory, Presentation};
use crate::stats::SimStats;

/// Outcome of a single successful cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The instruction completed; the machine is ready for the next cycle.
    Continue,
    /// HALT executed; the program finished successfully.
    Halted,
}

/// Complete machine state.
///
/// There is no hidden or global state: two `Cpu`s never interact, and a `Cpu`
/// can be inspected or modified freely between cycles.
#[derive(Debug)]
pub struct Cpu {
    /// Accumulator register.
    pub acc: Word,
    /// Program Counter: address of the next instruction to fetch.
    pub pc: Word,
    /// Program and data memory.
    pub memory: Memory,
    /// Arithmetic unit for ADD and SUB.
    pub alu: Alu,
    /// Rendering of the INPUT prompt and OUTPUT lines.
    pub presentation: Presentation,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed memory, accumulator, and program counter.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory size, overflow policy, console presentation, and tracing.
    pub fn new(config: &Config) -> Self {
        Self {
            acc: 0,
            pc: RESET_PC,
            memory: Memory::new(config.memory.size),
            alu: Alu::new(config.arithmetic.overflow),
            presentation: Presentation::from(&config.console),
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Formats the machine state: PC, accumulator, and every non-zero memory
    /// cell with its disassembly.
    pub fn state_report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "PC  = {}", self.pc);
        let _ = writeln!(out, "ACC = {}", self.acc);
        for (index, value) in self.memory.non_zero() {
            let _ = writeln!(out, "  [{index:03}] {value:>11}  {}", disassemble(value));
        }
        out
    }

    /// Dumps the current machine state to stderr.
    pub fn dump_state(&self) {
        eprint!("{}", self.state_report());
    }
}
