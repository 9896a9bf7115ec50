//! Execution statistics collection and reporting.
//!
//! This module tracks counters for a machine run. It provides:
//! 1. **Cycles:** Cycles started and instructions retired (a faulting cycle retires nothing).
//! 2. **Instruction mix:** Counts by category (arithmetic, load, store, jump, input, output).
//! 3. **Control flow:** Conditional jumps taken and not taken.
//! 4. **Host timing:** Wall-clock time since the statistics were created.

use std::fmt;
use std::time::Instant;

use crate::isa::Opcode;

/// Execution statistics for one machine.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Cycles started, including a final faulting cycle.
    pub cycles: u64,
    /// Instructions that completed, including HALT.
    pub instructions_retired: u64,

    /// Count of ADD and SUB instructions retired.
    pub inst_arith: u64,
    /// Count of LOAD instructions retired.
    pub inst_load: u64,
    /// Count of STORE instructions retired.
    pub inst_store: u64,
    /// Count of JUMP, JZ, and JP instructions retired.
    pub inst_jump: u64,
    /// Count of INPUT instructions retired.
    pub inst_input: u64,
    /// Count of OUTPUT instructions retired.
    pub inst_output: u64,
    /// Count of HALT instructions retired (zero or one).
    pub inst_halt: u64,

    /// Jumps that overwrote the program counter (JUMP is always taken).
    pub jumps_taken: u64,
    /// Conditional jumps whose condition was false.
    pub jumps_not_taken: u64,

    /// Words placed in memory by the loader.
    pub words_loaded: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_arith: 0,
            inst_load: 0,
            inst_store: 0,
            inst_jump: 0,
            inst_input: 0,
            inst_output: 0,
            inst_halt: 0,
            jumps_taken: 0,
            jumps_not_taken: 0,
            words_loaded: 0,
        }
    }
}

impl SimStats {
    /// Records a retired instruction.
    ///
    /// `jumped` is whether the instruction overwrote the program counter; it is
    /// only meaningful for jump opcodes.
    pub fn retire(&mut self, op: Opcode, jumped: bool) {
        self.instructions_retired += 1;
        match op {
            Opcode::Halt => self.inst_halt += 1,
            Opcode::Add | Opcode::Sub => self.inst_arith += 1,
            Opcode::Load => self.inst_load += 1,
            Opcode::Store => self.inst_store += 1,
            Opcode::Input => self.inst_input += 1,
            Opcode::Output => self.inst_output += 1,
            Opcode::Jump | Opcode::JumpIfZero | Opcode::JumpIfPositive => {
                self.inst_jump += 1;
                if jumped {
                    self.jumps_taken += 1;
                } else {
                    self.jumps_not_taken += 1;
                }
            }
        }
    }

    /// Prints the report to stderr.
    pub fn print(&self) {
        eprint!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let retired = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / retired) * 100.0;

        writeln!(f, "\n==========================================================")?;
        writeln!(f, "ABACUS MACHINE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "words_loaded             {}", self.words_loaded)?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("arith", self.inst_arith),
            ("load", self.inst_load),
            ("store", self.inst_store),
            ("jump", self.inst_jump),
            ("input", self.inst_input),
            ("output", self.inst_output),
            ("halt", self.inst_halt),
        ] {
            writeln!(f, "  op.{name:<19}{count} ({:.2}%)", pct(count))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  jumps.taken            {}", self.jumps_taken)?;
        writeln!(f, "  jumps.not_taken        {}", self.jumps_not_taken)?;
        writeln!(f, "==========================================================")
    }
}
