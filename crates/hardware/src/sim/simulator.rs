//! Simulator: owns the CPU and its console side-by-side.
//!
//! The simulator is the driver the CLI and tests talk to. Loading and execution
//! share the same console, so INPUT instructions continue reading from wherever
//! the loader stopped.

use tracing::debug;

use crate::common::{MachineError, Word};
use crate::config::Config;
use crate::core::{Cpu, Step};
use crate::sim::loader::{self, LoadReport};
use crate::soc::Console;

/// Final state of a run that reached HALT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Cycles executed, including the HALT.
    pub cycles: u64,
    /// Accumulator at HALT.
    pub acc: Word,
    /// Address of the HALT instruction.
    pub pc: Word,
}

/// Top-level simulator: machine state + console.
#[derive(Debug)]
pub struct Simulator<C> {
    /// Machine state.
    pub cpu: Cpu,
    /// Console shared by the loader and the INPUT/OUTPUT instructions.
    pub console: C,
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator with a fresh machine attached to `console`.
    pub fn new(config: &Config, console: C) -> Self {
        Self {
            cpu: Cpu::new(config),
            console,
        }
    }

    /// Loads the program from the console.
    ///
    /// # Errors
    ///
    /// See [`loader::load_program`].
    pub fn load(&mut self) -> Result<LoadReport, MachineError> {
        let report =
            loader::load_program(&mut self.console, &mut self.cpu.memory, self.cpu.presentation)?;
        self.cpu.stats.words_loaded = report.words as u64;
        Ok(report)
    }

    /// Loads the program from a word slice instead of the console.
    ///
    /// # Errors
    ///
    /// See [`loader::load_words`].
    pub fn load_words(&mut self, words: &[Word]) -> Result<LoadReport, MachineError> {
        let report = loader::load_words(&mut self.cpu.memory, words)?;
        self.cpu.stats.words_loaded = report.words as u64;
        Ok(report)
    }

    /// Advances the machine by one cycle.
    ///
    /// # Errors
    ///
    /// See [`Cpu::step`].
    pub fn step(&mut self) -> Result<Step, MachineError> {
        self.cpu.step(&mut self.console)
    }

    /// Runs cycles until HALT or a fatal error.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; the machine state is left for inspection.
    pub fn run(&mut self) -> Result<RunReport, MachineError> {
        while self.step()? == Step::Continue {}
        debug!(cycles = self.cpu.stats.cycles, acc = self.cpu.acc, "run finished");
        Ok(RunReport {
            cycles: self.cpu.stats.cycles,
            acc: self.cpu.acc,
            pc: self.cpu.pc,
        })
    }

    /// Loads the program from the console, then runs it.
    ///
    /// # Errors
    ///
    /// Returns the first loader or execution error.
    pub fn boot(&mut self) -> Result<RunReport, MachineError> {
        let _ = self.load()?;
        self.run()
    }

    /// Consumes the simulator, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }
}
