use std::io::Cursor;

use abacus_core::Simulator;
use abacus_core::common::{MachineError, Word};
use abacus_core::config::Config;
use abacus_core::core::{Cpu, Step};
use abacus_core::sim::RunReport;
use abacus_core::soc::StreamConsole;

/// Console type used by the harness: scripted input, captured output.
pub type TestConsole = StreamConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// A simulator with scripted console input and captured output.
///
/// Prompts and colour are off by default so captured output only holds
/// OUTPUT lines.
pub struct TestContext {
    pub sim: Simulator<TestConsole>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new("")
    }
}

impl TestContext {
    /// Quiet configuration used by default.
    pub fn quiet_config() -> Config {
        let mut config = Config::default();
        config.console.color = false;
        config.console.prompts = false;
        config
    }

    /// Creates a context whose console will read `input`.
    pub fn new(input: &str) -> Self {
        Self::with_config(&Self::quiet_config(), input)
    }

    /// Creates a context with an explicit configuration.
    pub fn with_config(config: &Config, input: &str) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        let console = StreamConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Self {
            sim: Simulator::new(config, console),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Places `words` in memory starting at address 0, bypassing the console.
    pub fn load_program(mut self, words: &[Word]) -> Self {
        let _ = self.sim.load_words(words).unwrap();
        self
    }

    /// Writes one memory cell.
    pub fn poke(&mut self, index: Word, value: Word) {
        let addr = self.sim.cpu.memory.address(index).unwrap();
        self.sim.cpu.memory.write(addr, value);
    }

    /// Reads one memory cell.
    pub fn peek(&self, index: usize) -> Word {
        self.sim.cpu.memory.get(index).unwrap()
    }

    /// Executes a single cycle.
    pub fn step(&mut self) -> Result<Step, MachineError> {
        self.sim.step()
    }

    /// Runs until HALT or a fatal error.
    pub fn run(&mut self) -> Result<RunReport, MachineError> {
        self.sim.run()
    }

    /// Captured console output so far.
    pub fn output(&self) -> String {
        String::from_utf8(self.sim.console.writer().clone()).unwrap()
    }

    /// Values printed by OUTPUT instructions, in order (quiet mode only).
    pub fn outputs(&self) -> Vec<Word> {
        self.output()
            .lines()
            .filter_map(|line| line.strip_prefix("OUTPUT -> "))
            .map(|v| v.parse().unwrap())
            .collect()
    }
}
