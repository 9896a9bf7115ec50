//! Accumulator machine CLI.
//!
//! This binary wires the process's stdin and stdout into the machine. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON file, then flag overrides.
//! 2. **Load and run:** Reads the program (ended by `-1`) from stdin, then executes it;
//!    INPUT instructions keep reading from the same stdin.
//! 3. **Reporting:** Prints `!!! -- <diagnostic>` on a fatal error and maps the outcome
//!    to the exit status (0 on HALT, 1 on any error).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use abacus_core::config::{Config, OverflowPolicy};
use abacus_core::soc::StreamConsole;
use abacus_core::{MachineError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "abacus",
    author,
    version,
    about = "Decimal accumulator machine",
    long_about = "Reads a program from stdin as whitespace-separated integers ended by -1, \
then executes it. Each instruction is opcode*100 + operand.\n\n\
Opcodes: 0 HALT, 1 ADD, 2 SUB, 3 STORE, 4 LOAD, 5 JUMP, 6 JZ, 7 JP, 8 INPUT, 9 OUTPUT.\n\n\
Examples:\n  echo '809 909 0 -1 42' | abacus\n  abacus --config machine.json --stats < program.txt"
)]
struct Cli {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of memory cells (default 256).
    #[arg(long)]
    memory_size: Option<usize>,

    /// Treat ADD/SUB overflow as a fatal error instead of wrapping.
    #[arg(long)]
    checked: bool,

    /// Disable ANSI colour in prompts and output.
    #[arg(long)]
    no_color: bool,

    /// Suppress the banner and prompts; OUTPUT lines are still printed.
    #[arg(short, long)]
    quiet: bool,

    /// Trace every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics to stderr when the machine stops.
    #[arg(long)]
    stats: bool,

    /// Dump PC, accumulator, and non-zero memory to stderr on a fatal error.
    #[arg(long)]
    dump: bool,
}

/// Resolves the effective configuration: defaults, then file, then flags.
fn build_config(cli: &Cli) -> Result<Config, abacus_core::common::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(size) = cli.memory_size {
        config.memory.size = size;
    }
    if cli.checked {
        config.arithmetic.overflow = OverflowPolicy::Checked;
    }
    if cli.no_color {
        config.console.color = false;
    }
    if cli.quiet {
        config.console.prompts = false;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }

    config.validate()?;
    Ok(config)
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the default level.
fn init_tracing(trace: bool) {
    let default_level = if trace { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.general.trace_instructions);

    let console = StreamConsole::new(io::stdin().lock(), io::stdout().lock());
    let mut sim = Simulator::new(&config, console);

    let result = sim.boot();

    let status = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_fatal(&e);
            if cli.dump {
                sim.cpu.dump_state();
            }
            ExitCode::FAILURE
        }
    };

    if cli.stats {
        sim.cpu.stats.print();
    }
    status
}

/// Prints a fatal error in the machine's diagnostic format.
fn report_fatal(error: &MachineError) {
    if let MachineError::InvalidInput { found: Some(token) } = error {
        tracing::debug!(token = token.as_str(), "rejected input token");
    }
    eprintln!("!!! -- {error}");
}
