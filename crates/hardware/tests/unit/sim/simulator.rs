//! # Simulator Tests
//!
//! Whole programs driven through `Simulator`: loading from the console,
//! INPUT continuing after the sentinel, exact console bytes, statistics,
//! and the state left behind by a fatal error.

use abacus_core::common::MachineError;
use abacus_core::config::Config;
use pretty_assertions::assert_eq;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;

/// Counts down from 3, printing each value, then halts.
fn countdown() -> ProgramBuilder {
    ProgramBuilder::new()
        .load(10)
        .jz(9)
        .output(10)
        .sub(11)
        .store(10)
        .jump(1)
        .data(0)
        .data(0)
        .data(0)
        .halt()
        .data(3)
        .data(1)
}

#[test]
fn test_countdown_outputs_and_stats() {
    let mut ctx = TestContext::new(&countdown().to_input());
    let report = ctx.sim.boot().unwrap();

    assert_eq!(ctx.outputs(), vec![3, 2, 1]);
    assert_eq!(report.acc, 0);
    assert_eq!(report.pc, 9);
    assert_eq!(report.cycles, 18);

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.words_loaded, 12);
    assert_eq!(stats.instructions_retired, 18);
    assert_eq!(stats.inst_jump, 7);
    assert_eq!(stats.jumps_taken, 4);
    assert_eq!(stats.jumps_not_taken, 3);
    assert_eq!(stats.inst_output, 3);
    assert_eq!(stats.inst_arith, 3);
    assert_eq!(stats.inst_halt, 1);
}

#[test]
fn test_input_continues_after_sentinel() {
    let program = ProgramBuilder::new()
        .input(20)
        .input(21)
        .load(20)
        .add(21)
        .store(22)
        .output(22)
        .halt();
    let input = format!("{}\n17\n25\n", program.to_input());

    let mut ctx = TestContext::new(&input);
    let report = ctx.sim.boot().unwrap();
    assert_eq!(report.acc, 42);
    assert_eq!(ctx.outputs(), vec![42]);
    assert_eq!(ctx.peek(22), 42);
}

#[test]
fn test_input_exhausted_during_run() {
    let mut ctx = TestContext::new("820 0 -1");
    let err = ctx.sim.boot().unwrap_err();
    assert!(matches!(err, MachineError::InvalidInput { found: None }));
    assert_eq!(ctx.cpu().pc, 0);
}

#[test]
fn test_error_leaves_state_for_inspection() {
    let program = ProgramBuilder::new()
        .load(3)
        .store(4)
        .data(1000)
        .data(55)
        .build();
    let mut ctx = TestContext::default().load_program(&program);

    let err = ctx.run().unwrap_err();
    assert!(matches!(err, MachineError::InvalidInstruction(1000)));
    assert_eq!(ctx.cpu().pc, 2);
    assert_eq!(ctx.cpu().acc, 55);
    assert_eq!(ctx.peek(4), 55);
    assert_eq!(ctx.cpu().stats.cycles, 3);
    assert_eq!(ctx.cpu().stats.instructions_retired, 2);

    let report = ctx.cpu().state_report();
    assert!(report.starts_with("PC  = 2\nACC = 55\n"));
    assert!(report.contains("LOAD 03"));
    assert!(report.contains("??? 1000"));
}

#[test]
fn test_default_console_bytes() {
    let mut ctx = TestContext::with_config(&Config::default(), "902 0 77 -1");
    let _ = ctx.sim.boot().unwrap();
    assert_eq!(
        ctx.output(),
        concat!(
            "\n\x1b[96;1;4m-- ABACUS C MACHINE --\n\x1b[0m",
            "\nENTER THE PROGRAM \x1b[93m[END WITH -1] ->\n\n\x1b[0m",
            "\n\x1b[92mOUTPUT -> 77\n\n\x1b[0m",
        )
    );
}

#[test]
fn test_plain_console_with_input_prompt() {
    let mut config = Config::default();
    config.console.color = false;
    let mut ctx = TestContext::with_config(&config, "805 905 0 -1 6");
    let _ = ctx.sim.boot().unwrap();
    assert_eq!(
        ctx.output(),
        concat!(
            "\n-- ABACUS C MACHINE --\n",
            "\nENTER THE PROGRAM [END WITH -1] ->\n\n",
            "ENTER A NUMBER -> ",
            "\nOUTPUT -> 6\n\n",
        )
    );
}

#[test]
fn test_loader_error_stops_boot() {
    let mut ctx = TestContext::new("905 oops -1");
    let err = ctx.sim.boot().unwrap_err();
    assert!(matches!(err, MachineError::InvalidInput { .. }));
    assert_eq!(ctx.cpu().stats.cycles, 0);
    assert!(ctx.output().is_empty());
}

#[test]
fn test_simulators_are_independent() {
    let mut a = TestContext::default().load_program(&[401, 5, 0]);
    let mut b = TestContext::default().load_program(&[402, 0, 9]);

    let _ = a.step().unwrap();
    let _ = b.step().unwrap();
    assert_eq!(a.cpu().acc, 5);
    assert_eq!(b.cpu().acc, 9);

    a.poke(2, 17);
    assert_eq!(b.peek(2), 9);
}

#[test]
fn test_into_console_returns_output() {
    let mut ctx = TestContext::new("901 0 -1");
    let _ = ctx.sim.boot().unwrap();
    let (_, output) = ctx.sim.into_console().into_parts();
    assert_eq!(String::from_utf8(output).unwrap(), "\nOUTPUT -> 0\n\n");
}
