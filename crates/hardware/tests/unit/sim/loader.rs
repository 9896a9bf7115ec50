//! # Loader Tests
//!
//! Sentinel handling, the memory overflow guard, malformed input, and the
//! order in which the banner and prompt are written.

use abacus_core::common::MachineError;
use abacus_core::sim::loader::{LoadReport, load_program, load_words};
use abacus_core::soc::{Console, Memory, Presentation};
use mockall::Sequence;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::TestContext;
use crate::common::mocks::console::MockTokenConsole;

fn numbers(count: usize) -> String {
    (1..=count)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn sized(size: usize, input: &str) -> TestContext {
    let mut config = TestContext::quiet_config();
    config.memory.size = size;
    TestContext::with_config(&config, input)
}

#[test]
fn test_five_values_then_sentinel() {
    let mut ctx = TestContext::new("10 20 30 40 50 -1");
    let report = ctx.sim.load().unwrap();
    assert_eq!(
        report,
        LoadReport {
            words: 5,
            sentinel: true
        }
    );
    assert_eq!(&ctx.cpu().memory.as_slice()[..6], &[10, 20, 30, 40, 50, 0]);
    assert!(ctx.cpu().memory.as_slice()[5..].iter().all(|&w| w == 0));
    assert_eq!(ctx.cpu().stats.words_loaded, 5);
}

#[test]
fn test_sentinel_only() {
    let mut ctx = TestContext::new("-1");
    let report = ctx.sim.load().unwrap();
    assert_eq!(report.words, 0);
    assert_eq!(ctx.cpu().memory.non_zero().count(), 0);
}

#[test]
fn test_more_values_than_memory() {
    let mut ctx = TestContext::new(&numbers(257));
    let err = ctx.sim.load().unwrap_err();
    assert!(matches!(err, MachineError::MemoryOverflow { capacity: 256 }));
    assert_eq!(ctx.peek(255), 256);
}

#[test]
fn test_small_memory_overflow() {
    let mut ctx = sized(4, "1 2 3 4 5");
    assert!(matches!(
        ctx.sim.load().unwrap_err(),
        MachineError::MemoryOverflow { capacity: 4 }
    ));
    assert_eq!(ctx.cpu().memory.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_exact_capacity_then_sentinel() {
    let mut ctx = sized(4, "1 2 3 4 -1");
    let report = ctx.sim.load().unwrap();
    assert_eq!(
        report,
        LoadReport {
            words: 4,
            sentinel: true
        }
    );
}

#[test]
fn test_exact_capacity_then_end_of_input() {
    let mut ctx = sized(4, "1 2 3 4");
    let report = ctx.sim.load().unwrap();
    assert_eq!(
        report,
        LoadReport {
            words: 4,
            sentinel: false
        }
    );
}

#[test]
fn test_exact_capacity_then_garbage() {
    let mut ctx = sized(4, "1 2 3 4 x");
    assert!(matches!(
        ctx.sim.load().unwrap_err(),
        MachineError::InvalidInput { .. }
    ));
}

#[rstest]
#[case::letters("1 2 abc -1", Some("abc"))]
#[case::decimal("1.5 -1", Some("1.5"))]
#[case::out_of_range("99999999999 -1", Some("99999999999"))]
#[case::no_sentinel("1 2 3", None)]
#[case::empty("", None)]
fn test_malformed_input(#[case] input: &str, #[case] expected: Option<&str>) {
    let mut ctx = TestContext::new(input);
    match ctx.sim.load().unwrap_err() {
        MachineError::InvalidInput { found } => assert_eq!(found.as_deref(), expected),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_values_after_sentinel_stay_in_stream() {
    let mut ctx = TestContext::new("7 -1 8 9");
    let _ = ctx.sim.load().unwrap();
    assert_eq!(ctx.peek(0), 7);
    assert_eq!(ctx.peek(1), 0);
    assert_eq!(ctx.sim.console.read_token().unwrap().as_deref(), Some("8"));
}

#[test]
fn test_opcodes_not_validated() {
    let mut ctx = TestContext::new("9900 -5 123456 -1");
    let report = ctx.sim.load().unwrap();
    assert_eq!(report.words, 3);
    assert_eq!(ctx.peek(1), -5);
}

#[test]
fn test_banner_then_prompt_then_reads() {
    let mut console = MockTokenConsole::new();
    let mut seq = Sequence::new();
    let _ = console
        .expect_write_str()
        .withf(|text| text.contains("-- ABACUS C MACHINE --"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    let _ = console
        .expect_write_str()
        .withf(|text| text.contains("ENTER THE PROGRAM"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    let _ = console
        .expect_read_token()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(Some("-1".to_string())));

    let mut memory = Memory::new(16);
    let report = load_program(&mut console, &mut memory, Presentation::PLAIN).unwrap();
    assert_eq!(report.words, 0);
}

#[test]
fn test_quiet_writes_nothing() {
    let mut console = MockTokenConsole::new();
    let mut queue = vec!["-1".to_string(), "4".to_string()];
    let _ = console
        .expect_read_token()
        .returning(move || Ok(queue.pop()));
    let _ = console.expect_write_str().never();

    let mut memory = Memory::new(16);
    let report = load_program(&mut console, &mut memory, Presentation::QUIET).unwrap();
    assert_eq!(report.words, 1);
    assert_eq!(memory.get(0), Some(4));
}

#[test]
fn test_load_words() {
    let mut memory = Memory::new(4);
    let report = load_words(&mut memory, &[5, 6, -1, 7]).unwrap();
    assert_eq!(
        report,
        LoadReport {
            words: 2,
            sentinel: true
        }
    );
    assert_eq!(memory.as_slice(), &[5, 6, 0, 0]);

    let mut memory = Memory::new(2);
    assert!(matches!(
        load_words(&mut memory, &[1, 2, 3]),
        Err(MachineError::MemoryOverflow { capacity: 2 })
    ));

    let mut memory = Memory::new(2);
    let report = load_words(&mut memory, &[1, 2]).unwrap();
    assert!(!report.sentinel);
}
