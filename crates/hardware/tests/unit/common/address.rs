//! # Address Tests
//!
//! Addresses only exist for in-range cells of the memory that produced them.

use abacus_core::soc::Memory;

#[test]
fn test_address_bounds() {
    let memory = Memory::new(256);
    assert_eq!(memory.address(0).map(|a| a.index()), Some(0));
    assert_eq!(memory.address(255).map(|a| a.index()), Some(255));
    assert!(memory.address(256).is_none());
    assert!(memory.address(-1).is_none());
    assert!(memory.address(i32::MIN).is_none());
}

#[test]
fn test_address_round_trips_to_word() {
    let memory = Memory::new(100);
    let addr = memory.address(42).unwrap();
    assert_eq!(addr.as_word(), 42);
    assert_eq!(addr.to_string(), "42");
    assert_eq!(memory.address(7).unwrap().to_string(), "07");
}
