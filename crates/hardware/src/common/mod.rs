//! Common utilities and types used throughout the accumulator machine.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Address Types:** A strong type for bounds-checked memory addresses.
//! 2. **Constants:** Word type, memory capacity, encoding base, and loader sentinel.
//! 3. **Error Handling:** Fatal machine errors and configuration errors.

/// Validated memory address type.
pub mod addr;

/// Common constants used throughout the machine.
pub mod constants;

/// Error types for execution, loading, and configuration.
pub mod error;

pub use addr::Address;
pub use constants::{ENCODING_BASE, LOAD_SENTINEL, MEMORY_SIZE, Word};
pub use error::{ConfigError, ErrorKind, MachineError};
