//! Machine hardware components.
//!
//! This module organizes the components the execution engine is attached to:
//! the word-addressed memory and the console used for program loading and
//! the INPUT/OUTPUT instructions.

/// Console implementations and presentation.
pub mod devices;

/// Word-addressed memory.
pub mod memory;

/// Console trait definition.
pub mod traits;

pub use devices::{Presentation, StreamConsole};
pub use memory::Memory;
pub use traits::Console;
