//! Console devices.
//!
//! This module contains the console implementation attached to the machine
//! and the presentation layer that renders its prompts and output lines.

/// Buffered reader/writer console.
pub mod console;

/// Banner, prompt, and output line rendering.
pub mod presentation;

pub use console::StreamConsole;
pub use presentation::Presentation;

pub use crate::soc::traits::Console;
