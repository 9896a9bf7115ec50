//! Configuration system for the accumulator machine.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the machine. It provides:
//! 1. **Defaults:** The reference machine (256 cells, wrapping arithmetic, coloured prompts).
//! 2. **Structures:** Hierarchical config for general, memory, arithmetic, and console settings.
//! 3. **Enums:** Overflow policy for ADD and SUB.
//!
//! Configuration is supplied as JSON (see [`Config::from_json_str`] and [`Config::from_file`])
//! or built with `Config::default()`. Every field is optional in JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the machine.
mod defaults {
    use crate::common::constants;

    /// Number of memory cells (matches the reference sizing).
    pub const MEMORY_SIZE: usize = constants::MEMORY_SIZE;

    /// ANSI colour escapes in prompts and output lines.
    pub const CONSOLE_COLOR: bool = true;

    /// Banner and input prompts are printed.
    pub const CONSOLE_PROMPTS: bool = true;
}

/// How ADD and SUB treat results that do not fit in a [`Word`](crate::common::Word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OverflowPolicy {
    /// Two's complement wraparound, the host's native behaviour.
    #[default]
    Wrapping,
    /// Overflow is a fatal [`MachineError::ArithmeticOverflow`](crate::common::MachineError::ArithmeticOverflow).
    Checked,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use abacus_core::config::{Config, OverflowPolicy};
///
/// let json = r#"{ "memory": { "size": 100 }, "arithmetic": { "overflow": "Checked" } }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.memory.size, 100);
/// assert_eq!(config.arithmetic.overflow, OverflowPolicy::Checked);
/// assert!(config.console.color);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General execution settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory sizing.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Arithmetic semantics.
    #[serde(default)]
    pub arithmetic: ArithmeticConfig,
    /// Console presentation.
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`]
    /// for settings the machine cannot run with.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise the
    /// same errors as [`Config::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks settings that deserialize fine but cannot describe a working machine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `memory.size` is zero or does not fit
    /// in a machine word.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.size == 0 {
            return Err(ConfigError::Invalid {
                field: "memory.size",
                reason: "memory must have at least one cell".to_string(),
            });
        }
        if i32::try_from(self.memory.size).is_err() {
            return Err(ConfigError::Invalid {
                field: "memory.size",
                reason: format!("{} cells cannot be addressed by a word", self.memory.size),
            });
        }
        Ok(())
    }
}

/// General execution settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event at TRACE level for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Memory sizing.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of cells. Operands can still only address cells `0..=99`.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: Self::default_size(),
        }
    }
}

/// Arithmetic semantics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArithmeticConfig {
    /// Overflow policy for ADD and SUB.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

/// Console presentation settings. These never change machine semantics.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Wrap banner, prompts, and output lines in ANSI colour escapes.
    #[serde(default = "ConsoleConfig::default_color")]
    pub color: bool,

    /// Print the banner, the program prompt, and the INPUT prompt.
    #[serde(default = "ConsoleConfig::default_prompts")]
    pub prompts: bool,
}

impl ConsoleConfig {
    const fn default_color() -> bool {
        defaults::CONSOLE_COLOR
    }

    const fn default_prompts() -> bool {
        defaults::CONSOLE_PROMPTS
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: Self::default_color(),
            prompts: Self::default_prompts(),
        }
    }
}
