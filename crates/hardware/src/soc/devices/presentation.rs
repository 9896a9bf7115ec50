//! Console presentation.
//!
//! Renders the banner, prompts, and output lines the machine writes to its
//! console. With colour enabled the text carries the same ANSI escapes as the
//! reference machine, so scripted consumers see identical bytes.

use crate::common::Word;
use crate::config::ConsoleConfig;

/// Cyan, bold, underlined.
const STYLE_BANNER: &str = "\x1b[96;1;4m";
/// Bright yellow.
const STYLE_PROMPT: &str = "\x1b[93m";
/// Bright green.
const STYLE_OUTPUT: &str = "\x1b[92m";
/// Reset all attributes.
const STYLE_RESET: &str = "\x1b[0m";

/// Text renderer for the machine's console output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Emit ANSI colour escapes.
    pub color: bool,
    /// Emit the banner and prompts.
    pub prompts: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::from(&ConsoleConfig::default())
    }
}

impl From<&ConsoleConfig> for Presentation {
    fn from(config: &ConsoleConfig) -> Self {
        Self {
            color: config.color,
            prompts: config.prompts,
        }
    }
}

impl Presentation {
    /// Plain text with prompts, no colour.
    pub const PLAIN: Self = Self {
        color: false,
        prompts: true,
    };

    /// No banner or prompts and no colour; only output lines are rendered.
    pub const QUIET: Self = Self {
        color: false,
        prompts: false,
    };

    const fn style(self, escape: &'static str) -> &'static str {
        if self.color { escape } else { "" }
    }

    /// Banner printed before loading, or `None` when prompts are off.
    pub fn banner(self) -> Option<String> {
        self.prompts.then(|| {
            format!(
                "\n{}-- ABACUS C MACHINE --\n{}",
                self.style(STYLE_BANNER),
                self.style(STYLE_RESET)
            )
        })
    }

    /// Prompt asking for the program, or `None` when prompts are off.
    pub fn load_prompt(self) -> Option<String> {
        self.prompts.then(|| {
            format!(
                "\nENTER THE PROGRAM {}[END WITH -1] ->\n\n{}",
                self.style(STYLE_PROMPT),
                self.style(STYLE_RESET)
            )
        })
    }

    /// Prompt printed by the INPUT instruction, or `None` when prompts are off.
    pub fn input_prompt(self) -> Option<&'static str> {
        self.prompts.then_some("ENTER A NUMBER -> ")
    }

    /// Line printed by the OUTPUT instruction.
    pub fn output_line(self, value: Word) -> String {
        format!(
            "\n{}OUTPUT -> {value}\n\n{}",
            self.style(STYLE_OUTPUT),
            self.style(STYLE_RESET)
        )
    }
}
