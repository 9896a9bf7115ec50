//! Console trait for machine I/O.
//!
//! This module defines the `Console` trait through which the loader and the
//! INPUT/OUTPUT instructions reach the outside world. It provides:
//! 1. **Input:** Whitespace-delimited tokens, read one at a time in stream order.
//! 2. **Output:** Presentation text (prompts and output lines).
//! 3. **Word Parsing:** A provided method turning the next token into a [`Word`].
//!
//! The loader and INPUT share one console, so INPUT continues from wherever the
//! loader stopped reading.

use std::io;

use crate::common::{MachineError, Word};

/// Token-oriented console attached to the machine.
pub trait Console {
    /// Reads the next whitespace-delimited token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying reader.
    fn read_token(&mut self) -> io::Result<Option<String>>;

    /// Writes presentation text.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying writer.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Reads the next token and parses it as a word.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::InvalidInput`] when the token is not an integer,
    /// does not fit in a word, or the input is exhausted; [`MachineError::Io`]
    /// when the reader fails.
    fn read_word(&mut self) -> Result<Word, MachineError> {
        match self.read_token()? {
            Some(token) => parse_word(token),
            None => Err(MachineError::InvalidInput { found: None }),
        }
    }
}

/// Parses one input token as a word.
///
/// Accepts an optional sign followed by decimal digits, within the word's range.
///
/// # Errors
///
/// Returns [`MachineError::InvalidInput`] carrying the token when it is not a
/// valid word.
pub fn parse_word(token: String) -> Result<Word, MachineError> {
    token
        .parse::<Word>()
        .map_err(|_| MachineError::InvalidInput { found: Some(token) })
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_token(&mut self) -> io::Result<Option<String>> {
        (**self).read_token()
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        (**self).write_str(text)
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn read_token(&mut self) -> io::Result<Option<String>> {
        (**self).read_token()
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        (**self).write_str(text)
    }
}
