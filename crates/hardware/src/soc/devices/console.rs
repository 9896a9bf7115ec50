//! Stream-backed console.
//!
//! Implements [`Console`] over any buffered reader and writer. The CLI attaches
//! stdin and stdout; tests attach in-memory buffers. Input is tokenised line by
//! line so that interactive use only blocks for the line currently needed.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::soc::traits::Console;

/// Console reading whitespace-delimited tokens from `R` and writing to `W`.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    /// Input source.
    reader: R,
    /// Output sink; flushed after every write so prompts appear before blocking reads.
    writer: W,
    /// Tokens already read from the current line but not yet consumed.
    pending: VecDeque<String>,
    /// Set once the reader has returned end of input.
    exhausted: bool,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Creates a console over `reader` and `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Returns the output sink.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the console, returning the reader and writer.
    ///
    /// Tokens buffered from a partially consumed line are dropped.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Reads lines until at least one token is buffered or input ends.
    fn fill(&mut self) -> io::Result<()> {
        let mut line = String::new();
        while self.pending.is_empty() && !self.exhausted {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                self.exhausted = true;
            } else {
                self.pending
                    .extend(line.split_whitespace().map(str::to_string));
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_token(&mut self) -> io::Result<Option<String>> {
        self.fill()?;
        Ok(self.pending.pop_front())
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}
