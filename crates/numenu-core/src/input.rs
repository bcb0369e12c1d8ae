//! Blocking selection input.
//!
//! [`Menu::acquire`] prompts on a writer and pulls whitespace-delimited
//! tokens from an [`InputSource`] until one is an acceptable selection.
//! The source is passed in by the caller; menus that share one source must
//! not acquire from it concurrently.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::error::MenuError;
use crate::menu::Menu;
use crate::Result;

/// Prompt written before every read attempt.
pub const PROMPT: &str = "Enter: ";

/// A blocking source of whitespace-delimited tokens.
pub trait InputSource {
    /// Read the next token, blocking until one is available.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Splits a buffered reader into whitespace-delimited tokens, across lines.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Tokens read from the source but not yet consumed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl TokenReader<io::StdinLock<'static>> {
    /// Token reader over the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Invalid UTF-8 becomes replacement characters, so it parses as a
            // malformed token instead of failing the read.
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

impl Menu {
    /// Prompt for and read selections until an acceptable one arrives.
    ///
    /// Tokens that are not integers are discarded; integers that fail
    /// [`Menu::is_valid_selection`] are skipped. The accepted value becomes
    /// the current choice and the previous choice moves to `last_choice`.
    /// With `track_completion`, a non-exit selection marks its option chosen.
    ///
    /// # Errors
    ///
    /// [`MenuError::InputClosed`] if the source runs out before a valid
    /// selection, or an I/O error from the source or the prompt writer.
    pub fn acquire<I, W>(
        &mut self,
        input: &mut I,
        out: &mut W,
        track_completion: bool,
    ) -> Result<i64>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            out.write_all(PROMPT.as_bytes())?;
            out.flush()?;

            let Some(token) = input.next_token()? else {
                debug!(target: "numenu::input", "Input closed while waiting for a selection");
                return Err(MenuError::InputClosed);
            };

            let value = match token.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    trace!(target: "numenu::input", "Discarding non-numeric token {:?}", token);
                    continue;
                }
            };

            if !self.is_valid_selection(value) {
                trace!(target: "numenu::input", "Rejecting out-of-range selection {}", value);
                continue;
            }

            self.record_selection(value, track_completion);
            debug!(
                target: "numenu::input",
                "Accepted selection {} (previous {})",
                value,
                self.last_choice()
            );
            return Ok(value);
        }
    }
}
