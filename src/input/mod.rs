//! Line-based input providers
//!
//! The round state machine only asks for whole lines. Providers hand them back
//! trimmed and lowercased, or `None` once input is exhausted.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of player input lines
pub trait LineInput {
    /// Show `prompt` and read the next line
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader or prompt writer fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Trim surrounding whitespace and lowercase
#[must_use]
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Interactive console input
///
/// Prints the prompt to `writer` and reads one line from `reader`.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Console input on the process's stdin/stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> LineInput for ConsoleInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        // Undecodable bytes become U+FFFD and fail word validation downstream
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(normalize(&String::from_utf8_lossy(&line))))
    }
}

/// Pre-recorded input, for tests and non-interactive drivers
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines.into_iter().map(|l| normalize(l.as_ref())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
