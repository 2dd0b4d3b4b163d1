//! User interaction seam
//!
//! The wizard never touches stdin/stdout directly. It asks questions and
//! reports outcomes through a [`Terminal`], so the CLI can render with
//! dialoguer while tests script answers in memory.

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

/// Something that can ask questions and show notices
pub trait Terminal {
    /// Show `prompt` and return one answer with its line terminator removed
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Show a notice
    fn notify(&mut self, notice: Notice);
}

/// Line-oriented terminal over any reader/writer pair
///
/// Prompts are written verbatim followed by a space; one line is read per
/// question. End of input is an error rather than an empty answer.
pub struct LineTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the terminal, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::input_closed(prompt));
        }
        Ok(strip_line_ending(line))
    }

    fn notify(&mut self, notice: Notice) {
        let text = match &notice {
            Notice::Success(msg)
            | Notice::Info(msg)
            | Notice::Warning(msg)
            | Notice::Error(msg) => msg,
        };
        // A broken output stream must not abort the wizard
        let _ = writeln!(self.output, "{}", text);
    }
}

/// Remove a trailing `\n` or `\r\n`, leaving other whitespace intact
pub fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
