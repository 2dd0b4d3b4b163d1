//! Terminal implementation for the CLI
//!
//! Interactive sessions get dialoguer text prompts. When stdin is not a
//! terminal (pipes, scripts) prompts are printed verbatim and answers are
//! read line by line.

use dialoguer::Input;
use kickoff_core::{Error, LineTerminal, Notice, Result, Terminal};
use std::io::{self, IsTerminal, StdinLock, Stdout};

use crate::output;

pub enum ConsoleTerminal {
    Interactive,
    Piped(LineTerminal<StdinLock<'static>, Stdout>),
}

impl ConsoleTerminal {
    /// Pick the rendering based on whether stdin is a terminal
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            Self::Interactive
        } else {
            Self::Piped(LineTerminal::new(io::stdin().lock(), io::stdout()))
        }
    }
}

impl Terminal for ConsoleTerminal {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        match self {
            Self::Interactive => Input::<String>::new()
                .with_prompt(prompt_label(prompt))
                .allow_empty(true)
                .interact_text()
                .map_err(|e| Error::prompt(e.to_string())),
            Self::Piped(lines) => lines.ask(prompt),
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Success(msg) => output::success(&msg),
            Notice::Info(msg) => output::info(&msg),
            Notice::Warning(msg) => output::warning(&msg),
            Notice::Error(msg) => output::error(&msg),
        }
    }
}

/// dialoguer appends its own `: `, so drop the trailing colon
fn prompt_label(prompt: &str) -> &str {
    prompt.trim_end().trim_end_matches(':').trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_label_strips_trailing_colon() {
        assert_eq!(
            prompt_label("Enter name of the new folder :"),
            "Enter name of the new folder"
        );
        assert_eq!(
            prompt_label("whats your project called:"),
            "whats your project called"
        );
        assert_eq!(
            prompt_label("Do you wanna create a new folder in repos (y/n):"),
            "Do you wanna create a new folder in repos (y/n)"
        );
    }
}
