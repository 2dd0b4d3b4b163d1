//! Test doubles for the terminal and command runner seams

use crate::error::{Error, Result};
use crate::runner::{CommandRunner, Invocation, InvocationOutcome};
use crate::terminal::{Notice, Terminal};
use camino::Utf8PathBuf;
use std::collections::VecDeque;
use tempfile::TempDir;

/// Terminal that replays canned answers and records everything shown
#[derive(Debug, Default)]
pub(crate) struct ScriptedTerminal {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub notices: Vec<Notice>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Warning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter_map(|n| match n {
                Notice::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Terminal for ScriptedTerminal {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| Error::input_closed(prompt))
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Runner that records invocations instead of spawning processes
#[derive(Debug)]
pub(crate) struct RecordingRunner {
    pub invocations: Vec<Invocation>,
    outcome: InvocationOutcome,
    /// Create `<dir>/<last arg>` for venv invocations, like the real tool
    materialize_venv: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            invocations: Vec::new(),
            outcome: InvocationOutcome::Succeeded,
            materialize_venv: false,
        }
    }

    pub fn materializing_venv() -> Self {
        Self {
            materialize_venv: true,
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: InvocationOutcome::NotLaunched {
                reason: "No such file or directory (os error 2)".to_string(),
            },
            ..Self::new()
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> InvocationOutcome {
        self.invocations.push(invocation.clone());
        if self.materialize_venv && invocation.args.iter().any(|a| a == "venv") {
            if let Some(name) = invocation.args.last() {
                std::fs::create_dir_all(invocation.dir.join(name)).unwrap();
            }
        }
        self.outcome.clone()
    }
}

/// Temporary directory as a UTF-8 path
pub(crate) fn utf8_temp_dir() -> (Utf8PathBuf, TempDir) {
    let temp = TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
    (path, temp)
}

/// Assert a path is an existing empty file
pub(crate) fn assert_empty_file(path: &camino::Utf8Path) {
    let metadata = std::fs::metadata(path).unwrap_or_else(|e| panic!("{}: {}", path, e));
    assert!(metadata.is_file(), "{} should be a file", path);
    assert_eq!(metadata.len(), 0, "{} should be empty", path);
}
