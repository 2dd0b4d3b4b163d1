//! Best-effort external command execution
//!
//! The virtual environment tool and the editor are fire-and-forget: the
//! wizard records what happened and carries on regardless. Callers get an
//! [`InvocationOutcome`] to log, never an error to propagate.

use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use tracing::{debug, warn};

/// A single external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the child process
    pub dir: Utf8PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I, dir: &Utf8Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            dir: dir.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What happened to an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    Succeeded,
    /// Ran but exited unsuccessfully; `code` is `None` when killed by a signal
    Failed { code: Option<i32> },
    /// Could not be started at all
    NotLaunched { reason: String },
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Runs external commands
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> InvocationOutcome;
}

/// Runs commands with inherited stdio through duct
#[derive(Debug, Default, Clone, Copy)]
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    fn run(&mut self, invocation: &Invocation) -> InvocationOutcome {
        if which::which(&invocation.program).is_err() {
            debug!("{} not found in PATH, trying anyway", invocation.program);
        }

        debug!("Running: {} (in {})", invocation, invocation.dir);
        let result = duct::cmd(
            invocation.program.as_str(),
            invocation.args.iter().map(String::as_str),
        )
        .dir(invocation.dir.as_std_path())
        .unchecked()
        .run();

        match result {
            Ok(output) if output.status.success() => InvocationOutcome::Succeeded,
            Ok(output) => InvocationOutcome::Failed {
                code: output.status.code(),
            },
            Err(e) => {
                warn!("Failed to launch {}: {}", invocation.program, e);
                InvocationOutcome::NotLaunched {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_dir() -> (Utf8PathBuf, TempDir) {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        (path, temp)
    }

    #[test]
    fn test_invocation_display() {
        let invocation = Invocation::new("python3", ["-m", "venv", "env"], Utf8Path::new("/tmp"));
        assert_eq!(invocation.to_string(), "python3 -m venv env");
    }

    #[test]
    fn test_missing_program_is_not_launched() {
        let (dir, _temp) = temp_dir();
        let invocation = Invocation::new("kickoff-definitely-missing-tool", ["."], &dir);
        let outcome = DuctRunner.run(&invocation);
        assert!(matches!(outcome, InvocationOutcome::NotLaunched { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_reported() {
        let (dir, _temp) = temp_dir();
        let ok = Invocation::new("sh", ["-c", "exit 0"], &dir);
        assert_eq!(DuctRunner.run(&ok), InvocationOutcome::Succeeded);

        let failing = Invocation::new("sh", ["-c", "exit 3"], &dir);
        assert_eq!(
            DuctRunner.run(&failing),
            InvocationOutcome::Failed { code: Some(3) }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_invocation_dir() {
        let (dir, _temp) = temp_dir();
        let invocation = Invocation::new("sh", ["-c", "touch marker"], &dir);
        assert!(DuctRunner.run(&invocation).is_success());
        assert!(dir.join("marker").exists());
    }
}
