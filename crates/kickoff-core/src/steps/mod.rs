//! Wizard steps
//!
//! Each step asks its questions through a [`Terminal`], acts on the
//! filesystem relative to the [`Session`](crate::Session) and reports
//! failures instead of aborting. The only fatal outcomes are an
//! unsupported language, closed input and an exhausted retry policy.

mod editor;
mod entry;
mod file;
mod folder;
mod javascript;
mod language;
mod python;

pub use editor::launch_editor;
pub use entry::ask_entry;
pub use file::{create_file, is_valid_filename};
pub use folder::create_folder;
pub use javascript::setup_javascript;
pub use language::select_language;
pub use python::setup_python;

use crate::session::Session;
use crate::terminal::{Notice, Terminal};
use camino::Utf8Path;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use tracing::{info, warn};

pub const PROMPT_ENTRY: &str = "Do you wanna create a new folder in repos (y/n):";
pub const PROMPT_FOLDER_NAME: &str = "Enter name of the new folder :";
pub const PROMPT_FILENAME: &str = "Enter the name of your new file:";
pub const PROMPT_LANGUAGE: &str = "Choose your language. Enter 1 for Python, 2 for Javascript:";
pub const PROMPT_PYTHON_ENV: &str = "Wanna create a python env y/n :";
pub const PROMPT_ENV_NAME: &str = "What should we call your env? :";
pub const PROMPT_JS_PROJECT: &str = "whats your project called:";

/// Create a single directory, reporting failure. Returns whether it was created.
pub(crate) fn create_dir_reported(
    terminal: &mut dyn Terminal,
    session: &mut Session,
    path: &Utf8Path,
) -> bool {
    match fs::create_dir(path) {
        Ok(()) => {
            info!("Created directory {}", path);
            session.record(path);
            true
        }
        Err(e) => {
            warn!("Failed to create directory {}: {}", path, e);
            terminal.notify(Notice::Error(format!(
                "Failed to create directory {}: {}",
                path, e
            )));
            false
        }
    }
}

/// Create an empty file if absent, leaving an existing one untouched.
/// Returns whether a new file was created.
pub(crate) fn touch_reported(
    terminal: &mut dyn Terminal,
    session: &mut Session,
    path: &Utf8Path,
) -> bool {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            info!("Created file {}", path);
            session.record(path);
            true
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            terminal.notify(Notice::Info(format!("{} already exists, left as is", path)));
            false
        }
        Err(e) => {
            warn!("Failed to create file {}: {}", path, e);
            terminal.notify(Notice::Error(format!("Failed to create file {}: {}", path, e)));
            false
        }
    }
}

/// Enter `dir` if it is a directory. Returns whether the session moved.
pub(crate) fn enter_if_dir(session: &mut Session, dir: &Utf8Path) -> bool {
    if dir.is_dir() {
        session.enter(dir);
        true
    } else {
        warn!("{} is not a directory, staying in {}", dir, session.current_dir());
        false
    }
}
