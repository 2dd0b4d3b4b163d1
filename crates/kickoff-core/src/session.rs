//! Working-directory state threaded through the wizard

use crate::types::Language;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Explicit replacement for the process working directory
///
/// Every step reads `current_dir` and may move it; the process-wide
/// directory is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    start_dir: Utf8PathBuf,
    current_dir: Utf8PathBuf,
    created: Vec<Utf8PathBuf>,
    language: Option<Language>,
}

impl Session {
    pub fn new(start_dir: impl Into<Utf8PathBuf>) -> Self {
        let start_dir = start_dir.into();
        Self {
            current_dir: start_dir.clone(),
            start_dir,
            created: Vec::new(),
            language: None,
        }
    }

    /// Directory the wizard was started in
    pub fn start_dir(&self) -> &Utf8Path {
        &self.start_dir
    }

    pub fn current_dir(&self) -> &Utf8Path {
        &self.current_dir
    }

    /// Make `dir` the working directory for subsequent steps
    pub fn enter(&mut self, dir: impl Into<Utf8PathBuf>) {
        self.current_dir = dir.into();
        debug!("Working directory is now {}", self.current_dir);
    }

    /// Record a file or directory the wizard created
    pub fn record(&mut self, path: impl Into<Utf8PathBuf>) {
        self.created.push(path.into());
    }

    /// Artifacts created so far, in creation order
    pub fn created(&self) -> &[Utf8PathBuf] {
        &self.created
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }
}
