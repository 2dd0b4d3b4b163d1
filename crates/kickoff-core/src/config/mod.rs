//! Configuration types and loading
//!
//! The resolved [`KickoffConfig`] comes from, in increasing precedence:
//! embedded defaults, the user config file, `KICKOFF_*` environment
//! variables and command-line overrides. See [`ConfigLoader`].

mod loader;

pub use loader::{ConfigLoader, ConfigOverrides};

use crate::error::Result;
use crate::types::RetryPolicy;
use crate::utils::expand_home;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Embedded default configuration
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../config/defaults.yaml");

/// Fully resolved kickoff configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KickoffConfig {
    /// Parent directory for new folders, `~/` is expanded
    pub base_dir: String,

    /// Invalid filenames tolerated, 0 for unbounded
    pub filename_attempts: u32,

    pub editor: EditorConfig,

    pub python: PythonConfig,

    pub javascript: JavaScriptConfig,
}

/// Editor launched as the final step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EditorConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PythonConfig {
    /// Program invoked as `<interpreter> -m venv <name>`
    pub interpreter: String,
    /// File created when no environment is requested
    pub entry_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JavaScriptConfig {
    pub skeleton_files: Vec<String>,
}

impl KickoffConfig {
    /// Parse the embedded defaults
    pub fn embedded() -> Result<Self> {
        Ok(serde_yaml_ng::from_str(DEFAULT_CONFIG_YAML)?)
    }

    /// Base directory with `~` expanded
    pub fn base_dir_path(&self) -> Result<Utf8PathBuf> {
        expand_home(&self.base_dir)
    }

    /// Retry policy for the filename loop
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::from_attempts(self.filename_attempts)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

/// Partial configuration as found in a user config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct PartialConfig {
    pub base_dir: Option<String>,
    pub filename_attempts: Option<u32>,
    pub editor: Option<PartialEditorConfig>,
    pub python: Option<PartialPythonConfig>,
    pub javascript: Option<PartialJavaScriptConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct PartialEditorConfig {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct PartialPythonConfig {
    pub interpreter: Option<String>,
    pub entry_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct PartialJavaScriptConfig {
    pub skeleton_files: Option<Vec<String>>,
}

impl KickoffConfig {
    /// Overlay the fields present in a partial config
    pub(crate) fn merge(mut self, overlay: PartialConfig) -> Self {
        if let Some(base_dir) = overlay.base_dir {
            self.base_dir = base_dir;
        }
        if let Some(attempts) = overlay.filename_attempts {
            self.filename_attempts = attempts;
        }
        if let Some(editor) = overlay.editor {
            if let Some(command) = editor.command {
                self.editor.command = command;
            }
            if let Some(args) = editor.args {
                self.editor.args = args;
            }
        }
        if let Some(python) = overlay.python {
            if let Some(interpreter) = python.interpreter {
                self.python.interpreter = interpreter;
            }
            if let Some(entry_file) = python.entry_file {
                self.python.entry_file = entry_file;
            }
        }
        if let Some(javascript) = overlay.javascript {
            if let Some(files) = javascript.skeleton_files {
                self.javascript.skeleton_files = files;
            }
        }
        self
    }
}
