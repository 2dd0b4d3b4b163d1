//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. Config file (~/.kickoff/config.yaml, or an explicit --config path)
//! 3. Environment variables (KICKOFF_* prefix)
//! 4. CLI flags ([`ConfigOverrides`])

use super::{KickoffConfig, PartialConfig, DEFAULT_CONFIG_YAML};
use crate::error::{Error, Result};
use crate::utils::default_config_path;
use camino::{Utf8Path, Utf8PathBuf};
use std::env;
use std::fs;
use tracing::debug;

/// Values supplied on the command line, highest precedence
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_dir: Option<Utf8PathBuf>,
    pub editor: Option<String>,
    pub python: Option<String>,
    pub filename_attempts: Option<u32>,
}

/// Configuration hierarchy loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Utf8PathBuf,
    /// An explicit path must exist; the default path is optional
    explicit: bool,
}

impl ConfigLoader {
    /// Create a loader for the default config path (~/.kickoff/config.yaml)
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: default_config_path()?,
            explicit: false,
        })
    }

    /// Create a loader for an explicit config file
    pub fn with_path(config_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            explicit: true,
        }
    }

    /// Create a loader from an optional `--config` argument
    pub fn from_arg(config_path: Option<&Utf8Path>) -> Result<Self> {
        match config_path {
            Some(path) => Ok(Self::with_path(path)),
            None => Self::new(),
        }
    }

    /// Get the config file path
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }

    /// Load the configuration with full precedence applied
    pub fn load(&self, overrides: &ConfigOverrides) -> Result<KickoffConfig> {
        let mut config = KickoffConfig::embedded()?;

        if self.config_path.exists() {
            debug!("Loading config file: {}", self.config_path);
            config = config.merge(self.load_file()?);
        } else if self.explicit {
            return Err(Error::config_not_found(self.config_path.as_str()));
        }

        config = Self::apply_env_overrides(config)?;
        Ok(Self::apply_cli_overrides(config, overrides))
    }

    /// Write the embedded defaults to the config path
    pub fn write_defaults(&self, force: bool) -> Result<&Utf8Path> {
        if self.config_path.exists() && !force {
            return Err(Error::invalid_config(format!(
                "File {} already exists. Use --force to overwrite.",
                self.config_path
            )));
        }

        if let Some(parent) = self.config_path.parent() {
            if !parent.as_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.config_path, DEFAULT_CONFIG_YAML)?;
        Ok(&self.config_path)
    }

    fn load_file(&self) -> Result<PartialConfig> {
        let content = fs::read_to_string(&self.config_path)?;

        // Comment-only files are valid and change nothing
        let has_content = content
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            return Ok(PartialConfig::default());
        }

        serde_yaml_ng::from_str(&content).map_err(|e| {
            Error::invalid_config(format!("Failed to parse {}: {}", self.config_path, e))
        })
    }

    fn apply_env_overrides(mut config: KickoffConfig) -> Result<KickoffConfig> {
        if let Some(val) = non_empty_var("KICKOFF_BASE_DIR") {
            config.base_dir = val;
        }

        if let Some(val) = non_empty_var("KICKOFF_EDITOR") {
            config.editor.command = val;
        }

        if let Some(val) = non_empty_var("KICKOFF_PYTHON") {
            config.python.interpreter = val;
        }

        if let Some(val) = non_empty_var("KICKOFF_FILENAME_ATTEMPTS") {
            config.filename_attempts = val.parse().map_err(|_| {
                Error::invalid_config("KICKOFF_FILENAME_ATTEMPTS must be a valid number")
            })?;
        }

        Ok(config)
    }

    fn apply_cli_overrides(mut config: KickoffConfig, overrides: &ConfigOverrides) -> KickoffConfig {
        if let Some(base_dir) = &overrides.base_dir {
            config.base_dir = base_dir.to_string();
        }
        if let Some(editor) = &overrides.editor {
            config.editor.command = editor.clone();
        }
        if let Some(python) = &overrides.python {
            config.python.interpreter = python.clone();
        }
        if let Some(attempts) = overrides.filename_attempts {
            config.filename_attempts = attempts;
        }
        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
