//! Error types for kickoff-core

use thiserror::Error;

/// Result type alias using kickoff-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Kickoff error types
#[derive(Error, Debug)]
pub enum Error {
    /// Language token was neither "1" nor "2"
    #[error("Unsupported language. exiting")]
    UnsupportedLanguage { token: String },

    /// Standard input closed while a prompt was waiting
    #[error("input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Bounded filename loop ran out of attempts
    #[error("no valid filename after {attempts} attempt(s)")]
    RetriesExhausted { attempts: u32 },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Home directory could not be resolved
    #[error("Could not determine home directory")]
    HomeNotFound,

    /// Path is not valid UTF-8
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Interactive prompt failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unsupported language error
    pub fn unsupported_language(token: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            token: token.into(),
        }
    }

    /// Create an input closed error
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }
}
