//! Core types for the kickoff wizard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which branch the entry prompt selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryChoice {
    /// Create a folder under the base directory
    Folder,
    /// Create a single file in the current directory
    File,
}

impl EntryChoice {
    /// Parse the entry token. Only the exact token `y` selects the folder path.
    pub fn from_token(token: &str) -> Self {
        if token == "y" {
            Self::Folder
        } else {
            Self::File
        }
    }
}

/// Language selected at the language prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python (token "1")
    Python,
    /// JavaScript (token "2")
    JavaScript,
}

impl Language {
    /// Parse the numeric language token, `None` for anything unsupported
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Python),
            "2" => Some(Self::JavaScript),
            _ => None,
        }
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How many invalid answers the filename loop tolerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Re-prompt forever
    #[default]
    Unbounded,
    /// Give up after this many invalid answers
    Bounded(u32),
}

impl RetryPolicy {
    /// Build a policy from a configured attempt count, `0` meaning unbounded
    pub fn from_attempts(attempts: u32) -> Self {
        if attempts == 0 {
            Self::Unbounded
        } else {
            Self::Bounded(attempts)
        }
    }

    /// Whether another attempt is allowed after `failures` invalid answers
    pub fn allows(&self, failures: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded(max) => failures < *max,
        }
    }
}
