//! Shared path helpers

use crate::error::{Error, Result};
use camino::Utf8PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so tests and
/// containers can redirect it.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(Utf8PathBuf::from(home));
        }
    }

    let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
    Utf8PathBuf::from_path_buf(home).map_err(|p| Error::invalid_path(p.display().to_string()))
}

/// Expand a leading `~` against the home directory
pub fn expand_home(path: &str) -> Result<Utf8PathBuf> {
    if path == "~" {
        return get_home_dir();
    }
    match path.strip_prefix("~/") {
        Some(rest) => Ok(get_home_dir()?.join(rest)),
        None => Ok(Utf8PathBuf::from(path)),
    }
}

/// Get the kickoff configuration directory (~/.kickoff)
pub fn get_kickoff_dir() -> Result<Utf8PathBuf> {
    Ok(get_home_dir()?.join(".kickoff"))
}

/// Get the default config file path (~/.kickoff/config.yaml)
pub fn default_config_path() -> Result<Utf8PathBuf> {
    Ok(get_kickoff_dir()?.join("config.yaml"))
}

/// Current process directory as a UTF-8 path
pub fn current_dir() -> Result<Utf8PathBuf> {
    let dir = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(dir).map_err(|p| Error::invalid_path(p.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_home_dir_prefers_env() {
        let previous = std::env::var("HOME").ok();
        std::env::set_var("HOME", "/tmp/kickoff-home");
        assert_eq!(get_home_dir().unwrap(), Utf8PathBuf::from("/tmp/kickoff-home"));
        match previous {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }

    #[test]
    #[serial]
    fn test_expand_home() {
        let previous = std::env::var("HOME").ok();
        std::env::set_var("HOME", "/home/tester");
        assert_eq!(
            expand_home("~/desktop/repos").unwrap(),
            Utf8PathBuf::from("/home/tester/desktop/repos")
        );
        assert_eq!(expand_home("~").unwrap(), Utf8PathBuf::from("/home/tester"));
        assert_eq!(expand_home("/srv/repos").unwrap(), Utf8PathBuf::from("/srv/repos"));
        assert_eq!(expand_home("~other/x").unwrap(), Utf8PathBuf::from("~other/x"));
        match previous {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }
}
