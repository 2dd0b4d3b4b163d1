//! Language selector

use super::PROMPT_LANGUAGE;
use crate::error::{Error, Result};
use crate::terminal::Terminal;
use crate::types::Language;

/// Ask for the language; anything but `1` or `2` is
/// [`Error::UnsupportedLanguage`], which ends the wizard.
pub fn select_language(terminal: &mut dyn Terminal) -> Result<Language> {
    let answer = terminal.ask(PROMPT_LANGUAGE)?;
    Language::from_token(&answer).ok_or_else(|| Error::unsupported_language(answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTerminal;

    #[test]
    fn test_supported_tokens() {
        let mut terminal = ScriptedTerminal::new(["1", "2"]);
        assert_eq!(select_language(&mut terminal).unwrap(), Language::Python);
        assert_eq!(select_language(&mut terminal).unwrap(), Language::JavaScript);
    }

    #[test]
    fn test_unsupported_token() {
        let mut terminal = ScriptedTerminal::new(["3"]);
        let err = select_language(&mut terminal).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage { ref token } if token == "3"));
        assert_eq!(err.to_string(), "Unsupported language. exiting");
    }
}
