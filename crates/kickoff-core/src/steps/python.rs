//! Python environment setup

use super::{enter_if_dir, touch_reported, PROMPT_ENV_NAME, PROMPT_PYTHON_ENV};
use crate::config::PythonConfig;
use crate::error::Result;
use crate::runner::{CommandRunner, Invocation, InvocationOutcome};
use crate::session::Session;
use crate::terminal::{Notice, Terminal};
use tracing::{info, warn};

/// Create a virtual environment on an exact `y`, otherwise an empty entry file
///
/// The venv tool is best-effort: its outcome is logged and the session
/// enters the environment directory only if it turned up.
pub fn setup_python(
    terminal: &mut dyn Terminal,
    runner: &mut dyn CommandRunner,
    session: &mut Session,
    config: &PythonConfig,
) -> Result<()> {
    let answer = terminal.ask(PROMPT_PYTHON_ENV)?;

    if answer != "y" {
        let entry = session.current_dir().join(&config.entry_file);
        if touch_reported(terminal, session, &entry) {
            terminal.notify(Notice::Success(format!("{} created", config.entry_file)));
        }
        return Ok(());
    }

    let env_name = terminal.ask(PROMPT_ENV_NAME)?;
    let invocation = Invocation::new(
        config.interpreter.as_str(),
        ["-m", "venv", env_name.as_str()],
        session.current_dir(),
    );

    match runner.run(&invocation) {
        InvocationOutcome::Succeeded => info!("Created virtual environment {}", env_name),
        outcome => warn!("{} finished with {:?}", invocation, outcome),
    }

    let env_dir = session.current_dir().join(&env_name);
    if enter_if_dir(session, &env_dir) {
        session.record(&env_dir);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KickoffConfig;
    use crate::testing::{assert_empty_file, utf8_temp_dir, RecordingRunner, ScriptedTerminal};

    fn python_config() -> PythonConfig {
        KickoffConfig::embedded().unwrap().python
    }

    #[test]
    fn test_no_env_creates_main_py() {
        let (dir, _temp) = utf8_temp_dir();
        let mut terminal = ScriptedTerminal::new(["n"]);
        let mut runner = RecordingRunner::new();
        let mut session = Session::new(&dir);

        setup_python(&mut terminal, &mut runner, &mut session, &python_config()).unwrap();

        assert_empty_file(&dir.join("main.py"));
        assert!(runner.invocations.is_empty());
        assert_eq!(terminal.prompts, vec![PROMPT_PYTHON_ENV]);
        assert_eq!(session.current_dir(), dir);
    }

    #[test]
    fn test_only_exact_y_creates_env() {
        let (dir, _temp) = utf8_temp_dir();
        let mut terminal = ScriptedTerminal::new(["Y"]);
        let mut runner = RecordingRunner::new();
        let mut session = Session::new(&dir);

        setup_python(&mut terminal, &mut runner, &mut session, &python_config()).unwrap();

        assert!(runner.invocations.is_empty());
        assert!(dir.join("main.py").exists());
    }

    #[test]
    fn test_env_invokes_venv_and_enters_it() {
        let (dir, _temp) = utf8_temp_dir();
        let mut terminal = ScriptedTerminal::new(["y", ".venv"]);
        let mut runner = RecordingRunner::materializing_venv();
        let mut session = Session::new(&dir);

        setup_python(&mut terminal, &mut runner, &mut session, &python_config()).unwrap();

        assert_eq!(
            runner.invocations,
            vec![Invocation::new("python3", ["-m", "venv", ".venv"], &dir)]
        );
        assert_eq!(terminal.prompts, vec![PROMPT_PYTHON_ENV, PROMPT_ENV_NAME]);
        assert_eq!(session.current_dir(), dir.join(".venv"));
        assert!(!dir.join("main.py").exists());
    }

    #[test]
    fn test_failed_venv_tool_is_ignored() {
        let (dir, _temp) = utf8_temp_dir();
        let mut terminal = ScriptedTerminal::new(["y", "env"]);
        let mut runner = RecordingRunner::failing();
        let mut session = Session::new(&dir);

        setup_python(&mut terminal, &mut runner, &mut session, &python_config()).unwrap();

        assert_eq!(runner.invocations.len(), 1);
        assert_eq!(session.current_dir(), dir);
        assert!(terminal.errors().is_empty());
    }

    #[test]
    fn test_custom_interpreter_and_entry_file() {
        let (dir, _temp) = utf8_temp_dir();
        let config = PythonConfig {
            interpreter: "python3.12".to_string(),
            entry_file: "app.py".to_string(),
        };

        let mut terminal = ScriptedTerminal::new(["n"]);
        let mut runner = RecordingRunner::new();
        let mut session = Session::new(&dir);
        setup_python(&mut terminal, &mut runner, &mut session, &config).unwrap();
        assert_empty_file(&dir.join("app.py"));

        let mut terminal = ScriptedTerminal::new(["y", "env"]);
        setup_python(&mut terminal, &mut runner, &mut session, &config).unwrap();
        assert_eq!(runner.invocations[0].program, "python3.12");
    }
}
