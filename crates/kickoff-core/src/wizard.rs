//! The full prompt sequence

use crate::config::KickoffConfig;
use crate::error::Result;
use crate::runner::CommandRunner;
use crate::session::Session;
use crate::steps::{
    ask_entry, create_file, create_folder, launch_editor, select_language, setup_javascript,
    setup_python,
};
use crate::terminal::Terminal;
use crate::types::{EntryChoice, Language};
use camino::Utf8PathBuf;
use tracing::{debug, info};

/// Runs entry, folder/file, language, setup and editor steps in order
pub struct Wizard<'a> {
    config: &'a KickoffConfig,
}

impl<'a> Wizard<'a> {
    pub fn new(config: &'a KickoffConfig) -> Self {
        Self { config }
    }

    /// Run the wizard starting in `start_dir`
    ///
    /// Returns the final session on every completed path. Errors are the
    /// fatal cases only: unsupported language, closed input, an exhausted
    /// filename policy, or an unresolvable base directory.
    pub fn run(
        &self,
        terminal: &mut dyn Terminal,
        runner: &mut dyn CommandRunner,
        start_dir: impl Into<Utf8PathBuf>,
    ) -> Result<Session> {
        let mut session = Session::new(start_dir);
        debug!("Starting wizard in {}", session.start_dir());

        match ask_entry(terminal)? {
            EntryChoice::Folder => {
                let base_dir = self.config.base_dir_path()?;
                create_folder(terminal, &mut session, &base_dir)?;
            }
            EntryChoice::File => {
                create_file(terminal, &mut session, self.config.retry_policy())?;
            }
        }

        let language = select_language(terminal)?;
        session.set_language(language);

        match language {
            Language::Python => setup_python(terminal, runner, &mut session, &self.config.python)?,
            Language::JavaScript => {
                setup_javascript(terminal, &mut session, &self.config.javascript)?
            }
        }

        launch_editor(runner, &session, &self.config.editor);

        info!(
            "Finished in {} with {} new artifact(s)",
            session.current_dir(),
            session.created().len()
        );
        Ok(session)
    }
}
