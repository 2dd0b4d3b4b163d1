//! Folder creator

use super::{create_dir_reported, enter_if_dir, PROMPT_FOLDER_NAME};
use crate::error::Result;
use crate::session::Session;
use crate::terminal::{Notice, Terminal};
use camino::Utf8Path;

/// Create `<base_dir>/<name>` and make it the working directory
///
/// Creation failures are reported and the wizard goes on. The session ends
/// up in the new folder if it exists, else in `base_dir` if that exists,
/// else where it was.
pub fn create_folder(
    terminal: &mut dyn Terminal,
    session: &mut Session,
    base_dir: &Utf8Path,
) -> Result<()> {
    let name = terminal.ask(PROMPT_FOLDER_NAME)?;
    let target = base_dir.join(&name);

    if create_dir_reported(terminal, session, &target) {
        terminal.notify(Notice::Success(format!("Created folder {}", target)));
    }

    if !enter_if_dir(session, &target) && !enter_if_dir(session, base_dir) {
        terminal.notify(Notice::Warning(format!(
            "{} does not exist, continuing in {}",
            base_dir,
            session.current_dir()
        )));
    }

    Ok(())
}
