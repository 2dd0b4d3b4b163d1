//! JavaScript project skeleton

use super::{create_dir_reported, enter_if_dir, touch_reported, PROMPT_JS_PROJECT};
use crate::config::JavaScriptConfig;
use crate::error::Result;
use crate::session::Session;
use crate::terminal::{Notice, Terminal};

/// Create `<name>/` with empty skeleton files and enter it
pub fn setup_javascript(
    terminal: &mut dyn Terminal,
    session: &mut Session,
    config: &JavaScriptConfig,
) -> Result<()> {
    let name = terminal.ask(PROMPT_JS_PROJECT)?;
    let project_dir = session.current_dir().join(&name);

    create_dir_reported(terminal, session, &project_dir);
    enter_if_dir(session, &project_dir);

    for file in &config.skeleton_files {
        let path = session.current_dir().join(file);
        touch_reported(terminal, session, &path);
    }

    terminal.notify(Notice::Success(format!(
        "JavaScript project {} created with {}",
        name,
        config.skeleton_files.join(", ")
    )));
    Ok(())
}
