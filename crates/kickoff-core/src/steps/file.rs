//! File creator with the filename validation loop

use super::{touch_reported, PROMPT_FILENAME};
use crate::error::{Error, Result};
use crate::session::Session;
use crate::terminal::{Notice, Terminal};
use crate::types::RetryPolicy;
use camino::Utf8PathBuf;
use tracing::debug;

/// A filename is accepted once it contains a `.`
pub fn is_valid_filename(name: &str) -> bool {
    name.contains('.')
}

/// Prompt until a filename with an extension is given, then create it empty
/// in the session's current directory.
///
/// Invalid answers create nothing. With [`RetryPolicy::Unbounded`] the loop
/// only ends on a valid name or closed input.
pub fn create_file(
    terminal: &mut dyn Terminal,
    session: &mut Session,
    policy: RetryPolicy,
) -> Result<Utf8PathBuf> {
    let mut failures = 0u32;

    let filename = loop {
        let answer = terminal.ask(PROMPT_FILENAME)?;
        if is_valid_filename(&answer) {
            break answer;
        }

        terminal.notify(Notice::Warning(format!(
            "invalid filename {}. Please add ext or file type",
            answer
        )));
        failures = failures.saturating_add(1);
        debug!("Rejected filename {:?} ({} so far)", answer, failures);

        if !policy.allows(failures) {
            return Err(Error::RetriesExhausted { attempts: failures });
        }
    };

    let path = session.current_dir().join(&filename);
    if touch_reported(terminal, session, &path) {
        terminal.notify(Notice::Success(format!("{} created", filename)));
    }
    Ok(path)
}
