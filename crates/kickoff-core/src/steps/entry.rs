//! Entry prompt: folder or file

use super::PROMPT_ENTRY;
use crate::error::Result;
use crate::terminal::Terminal;
use crate::types::EntryChoice;
use tracing::debug;

/// Ask whether to create a folder; only an exact `y` means yes
pub fn ask_entry(terminal: &mut dyn Terminal) -> Result<EntryChoice> {
    let answer = terminal.ask(PROMPT_ENTRY)?;
    let choice = EntryChoice::from_token(&answer);
    debug!("Entry choice {:?} from {:?}", choice, answer);
    Ok(choice)
}
