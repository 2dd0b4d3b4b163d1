//! Editor launch

use crate::config::EditorConfig;
use crate::runner::{CommandRunner, Invocation, InvocationOutcome};
use crate::session::Session;
use tracing::debug;

/// Open the session's current directory in the editor. Best-effort: the
/// outcome is returned for logging only.
pub fn launch_editor(
    runner: &mut dyn CommandRunner,
    session: &Session,
    config: &EditorConfig,
) -> InvocationOutcome {
    let invocation = Invocation::new(
        config.command.as_str(),
        config.args.iter().map(String::as_str),
        session.current_dir(),
    );
    let outcome = runner.run(&invocation);
    debug!("Editor {} finished with {:?}", invocation, outcome);
    outcome
}
