//! The default command: the interactive kickoff wizard

use anyhow::{Context, Result};
use camino::Utf8Path;
use kickoff_core::{utils, ConfigLoader, ConfigOverrides, DuctRunner, Wizard};

use crate::terminal::ConsoleTerminal;

/// Load configuration and run the wizard from the current directory
pub fn run(overrides: &ConfigOverrides, config_path: Option<&Utf8Path>) -> Result<()> {
    let loader = ConfigLoader::from_arg(config_path)?;
    let config = loader
        .load(overrides)
        .with_context(|| format!("Failed to load configuration from {}", loader.config_path()))?;

    let start_dir = utils::current_dir().context("Failed to read current directory")?;

    let mut terminal = ConsoleTerminal::detect();
    let mut runner = DuctRunner;
    let session = Wizard::new(&config).run(&mut terminal, &mut runner, start_dir)?;

    for path in session.created() {
        tracing::info!("Created {}", path);
    }
    Ok(())
}
