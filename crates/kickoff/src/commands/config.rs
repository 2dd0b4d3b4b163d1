//! Config command

use anyhow::{Context, Result};
use camino::Utf8Path;
use kickoff_core::{ConfigLoader, ConfigOverrides};

use crate::cli::{ConfigCommands, ConfigInitArgs, ConfigShowArgs};
use crate::output;

pub fn run(
    cmd: ConfigCommands,
    overrides: &ConfigOverrides,
    config_path: Option<&Utf8Path>,
) -> Result<()> {
    let loader = ConfigLoader::from_arg(config_path)?;

    match cmd {
        ConfigCommands::Init(args) => init(&loader, args),
        ConfigCommands::Show(args) => show(&loader, overrides, args),
        ConfigCommands::Path => {
            println!("{}", loader.config_path());
            Ok(())
        }
    }
}

fn init(loader: &ConfigLoader, args: ConfigInitArgs) -> Result<()> {
    let path = loader.write_defaults(args.force)?;

    output::success(&format!("Created {}", path));
    output::kv("Edit", "base-dir, editor, python and javascript settings");
    Ok(())
}

fn show(loader: &ConfigLoader, overrides: &ConfigOverrides, args: ConfigShowArgs) -> Result<()> {
    let config = loader
        .load(overrides)
        .with_context(|| format!("Failed to load configuration from {}", loader.config_path()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_yaml()?);
    }

    Ok(())
}
