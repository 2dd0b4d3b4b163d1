//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use kickoff_core::ConfigOverrides;

/// kickoff - create a folder or file, set up Python or JavaScript, open the editor
///
/// Run without a subcommand to start the interactive wizard.
#[derive(Parser, Debug)]
#[command(name = "kickoff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (default: ~/.kickoff/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Parent directory for new folders
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<Utf8PathBuf>,

    /// Editor command to open the result with
    #[arg(long, global = true, value_name = "COMMAND")]
    pub editor: Option<String>,

    /// Python interpreter used for `-m venv`
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Invalid filenames tolerated before giving up (0 = keep asking)
    #[arg(long, global = true, value_name = "N")]
    pub filename_attempts: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Flag values as the highest-precedence config layer
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_dir: self.base_dir.clone(),
            editor: self.editor.clone(),
            python: self.python.clone(),
            filename_attempts: self.filename_attempts,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show version information
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration file
    Init(ConfigInitArgs),

    /// Show resolved configuration
    Show(ConfigShowArgs),

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
