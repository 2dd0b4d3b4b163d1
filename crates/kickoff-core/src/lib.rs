//! # kickoff-core
//!
//! Library behind the `kickoff` CLI:
//! - Layered configuration (embedded defaults, config file, env, flags)
//! - The interactive wizard: folder or file, Python env or JavaScript
//!   skeleton, editor launch
//! - Seams for user interaction ([`Terminal`]) and external tools
//!   ([`CommandRunner`])
//!
//! # Examples
//!
//! ```no_run
//! use kickoff_core::{ConfigLoader, ConfigOverrides, DuctRunner, LineTerminal, Wizard};
//!
//! # fn example() -> kickoff_core::Result<()> {
//! let config = ConfigLoader::new()?.load(&ConfigOverrides::default())?;
//! let stdin = std::io::stdin();
//! let mut terminal = LineTerminal::new(stdin.lock(), std::io::stdout());
//! let session = Wizard::new(&config).run(&mut terminal, &mut DuctRunner, "/tmp")?;
//! println!("ended in {}", session.current_dir());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod runner;
pub mod session;
pub mod steps;
pub mod terminal;
pub mod types;
pub mod utils;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigLoader, ConfigOverrides, KickoffConfig};
pub use error::{Error, Result};
pub use runner::{CommandRunner, DuctRunner, Invocation, InvocationOutcome};
pub use session::Session;
pub use terminal::{LineTerminal, Notice, Terminal};
pub use types::{EntryChoice, Language, RetryPolicy};
pub use wizard::Wizard;
