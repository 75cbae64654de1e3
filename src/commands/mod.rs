//! Command handlers
//!
//! One function per subcommand group. Handlers share a `CommandContext`
//! holding the wired engines, the output format and the acting account.

mod account;
mod farm;
mod fence;
mod repair;

use anyhow::{anyhow, Result};
use serde::Serialize;

use paddock::config::Config;
use paddock::domain::value_objects::ActingAccount;
use paddock::error::PaddockError;
use paddock::presentation::cli::ACCOUNT_ENV;
use paddock::presentation::factory::{create_file_engines, FileEngines};
use paddock::presentation::{Cli, OutputFormat};

pub use account::cmd_account;
pub use farm::cmd_farm;
pub use fence::cmd_fence;
pub use repair::{cmd_area, cmd_repair};

pub struct CommandContext {
    pub engines: FileEngines,
    pub format: OutputFormat,
    acting: Option<ActingAccount>,
}

impl CommandContext {
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            engines: create_file_engines(config, cli.store.as_deref()),
            format: OutputFormat::from_json_flag(cli.json),
            acting: cli.acting(),
        }
    }

    pub fn acting(&self) -> Result<&ActingAccount> {
        self.acting.as_ref().ok_or_else(|| {
            anyhow!(
                "no acting account; pass --as <TOKEN> or set {}",
                ACCOUNT_ENV
            )
        })
    }

    /// Print `value` in the selected format
    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        println!("{}", self.format.render(value, text)?);
        Ok(())
    }
}

/// Process exit code for a failed command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PaddockError>() {
        Some(PaddockError::InvalidInput(_)) => 2,
        Some(PaddockError::NotFound { .. }) => 3,
        Some(PaddockError::Conflict { .. }) => 4,
        Some(PaddockError::IntegrityViolation(_)) => 5,
        Some(PaddockError::Unavailable(_)) | Some(PaddockError::Store(_)) => 6,
        None => 1,
    }
}
