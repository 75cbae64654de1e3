//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --store, --as, --role, --verbose) are inherited by all subcommands
//! - The acting account comes from `--as`, falling back to `PADDOCK_ACCOUNT`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{ActingAccount, Role};

/// Environment variable naming the acting account when `--as` is absent
pub const ACCOUNT_ENV: &str = "PADDOCK_ACCOUNT";

/// Paddock - farm and fence bookkeeping
#[derive(Parser, Debug)]
#[command(name = "paddock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Store file (overrides config and PADDOCK_STORE_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Acting account token
    #[arg(long = "as", global = true, value_name = "TOKEN")]
    pub account: Option<String>,

    /// Role of the acting account (farmer or developer)
    #[arg(long, global = true, default_value = "farmer")]
    pub role: Role,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The acting account from `--as` or `PADDOCK_ACCOUNT`
    pub fn acting(&self) -> Option<ActingAccount> {
        self.account
            .clone()
            .or_else(|| std::env::var(ACCOUNT_ENV).ok())
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .map(|token| ActingAccount::new(token, self.role))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register owning accounts
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },

    /// Create, rename, delete and select farms
    Farm {
        #[command(subcommand)]
        command: FarmCommands,
    },

    /// Draw, rename, delete and select fences
    Fence {
        #[command(subcommand)]
        command: FenceCommands,
    },

    /// Activate sole fences, recount farm counters and report orphans
    Repair {
        /// Clear the farm reference of fences whose farm was deleted
        #[arg(long)]
        detach_orphans: bool,
    },

    /// Compute the enclosed area of a boundary ("x,y;x,y;...")
    Area {
        #[arg(allow_hyphen_values = true)]
        points: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Register an account
    Add {
        /// Account token
        token: String,

        /// Role of the new account
        #[arg(long = "account-role", default_value = "farmer")]
        account_role: Role,

        /// Managing developer token
        #[arg(long)]
        developer: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FarmCommands {
    /// Create a farm (named "farmN" when no name is given)
    Create {
        name: Option<String>,

        /// Opaque location descriptor
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        gps: String,

        /// Pick a free suffixed name instead of failing on a collision
        #[arg(long)]
        auto_rename: bool,
    },

    /// Rename a farm
    Rename { farm: String, name: String },

    /// Replace a farm's location descriptor
    Locate {
        farm: String,
        #[arg(allow_hyphen_values = true)]
        gps: String,
    },

    /// Delete a farm, releasing or transferring its cows
    Delete {
        farm: String,

        /// Farm that receives the deleted farm's cows
        #[arg(long, value_name = "FARM")]
        transfer_to: Option<String>,
    },

    /// Mark one farm as selected and clear the rest
    Select { farm: String },

    /// Mark every owned farm as selected
    SelectAll,

    /// List owned farms
    List,
}

#[derive(Subcommand, Debug)]
pub enum FenceCommands {
    /// Draw a fence (named "fenceN" when no name is given)
    Create {
        name: Option<String>,

        /// Farm to place the fence on
        #[arg(long)]
        farm: Option<String>,

        /// Boundary as "x,y;x,y;x,y"
        #[arg(long, allow_hyphen_values = true)]
        points: String,

        /// Pick a free suffixed name instead of failing on a collision
        #[arg(long)]
        auto_rename: bool,
    },

    /// Rename a fence
    Rename { fence: String, name: String },

    /// Delete a fence
    Delete { fence: String },

    /// Make a fence the active one, optionally moving it to a farm
    Select {
        fence: String,

        #[arg(long)]
        farm: Option<String>,
    },

    /// List owned fences
    List {
        /// Only fences on this farm
        #[arg(long)]
        farm: Option<String>,
    },
}
