//! Paddock CLI - farm and fence bookkeeping
//!
//! Usage: paddock [--as <TOKEN>] <COMMAND>
//!
//! Commands:
//!   account  Register owning accounts
//!   farm     Create, rename, delete and select farms
//!   fence    Draw, rename, delete and select fences
//!   repair   Activate sole fences and recount farm counters
//!   area     Compute the enclosed area of a boundary

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paddock::config::Config;
use paddock::presentation::{Cli, Commands, OutputFormat};

use commands::CommandContext;

fn main() {
    let cli = Cli::parse();

    // Config warnings are emitted before the real subscriber exists
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || {
        let cwd = std::env::current_dir().ok();
        Config::load_or_default(cwd.as_deref())
    });

    init_tracing(cli.verbose, &config.logging.filter);

    if let Err(err) = run(&cli, config) {
        eprintln!("error: {:#}", err);
        std::process::exit(commands::exit_code(&err));
    }
}

fn init_tracing(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
        1 => EnvFilter::new("paddock=debug"),
        _ => EnvFilter::new("paddock=trace"),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli, mut config: Config) -> Result<()> {
    match &cli.command {
        Commands::Area { points } => {
            commands::cmd_area(OutputFormat::from_json_flag(cli.json), points)
        }
        Commands::Repair { detach_orphans } => {
            config.repair.detach_orphans |= *detach_orphans;
            commands::cmd_repair(&CommandContext::new(cli, &config))
        }
        Commands::Account { command } => {
            commands::cmd_account(&CommandContext::new(cli, &config), command)
        }
        Commands::Farm { command } => {
            commands::cmd_farm(&CommandContext::new(cli, &config), command)
        }
        Commands::Fence { command } => {
            commands::cmd_fence(&CommandContext::new(cli, &config), command)
        }
    }
}
