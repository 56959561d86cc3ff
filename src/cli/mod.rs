//! Command-line interface for `sac_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.
//! Parsing happens once into a tagged command; there is no token
//! scanning, so trailing arguments after a sub-command are a usage error
//! rather than silently ignored.

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::logging;
use crate::{Config, UserContext};

/// `sac_rust` (sac) - Layered configuration tool.
#[derive(Parser, Debug)]
#[command(name = "sac")]
#[command(
    author,
    version,
    about = "Layered key-value configuration tool (home + per-directory overrides)",
    long_about = None,
    after_help = "Session-only: set/delete mutations are not written back to disk."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the local override file and recompute the effective configuration
    Init,

    /// Read/write the effective configuration
    Config(ConfigCommand),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<ConfigSubcommand>,
}

/// Sub-commands operating on the effective (user) mapping.
///
/// Positional arguments are optional at the parser level; presence is
/// checked by the handler so incomplete invocations surface as reported,
/// recoverable errors rather than usage aborts.
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Set a config value
    Set {
        /// Configuration key
        key: Option<String>,
        /// Value to store (empty unsets the key at the next resolve)
        value: Option<String>,
    },

    /// Get a config value
    Get {
        /// Configuration key
        key: Option<String>,
    },

    /// Delete a config value
    Delete {
        /// Configuration key
        key: Option<String>,
    },

    /// List config values
    List,

    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Run the CLI.
///
/// Loads the global source and resolves the effective configuration
/// before dispatch; the override source is only loaded by `init`.
///
/// # Errors
///
/// Returns an error if startup loading fails or a command hits a fatal
/// (non-recoverable) condition.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let mut config = Config::default();
    config.load_global()?;
    config.resolve();

    let user = UserContext::from_mapping(config.user())?;
    debug!(
        name = %user.name,
        email = %user.email,
        racks = user.racks.len(),
        bags = user.bags.len(),
        "user context ready"
    );

    if let Some(ref command) = cli.command {
        debug!(command = command.name(), "dispatching command");
    }

    match cli.command {
        Some(Commands::Init) => commands::init::execute(&mut config)?,
        Some(Commands::Config(ref cmd)) => {
            if let Err(e) = commands::config::execute(cmd, &mut config, cli.json) {
                if e.is_recoverable() {
                    println!("Error: {e}");
                } else {
                    return Err(e.into());
                }
            }
        }
        Some(Commands::Version) => println!("sac {}", env!("CARGO_PKG_VERSION")),
        None => println!("sac - layered configuration tool. Use --help for usage."),
    }

    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Config(config) => match config.command {
                Some(ConfigSubcommand::Set { .. }) => "config set",
                Some(ConfigSubcommand::Get { .. }) => "config get",
                Some(ConfigSubcommand::Delete { .. }) => "config delete",
                Some(ConfigSubcommand::List) => "config list",
                Some(ConfigSubcommand::Other(_)) | None => "config",
            },
            Self::Version => "version",
        }
    }
}
