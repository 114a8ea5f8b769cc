//! Command line definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Command line client for the Astarte Housekeeping API
#[derive(Parser, Debug)]
#[command(name = "hkctl", author, version, about)]
pub struct Cli {
    /// Config file (defaults to <config dir>/hkctl/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Astarte API base URL
    #[arg(short = 'u', long = "astarte-url", env = "ASTARTE_URL", global = true)]
    pub astarte_url: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interact with Housekeeping API
    Housekeeping(HousekeepingArgs),
}

#[derive(Args, Debug)]
pub struct HousekeepingArgs {
    /// Path to housekeeping private key to generate JWT for authentication
    #[arg(
        short = 'k',
        long = "housekeeping-key",
        env = "ASTARTE_HOUSEKEEPING_KEY",
        value_name = "PATH",
        global = true
    )]
    pub key: Option<PathBuf>,

    /// Housekeeping API base URL. Defaults to <astarte-url>/housekeeping.
    #[arg(long = "housekeeping-url", env = "ASTARTE_HOUSEKEEPING_URL", global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: HousekeepingCommand,
}

#[derive(Subcommand, Debug)]
pub enum HousekeepingCommand {
    /// Manage realms
    Realms {
        #[command(subcommand)]
        command: RealmsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum RealmsCommand {
    /// List realms
    #[command(alias = "ls")]
    List,

    /// Show a realm
    Show {
        /// Realm name
        realm_name: String,
    },

    /// Create a realm
    Create {
        /// Realm name
        realm_name: String,

        /// Path to the realm's public key (PEM)
        #[arg(short = 'p', long, value_name = "PATH")]
        public_key: PathBuf,

        /// Replication factor for the realm keyspace
        #[arg(short = 'r', long)]
        replication_factor: Option<u32>,
    },
}
