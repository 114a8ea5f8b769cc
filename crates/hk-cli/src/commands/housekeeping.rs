//! `housekeeping` command: authenticate, then run the subcommand.

use std::io::Write;

use anyhow::{Context, Result};
use hk_core::{HousekeepingContext, Settings};

use crate::cli::{Cli, HousekeepingArgs, HousekeepingCommand};
use crate::commands::realms;
use crate::config;

/// Runs before every housekeeping subcommand. No subcommand body executes
/// unless this returns a context.
pub fn pre_run(settings: &Settings) -> Result<HousekeepingContext> {
    HousekeepingContext::authenticate(settings).context("Housekeeping authentication failed")
}

pub async fn run(cli: &Cli, args: &HousekeepingArgs, out: &mut impl Write) -> Result<()> {
    let settings =
        config::resolve_settings(cli.config.as_deref(), cli.astarte_url.as_deref(), args)?;
    let ctx = pre_run(&settings)?;

    match &args.command {
        HousekeepingCommand::Realms { command } => realms::run(&ctx, command, out).await,
    }
}
