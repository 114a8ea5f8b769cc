//! Command dispatch.

pub mod housekeeping;
pub mod realms;

use std::io::Write;

use anyhow::Result;

use crate::cli::{Cli, Command};

/// Run the parsed command, writing its output to `out`.
pub async fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Housekeeping(args) => housekeeping::run(cli, args, out).await,
    }
}
