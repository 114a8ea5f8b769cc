//! hkctl - command line client for the Astarte Housekeeping API.
//!
//! The `housekeeping` command mints a short-lived token before running any
//! of its subcommands:
//! - realms list / show / create

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::Cli;
