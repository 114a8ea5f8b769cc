//! Housekeeping core - settings, endpoint resolution and token provisioning.
//!
//! Everything a `housekeeping` command needs before it can talk to the API:
//! - resolve the API base URL from an explicit override or the parent Astarte URL
//! - mint a short-lived RS256 token from a PEM private key
//! - bundle both into a [`HousekeepingContext`] handed to subcommands

pub mod context;
pub mod endpoint;
pub mod error;
pub mod settings;
pub mod signer;
pub mod token;

pub use context::HousekeepingContext;
pub use endpoint::{resolve_endpoint, Endpoint};
pub use error::{Error, Result};
pub use settings::{HousekeepingSettings, Settings};
pub use signer::{Rs256Signer, Signer};
pub use token::{mint_token, provision_token, provision_token_at, Claims, Token};
