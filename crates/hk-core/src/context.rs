//! Authenticated state shared with housekeeping subcommands.

use crate::endpoint::{resolve_endpoint, Endpoint};
use crate::error::Result;
use crate::settings::Settings;
use crate::token::{provision_token, Token};

/// Endpoint and token, both populated.
///
/// Only [`HousekeepingContext::authenticate`] (or an explicit [`new`](Self::new)
/// with already-minted parts) produces one, so a handler holding a context
/// never runs unauthenticated.
#[derive(Debug, Clone)]
pub struct HousekeepingContext {
    endpoint: Endpoint,
    token: Token,
}

impl HousekeepingContext {
    pub fn new(endpoint: Endpoint, token: Token) -> Self {
        Self { endpoint, token }
    }

    /// Pre-run hook: resolve the endpoint, then mint the token.
    ///
    /// Stops at the first failure; nothing is partially populated.
    pub fn authenticate(settings: &Settings) -> Result<Self> {
        let endpoint = resolve_endpoint(settings)?;
        let token = provision_token(settings)?;
        tracing::info!("Authenticated against housekeeping API at {}", endpoint);
        Ok(Self { endpoint, token })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}
