//! Housekeeping JWT claims and minting.
//!
//! Tokens live for [`TOKEN_VALIDITY_SECS`] and are never written anywhere.
//! The server is responsible for rejecting expired ones.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::signer::{Rs256Signer, Signer};

/// Token lifetime in seconds.
pub const TOKEN_VALIDITY_SECS: i64 = 300;

/// Authorization pattern matching every path and every method.
pub const UNRESTRICTED_AUTHORIZATION: &str = "^.*$::^.*$";

/// JWT claims understood by the Housekeeping API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authorization patterns, `<path regex>::<method regex>`.
    pub a_ha: Vec<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Unrestricted claims issued at `iat`, expiring [`TOKEN_VALIDITY_SECS`] later.
    pub fn issued_at(iat: i64) -> Self {
        Self {
            a_ha: vec![UNRESTRICTED_AUTHORIZATION.to_string()],
            iat,
            exp: iat + TOKEN_VALIDITY_SECS,
        }
    }

    /// Replace the authorization patterns.
    pub fn with_authorization(mut self, patterns: Vec<String>) -> Self {
        self.a_ha = patterns;
        self
    }
}

/// A signed bearer token together with the claims it carries.
#[derive(Clone)]
pub struct Token {
    compact: String,
    claims: Claims,
}

impl Token {
    /// Compact JWS form.
    pub fn as_str(&self) -> &str {
        &self.compact
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.compact)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("compact", &"<redacted>")
            .field("claims", &self.claims)
            .finish()
    }
}

/// Sign `claims` with `signer`.
pub fn mint_token(signer: &dyn Signer, claims: Claims) -> Result<Token> {
    let compact = signer.sign(&claims)?;
    Ok(Token { compact, claims })
}

/// Mint a token from the configured key, issued now.
pub fn provision_token(settings: &Settings) -> Result<Token> {
    provision_token_at(settings, Utc::now().timestamp())
}

/// Mint a token from the configured key, issued at `now` (Unix seconds).
pub fn provision_token_at(settings: &Settings, now: i64) -> Result<Token> {
    let key_path = settings
        .key_path()
        .ok_or_else(|| Error::configuration("housekeeping-key is required"))?;

    let signer = Rs256Signer::from_pem_file(key_path)?;

    let mut claims = Claims::issued_at(now);
    if let Some(patterns) = settings.authorization() {
        claims = claims.with_authorization(patterns.to_vec());
    }

    let token = mint_token(&signer, claims)?;
    tracing::debug!(
        "Minted housekeeping token from {} (expires at {})",
        key_path.display(),
        token.expires_at()
    );
    Ok(token)
}
