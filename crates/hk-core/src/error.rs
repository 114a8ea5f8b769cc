//! Provisioning errors.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure while resolving the endpoint or minting the token.
///
/// Every variant is terminal for the invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// A required setting is missing or unusable.
    #[error("{0}")]
    Configuration(String),

    /// The private key file could not be read.
    #[error("failed to read housekeeping key {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key is malformed, not RSA, or signing failed.
    #[error("{context}")]
    Crypto {
        context: &'static str,
        #[source]
        source: jsonwebtoken::errors::Error,
    },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub(crate) fn crypto(context: &'static str) -> impl FnOnce(jsonwebtoken::errors::Error) -> Self {
        move |source| Self::Crypto { context, source }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_crypto(&self) -> bool {
        matches!(self, Self::Crypto { .. })
    }
}
