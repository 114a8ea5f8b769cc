//! Token signing backends.

use std::fmt;
use std::fs;
use std::path::Path;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::error::{Error, Result};
use crate::token::Claims;

/// Turns a claim set into a compact signed token.
pub trait Signer {
    fn sign(&self, claims: &Claims) -> Result<String>;
}

/// RS256 signer backed by an RSA private key.
pub struct Rs256Signer {
    key: EncodingKey,
}

impl Rs256Signer {
    /// Parse a PEM-encoded RSA private key (PKCS#1 or PKCS#8).
    pub fn from_pem(pem: &[u8]) -> Result<Self> {
        let key = EncodingKey::from_rsa_pem(pem)
            .map_err(Error::crypto("failed to parse housekeeping key as an RSA private key"))?;
        Ok(Self { key })
    }

    /// Read and parse the key file at `path`.
    pub fn from_pem_file(path: &Path) -> Result<Self> {
        let pem = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_pem(&pem)
    }
}

impl Signer for Rs256Signer {
    fn sign(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::RS256), claims, &self.key)
            .map_err(Error::crypto("failed to sign housekeeping token"))
    }
}

impl fmt::Debug for Rs256Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rs256Signer").finish_non_exhaustive()
    }
}
