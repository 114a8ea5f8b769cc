//! SDK errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    /// The API answered with a non-success status.
    #[error("housekeeping API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Realm names travel as a single path segment; these cannot.
    #[error("invalid realm name {0:?}")]
    InvalidRealmName(String),

    /// The endpoint cannot be turned into a request URL.
    #[error("invalid housekeeping URL {0}")]
    InvalidUrl(String),

    /// Transport failure or an undecodable response.
    #[error("housekeeping API request failed")]
    Http(#[from] reqwest::Error),
}
