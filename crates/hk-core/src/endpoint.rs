//! Housekeeping API base URL resolution.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Path segment appended to the parent Astarte URL.
pub const HOUSEKEEPING_PATH: &str = "housekeeping";

/// Resolved Housekeeping API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an API path onto the base URL with exactly one `/` between them.
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.0
    }
}

/// Pick the Housekeeping API base URL.
///
/// An explicit `housekeeping.url` is used verbatim. Otherwise `housekeeping`
/// is appended to the parent `url`. With neither set this is a configuration
/// error.
pub fn resolve_endpoint(settings: &Settings) -> Result<Endpoint> {
    if let Some(url) = settings.housekeeping_url() {
        tracing::debug!("Using explicit housekeeping URL {}", url);
        return Ok(Endpoint(url.to_string()));
    }

    if let Some(parent) = settings.parent_url() {
        let joined = append_housekeeping(parent)?;
        tracing::debug!("Derived housekeeping URL {} from {}", joined, parent);
        return Ok(Endpoint(joined));
    }

    Err(Error::configuration(
        "Either astarte-url or housekeeping-url have to be specified",
    ))
}

fn append_housekeeping(parent: &str) -> Result<String> {
    let mut url = Url::parse(parent)
        .map_err(|e| Error::configuration(format!("invalid astarte-url {parent:?}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(Error::configuration(format!(
            "invalid astarte-url {parent:?}: URL cannot carry a path"
        )));
    }

    let mut path = String::new();
    for segment in url
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .chain(std::iter::once(HOUSEKEEPING_PATH))
    {
        path.push('/');
        path.push_str(segment);
    }
    url.set_path(&path);

    Ok(url.into())
}
