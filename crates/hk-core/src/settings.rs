//! Settings consumed by the housekeeping command.
//!
//! Values arrive from flags, environment and an optional TOML file. An empty
//! string is never meaningful here, so it is treated exactly like an unset value.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level settings. `url` is the parent Astarte API base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub url: Option<String>,
    pub housekeeping: HousekeepingSettings,
}

/// The `[housekeeping]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HousekeepingSettings {
    /// Explicit API base URL, used verbatim when set.
    pub url: Option<String>,
    /// Path to the PEM-encoded RSA private key.
    pub key: Option<PathBuf>,
    /// Authorization patterns (`<path regex>::<method regex>`) placed in the token.
    pub authorization: Option<Vec<String>>,
}

impl Settings {
    /// Parse a TOML document. Keys are matched case-insensitively.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents)
            .map_err(|e| Error::configuration(format!("invalid config file: {e}")))?;

        toml::Value::Table(lowercase_keys(table))
            .try_into()
            .map_err(|e| Error::configuration(format!("invalid config file: {e}")))
    }

    /// Layer `overrides` on top of `self`. Unset or empty override values
    /// leave the current value in place.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            url: pick(overrides.url, self.url),
            housekeeping: HousekeepingSettings {
                url: pick(overrides.housekeeping.url, self.housekeeping.url),
                key: overrides
                    .housekeeping
                    .key
                    .filter(|p| !p.as_os_str().is_empty())
                    .or(self.housekeeping.key),
                authorization: overrides
                    .housekeeping
                    .authorization
                    .filter(|a| !a.is_empty())
                    .or(self.housekeeping.authorization),
            },
        }
    }

    /// Parent Astarte API base URL, if set and non-empty.
    pub fn parent_url(&self) -> Option<&str> {
        non_empty(self.url.as_deref())
    }

    /// Explicit housekeeping URL, if set and non-empty.
    pub fn housekeeping_url(&self) -> Option<&str> {
        non_empty(self.housekeeping.url.as_deref())
    }

    /// Private key path, if set and non-empty.
    pub fn key_path(&self) -> Option<&Path> {
        self.housekeeping
            .key
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Configured authorization patterns, if any.
    pub fn authorization(&self) -> Option<&[String]> {
        self.housekeeping
            .authorization
            .as_deref()
            .filter(|a| !a.is_empty())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn pick(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred.filter(|v| !v.is_empty()).or(fallback)
}

fn lowercase_keys(table: toml::Table) -> toml::Table {
    table
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                toml::Value::Table(inner) => toml::Value::Table(lowercase_keys(inner)),
                other => other,
            };
            (key.to_lowercase(), value)
        })
        .collect()
}
