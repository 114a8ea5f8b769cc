//! Settings layering: flags, then environment, then the config file.
//!
//! clap already folds the environment into the flag values, so only the
//! file layer is handled here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hk_core::{HousekeepingSettings, Settings};

use crate::cli::HousekeepingArgs;

/// Directory under the platform config dir.
pub const CONFIG_DIR: &str = "hkctl";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/hkctl/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the file layer.
///
/// An explicit path must exist. The default path is optional.
pub fn load_file_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return read_settings(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => read_settings(&path),
        _ => Ok(Settings::default()),
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let settings = Settings::from_toml_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Settings given on the command line or through the environment.
pub fn flag_settings(astarte_url: Option<&str>, args: &HousekeepingArgs) -> Settings {
    Settings {
        url: astarte_url.map(str::to_string),
        housekeeping: HousekeepingSettings {
            url: args.url.clone(),
            key: args.key.clone(),
            authorization: None,
        },
    }
}

/// Full settings for a housekeeping invocation.
pub fn resolve_settings(
    config: Option<&Path>,
    astarte_url: Option<&str>,
    args: &HousekeepingArgs,
) -> Result<Settings> {
    let file = load_file_settings(config)?;
    Ok(file.merge(flag_settings(astarte_url, args)))
}
