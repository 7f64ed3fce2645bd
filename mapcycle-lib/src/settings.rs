//! Default filter switches from `~/.config/mapcycle-gen/settings.toml`.
//!
//! ```toml
//! [filter]
//! halloween = true
//! no_duplicates = true
//! ```
//!
//! Keys left out keep their built-in defaults. Command-line flags are
//! applied on top of whatever this file sets.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::options::GeneratorOptions;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    filter: GeneratorOptions,
}

/// Canonical path to the settings file: `~/.config/mapcycle-gen/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mapcycle-gen").join("settings.toml")
}

/// Read filter defaults from `path`. A missing file gives the built-in
/// defaults.
pub fn load_settings_from(path: &Path) -> Result<GeneratorOptions, SettingsError> {
    if !path.exists() {
        return Ok(GeneratorOptions::default());
    }
    let contents = std::fs::read_to_string(path)?;
    let settings: SettingsFile = toml::from_str(&contents)?;
    Ok(settings.filter)
}

/// Read filter defaults from [`settings_path`], warning and falling back
/// to the built-in defaults if the file is unreadable.
pub fn load_settings() -> GeneratorOptions {
    let path = settings_path();
    load_settings_from(&path).unwrap_or_else(|e| {
        log::warn!("Ignoring {}: {e}", path.display());
        GeneratorOptions::default()
    })
}
