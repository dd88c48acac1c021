//! Shared application settings and path resolution.
//!
//! The settings file lives at `~/.config/quizboard/settings.toml` so the
//! CLI and the desktop frontend resolve the same library. The resolved
//! directories are created before they are handed out; the store and the
//! image cache treat them as pre-existing and writable.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Library root directory; `None` means the platform default.
    #[serde(default)]
    pub library_root: Option<PathBuf>,
}

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("quizboard").join("settings.toml")
}

/// Load the settings, falling back to defaults on a missing or
/// malformed file.
pub fn load() -> Settings {
    let Ok(contents) = std::fs::read_to_string(settings_path()) else {
        return Settings::default();
    };
    toml::from_str(&contents).unwrap_or_else(|err| {
        log::warn!("ignoring malformed settings file: {err}");
        Settings::default()
    })
}

/// Save the settings atomically (write to a temp file, then rename).
pub fn save(settings: &Settings) -> io::Result<()> {
    let path = settings_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &path)?;
    Ok(())
}

/// Resolve the library root using a priority chain and make sure the
/// directory exists:
///
/// 1. CLI override (if `Some`)
/// 2. `library_root` from the settings file
/// 3. `<data dir>/quizboard/library`
pub fn resolve_library_root(cli_override: Option<PathBuf>) -> io::Result<PathBuf> {
    let root = cli_override
        .or_else(|| load().library_root)
        .unwrap_or_else(|| {
            let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data.join("quizboard").join("library")
        });
    std::fs::create_dir_all(&root)?;
    Ok(root)
}

/// Resolve and create the temp directory for the content-addressed
/// image cache.
pub fn image_cache_dir() -> io::Result<PathBuf> {
    let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    let dir = base.join("quizboard").join("images");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
