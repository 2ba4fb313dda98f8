//! Path utilities for stakelord.
//!
//! All data lives under `~/.stakelord/`:
//! - `~/.stakelord/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the stakelord home directory (`~/.stakelord/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".stakelord")
}

/// Returns the default config file path (`~/.stakelord/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
