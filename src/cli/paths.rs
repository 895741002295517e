//! Path utilities for metaforge.
//!
//! All data lives under `~/.metaforge/`:
//! - `~/.metaforge/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the metaforge home directory (`~/.metaforge/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".metaforge")
}

/// Returns the default config file path (`~/.metaforge/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_metaforge_home() {
        let home = home_dir();
        let config = default_config();

        assert!(home.to_string_lossy().contains(".metaforge"));
        assert!(config.to_string_lossy().contains(".metaforge"));
        assert!(config.ends_with("config.toml"));
    }
}
