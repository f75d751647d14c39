//! Path utilities for copurchase.
//!
//! Local files live under `~/.copurchase/`:
//! - `~/.copurchase/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the copurchase home directory (`~/.copurchase/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".copurchase")
}

/// Returns the default config file path (`~/.copurchase/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_home() {
        assert!(default_config().starts_with(home_dir()));
        assert!(home_dir().to_string_lossy().contains(".copurchase"));
    }
}
