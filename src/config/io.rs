use super::models::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load the config from disk, falling back to defaults if the file is
/// missing or unreadable.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(raw) => parse_config(&raw),
        Err(err) => {
            info!(path = %path.display(), "No config file ({err}); using defaults");
            AppConfig::default()
        }
    }
}

/// Parse TOML into an `AppConfig`. Invalid TOML yields defaults rather than
/// aborting startup; individual missing keys are filled by serde defaults.
pub fn parse_config(raw: &str) -> AppConfig {
    match toml::from_str(raw) {
        Ok(config) => config,
        Err(err) => {
            warn!("Invalid config file: {err}; using defaults");
            AppConfig::default()
        }
    }
}

pub fn serialize_config(config: &AppConfig) -> String {
    toml::to_string_pretty(config).unwrap_or_default()
}

/// Persist the config back to disk. Best effort; a failure is logged and the
/// session continues with the in-memory settings.
pub fn save_config(path: &Path, config: &AppConfig) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %path.display(), "Failed to create config directory: {err}");
            return;
        }
    }
    if let Err(err) = fs::write(path, serialize_config(config)) {
        warn!(path = %path.display(), "Failed to save config: {err}");
    }
}
