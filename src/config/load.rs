use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads the optional config file, then lets environment
/// variables (prefix `PLAYDECK__`) override it, and falls back to struct
/// defaults for anything left unset.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLAYDECK")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(50..=1000).contains(&self.ui.tick_ms) {
            return Err(format!(
                "ui.tick_ms must be within 50..=1000, got {}",
                self.ui.tick_ms
            ));
        }
        if self.audio.volume_step.is_nan() || self.audio.volume_step <= 0.0 {
            return Err("audio.volume_step must be > 0".to_string());
        }
        if self
            .library
            .extensions
            .iter()
            .all(|e| e.trim().trim_start_matches('.').is_empty())
        {
            return Err("library.extensions must name at least one extension".to_string());
        }
        Ok(())
    }

    /// Folder to load at startup: explicit argument, then `library.music_dir`,
    /// then `~/Music`.
    pub fn startup_dir(&self, arg: Option<String>) -> PathBuf {
        if let Some(a) = arg {
            return PathBuf::from(a);
        }
        if let Some(dir) = &self.library.music_dir {
            return dir.clone();
        }
        env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Music"))
            .unwrap_or_else(|| PathBuf::from("Music"))
    }
}

/// Resolve the config path from `PLAYDECK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLAYDECK_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/playdeck/config.toml`
/// or `~/.config/playdeck/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("playdeck").join("config.toml"))
}

/// Default log file under `$XDG_STATE_HOME/playdeck/` or
/// `~/.local/state/playdeck/`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("playdeck").join("playdeck.log"))
}
