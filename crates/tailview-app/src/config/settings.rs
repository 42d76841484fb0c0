//! Settings file loading
//!
//! The settings file lives at `<config dir>/tailview/config.toml` unless a
//! path is given explicitly. A missing file means defaults; a broken file is
//! reported with a warning and also falls back to defaults.

use std::path::{Path, PathBuf};

use tailview_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "tailview";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG_CONTENT: &str = r#"# tailview configuration

[stream]
# WebSocket endpoint of the log stream (ws:// or wss://).
# The URL given on the command line takes precedence.
# url = "ws://localhost:8080/logs"

# Sent once after connecting. An empty string sends nothing.
greeting = "Hello Server!"

[viewport]
# Abstract height of one row. Window math runs in these units.
row_height_px = 32

# Largest scrollable extent the viewport may report.
# At most max_scrollable_height_px / row_height_px rows are addressable at once.
max_scrollable_height_px = 33554400

# Follow new lines as they arrive (toggle with 'a').
auto_scroll = true

[progress]
# Byte count shown as 100% in the status bar.
target_bytes = 10485760

[buffer]
# Keep at least this many of the newest lines; older ones are dropped.
# Unset keeps every line.
# max_lines = 1000000

[ui]
show_timestamps = false
show_line_numbers = true
"#;

/// Default settings file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// Never fails: problems are logged and defaults are used.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No platform config directory, using default settings");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Read and parse a settings file, surfacing every failure
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let settings: Settings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(settings)
}

/// Write the commented default settings file to `path`.
///
/// An existing file is left untouched. Returns the path written (or kept).
pub fn init_config_file(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        info!("Config file already exists at {:?}", path);
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_CONTENT)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);

    Ok(path.to_path_buf())
}
