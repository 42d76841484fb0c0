//! Configuration for tailview
//!
//! Supports:
//! - `<config dir>/tailview/config.toml` - Global settings
//! - Command-line overrides applied on top

pub mod priority;
pub mod settings;
pub mod types;

pub use priority::{merge_settings, SettingsOverrides};
pub use settings::{default_config_path, init_config_file, load_settings, read_settings};
pub use types::*;
