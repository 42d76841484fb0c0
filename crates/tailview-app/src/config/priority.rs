//! Command-line overrides layered over the settings file
//!
//! Priority order, highest first:
//! 1. Command-line flags
//! 2. `config.toml`
//! 3. Built-in defaults

use super::types::Settings;

/// Values given on the command line; `None` leaves the file value alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub url: Option<String>,
    pub greeting: Option<String>,
    pub row_height_px: Option<u32>,
    pub max_scrollable_height_px: Option<u64>,
    pub target_bytes: Option<u64>,
    pub max_lines: Option<usize>,
    /// `--no-auto-scroll`
    pub disable_auto_scroll: bool,
}

impl SettingsOverrides {
    /// Apply every override that is set
    pub fn apply(self, settings: &mut Settings) {
        if let Some(url) = self.url {
            settings.stream.url = Some(url);
        }
        if let Some(greeting) = self.greeting {
            settings.stream.greeting = greeting;
        }
        if let Some(row_height_px) = self.row_height_px {
            settings.viewport.row_height_px = row_height_px;
        }
        if let Some(max_px) = self.max_scrollable_height_px {
            settings.viewport.max_scrollable_height_px = max_px;
        }
        if let Some(target_bytes) = self.target_bytes {
            settings.progress.target_bytes = target_bytes;
        }
        if let Some(max_lines) = self.max_lines {
            settings.buffer.max_lines = Some(max_lines);
        }
        if self.disable_auto_scroll {
            settings.viewport.auto_scroll = false;
        }
    }
}

/// Settings with overrides applied
pub fn merge_settings(mut settings: Settings, overrides: SettingsOverrides) -> Settings {
    overrides.apply(&mut settings);
    settings
}
