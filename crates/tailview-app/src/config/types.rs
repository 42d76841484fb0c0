//! Configuration types for tailview
//!
//! Defines `Settings` (the `config.toml` file) and its sections.

use serde::{Deserialize, Serialize};

use tailview_core::prelude::*;
use tailview_core::{
    RowGeometry, DEFAULT_MAX_SCROLLABLE_HEIGHT_PX, DEFAULT_ROW_HEIGHT_PX, DEFAULT_TARGET_BYTES,
};
use tailview_transport::{validate_url, TransportConfig, DEFAULT_GREETING};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub stream: StreamSettings,

    #[serde(default)]
    pub viewport: ViewportSettings,

    #[serde(default)]
    pub progress: ProgressSettings,

    #[serde(default)]
    pub buffer: BufferSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Stream endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StreamSettings {
    /// `ws://` or `wss://` endpoint; usually given on the command line
    #[serde(default)]
    pub url: Option<String>,

    /// Text sent after connecting; empty disables the greeting
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            url: None,
            greeting: default_greeting(),
        }
    }
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

/// Row geometry and scrolling behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewportSettings {
    #[serde(default = "default_row_height_px")]
    pub row_height_px: u32,

    #[serde(default = "default_max_scrollable_height_px")]
    pub max_scrollable_height_px: u64,

    /// Follow new lines on startup
    #[serde(default = "default_true")]
    pub auto_scroll: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            row_height_px: default_row_height_px(),
            max_scrollable_height_px: default_max_scrollable_height_px(),
            auto_scroll: true,
        }
    }
}

fn default_row_height_px() -> u32 {
    DEFAULT_ROW_HEIGHT_PX
}

fn default_max_scrollable_height_px() -> u64 {
    DEFAULT_MAX_SCROLLABLE_HEIGHT_PX
}

/// Progress display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProgressSettings {
    #[serde(default = "default_target_bytes")]
    pub target_bytes: u64,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            target_bytes: default_target_bytes(),
        }
    }
}

fn default_target_bytes() -> u64 {
    DEFAULT_TARGET_BYTES
}

/// Line retention; unbounded unless `max_lines` is set
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BufferSettings {
    #[serde(default)]
    pub max_lines: Option<usize>,
}

/// Log view appearance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub show_timestamps: bool,

    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_timestamps: false,
            show_line_numbers: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Row geometry derived from the viewport section.
    ///
    /// Fails with `ConfigInvalid` for a zero row height or a scrollable
    /// limit smaller than one row.
    pub fn geometry(&self) -> Result<RowGeometry> {
        RowGeometry::new(
            self.viewport.row_height_px,
            self.viewport.max_scrollable_height_px,
        )
    }

    /// Configured stream URL, or `NoStreamUrl`
    pub fn stream_url(&self) -> Result<&str> {
        self.stream
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(Error::NoStreamUrl)
    }

    /// Transport configuration for the validated stream URL
    pub fn transport_config(&self) -> Result<TransportConfig> {
        let url = validate_url(self.stream_url()?)?;
        Ok(TransportConfig::new(url.as_str()).with_greeting(self.stream.greeting.clone()))
    }

    /// Check everything needed to start the viewer
    pub fn validate(&self) -> Result<()> {
        self.geometry()?;
        self.transport_config()?;
        if self.buffer.max_lines == Some(0) {
            return Err(Error::config_invalid("buffer.max_lines must be at least 1"));
        }
        Ok(())
    }
}
