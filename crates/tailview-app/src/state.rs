//! Application state (Model in TEA pattern)
//!
//! `AppState` is the single context object holding the buffer, the viewport
//! and the connection state. It is owned by the [`Engine`](crate::Engine)
//! and mutated only by `handler::update`.

use tailview_core::prelude::*;
use tailview_core::{ConnectionState, LogBuffer, Progress, RowGeometry};

use crate::auto_scroll::AutoScrollController;
use crate::config::{Settings, UiSettings};
use crate::ingester::{IngestOutcome, StreamIngester};
use crate::viewport_state::ViewportState;
use tailview_transport::TransportConfig;

/// Whether the viewer is running or on its way out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Endpoint shown in the header
    pub stream_url: String,

    pub ingester: StreamIngester,

    pub viewport: ViewportState,

    pub auto_scroll: AutoScrollController,

    pub ui: UiSettings,

    /// Where to connect; `None` until a valid URL is configured
    pub transport_config: Option<TransportConfig>,

    /// Whether a transport task has been started
    pub transport_started: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default settings and no URL (for tests)
    pub fn new() -> Self {
        let settings = Settings::default();
        Self::build(RowGeometry::default(), &settings)
    }

    /// State for validated `settings`
    pub fn with_settings(settings: &Settings) -> Result<Self> {
        let geometry = settings.geometry()?;
        Ok(Self::build(geometry, settings))
    }

    fn build(geometry: RowGeometry, settings: &Settings) -> Self {
        let buffer = match settings.buffer.max_lines {
            Some(max_lines) => LogBuffer::with_retention(max_lines),
            None => LogBuffer::new(),
        };

        Self {
            phase: AppPhase::Running,
            stream_url: settings.stream.url.clone().unwrap_or_default(),
            ingester: StreamIngester::with_buffer(buffer, settings.progress.target_bytes),
            viewport: ViewportState::new(geometry),
            auto_scroll: AutoScrollController::new(settings.viewport.auto_scroll),
            ui: settings.ui.clone(),
            transport_config: settings.transport_config().ok(),
            transport_started: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn buffer(&self) -> &LogBuffer {
        self.ingester.buffer()
    }

    pub fn connection_state(&self) -> &ConnectionState {
        self.ingester.connection_state()
    }

    pub fn progress(&self) -> Progress {
        self.ingester.progress()
    }

    /// Append a line directly, as if it had arrived on the stream.
    ///
    /// Returns the new length, or `None` if the connection is not open.
    pub fn ingest(&mut self, text: impl Into<String>) -> Option<usize> {
        let len = self.ingester.on_message(text)?;
        self.after_append();
        Some(len)
    }

    /// Apply an ingest result to the viewport
    pub(crate) fn apply_outcome(&mut self, outcome: &IngestOutcome) {
        if let IngestOutcome::Appended(_) = outcome {
            self.after_append();
        }
    }

    fn after_append(&mut self) {
        let buffer = self.ingester.buffer();
        let (total, first) = (buffer.len(), buffer.first_index());
        self.auto_scroll.on_append(&mut self.viewport, total, first);
    }

    /// Flip auto-scroll; enabling it bottom-anchors the window at once.
    pub fn toggle_auto_scroll(&mut self) -> bool {
        let enabled = self.auto_scroll.toggle();
        if enabled {
            self.viewport.scroll_to_bottom();
        }
        debug!("Auto-scroll {}", if enabled { "enabled" } else { "disabled" });
        enabled
    }
}
