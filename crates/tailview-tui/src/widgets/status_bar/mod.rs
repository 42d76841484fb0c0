//! Status bar widget
//!
//! Displays connection state, byte progress, line count, scroll mode and
//! the position of the viewport.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tailview_app::state::AppState;
use tailview_core::ConnectionState;

use crate::theme::styles;

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Connection icon and label, with the close reason when there is one
    fn connection_indicator(&self) -> Span<'static> {
        let connection = self.state.connection_state();
        let (icon, label, style) = styles::connection_indicator(connection);
        let text = match connection {
            ConnectionState::Closed {
                reason: Some(reason),
            } => format!("{} {}: {}", icon, label, reason),
            _ => format!("{} {}", icon, label),
        };
        Span::styled(text, style)
    }

    fn progress(&self) -> Span<'static> {
        Span::styled(self.state.progress().display(), styles::text_secondary())
    }

    fn line_count(&self) -> Span<'static> {
        let count = self.state.buffer().len();
        let text = if count == 1 {
            "1 line".to_string()
        } else {
            format!("{} lines", count)
        };
        Span::styled(text, styles::text_secondary())
    }

    fn scroll_indicator(&self) -> Span<'static> {
        if self.state.auto_scroll.is_enabled() {
            Span::styled("⬇ Auto", Style::default().fg(Color::Green))
        } else {
            Span::styled("⬆ Manual", Style::default().fg(Color::Yellow))
        }
    }

    /// Visible rows and the window they sit in, e.g. `241-250/250 [150..250)`
    pub fn log_position(&self) -> String {
        let total = self.state.buffer().len();
        if total == 0 {
            return "0/0".to_string();
        }

        let (start, end) = self.state.viewport.visible_range();
        let window = self.state.viewport.window();
        let rows = if end > start {
            format!("{}-{}/{}", start + 1, end, total)
        } else {
            format!("-/{}", total)
        };
        format!("{} [{}..{})", rows, window.start, window.end())
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::text_muted());

        vec![
            Span::raw(" "),
            self.connection_indicator(),
            separator.clone(),
            self.progress(),
            separator.clone(),
            self.line_count(),
            separator,
            self.scroll_indicator(),
            Span::raw(" "),
            Span::styled(self.log_position(), styles::text_muted()),
            Span::raw(" "),
        ]
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border doubles as a separator from the logs
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments())).render(inner, buf);
    }
}
