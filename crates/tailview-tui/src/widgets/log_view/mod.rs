//! Log view widget
//!
//! Renders the rows of the current window. Only the rows on screen are
//! read from the buffer, so drawing costs the same for ten lines or ten
//! million.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use tailview_app::viewport_state::ViewportState;
use tailview_core::prelude::*;
use tailview_core::{ConnectionState, LogBuffer, LogLine};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles as theme;

/// Row styling constants
pub mod styles;

/// Log view widget
pub struct LogView<'a> {
    buffer: &'a LogBuffer,
    connection: &'a ConnectionState,
    show_timestamps: bool,
    show_line_numbers: bool,
}

impl<'a> LogView<'a> {
    pub fn new(buffer: &'a LogBuffer, connection: &'a ConnectionState) -> Self {
        Self {
            buffer,
            connection,
            show_timestamps: false,
            show_line_numbers: true,
        }
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Format one row, truncated to `width` columns
    pub fn format_row(&self, index: usize, line: &LogLine, width: usize) -> Line<'static> {
        let mut spans = Vec::with_capacity(3);
        let mut remaining = width;

        if self.show_line_numbers {
            let number = truncate_to_width(&format!("{} ", index + 1), remaining);
            remaining -= number.width();
            spans.push(Span::styled(number, styles::LINE_NUMBER));
        }

        if self.show_timestamps && remaining > 0 {
            let time = truncate_to_width(&format!("{} ", line.formatted_time()), remaining);
            remaining -= time.width();
            spans.push(Span::styled(time, styles::TIMESTAMP));
        }

        if remaining > 0 {
            spans.push(Span::styled(
                truncate_to_width(line.text(), remaining),
                styles::TEXT,
            ));
        }

        Line::from(spans)
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let (title, detail) = match self.connection {
            ConnectionState::Connecting => ("Connecting", "Waiting for the stream to open"),
            ConnectionState::Open | ConnectionState::Receiving => {
                ("No lines yet", "Waiting for messages")
            }
            ConnectionState::Closed { .. } => ("Stream closed", "No lines were received"),
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(title, styles::EMPTY_TITLE)),
            Line::from(""),
            Line::from(Span::styled(detail, styles::EMPTY_DETAIL)),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    /// Thumb position follows the visible rows within every retained line,
    /// not within the current window.
    fn render_scrollbar(&self, area: Rect, buf: &mut Buffer, state: &ViewportState) {
        let first = state.first_index();
        let retained = state.total() - first;
        let (start, end) = state.visible_range();
        if end - start >= retained {
            return;
        }

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        let max_top = retained - (end - start);
        let mut scrollbar_state = ScrollbarState::new(max_top + 1).position(start - first);

        scrollbar.render(area, buf, &mut scrollbar_state);
    }
}

impl StatefulWidget for LogView<'_> {
    type State = ViewportState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(" Logs ({}) ", self.buffer.len());
        let block = theme::glass_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        // The measured height feeds the pixel model and runs any pending scroll
        state.update_viewport_size(usize::from(inner.height));

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.buffer.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        // Last column is reserved for the scrollbar
        let text_width = usize::from(inner.width.saturating_sub(1));
        let (start, end) = state.visible_range();

        for (row, index) in (start..end).enumerate() {
            let line = match self.buffer.get(index) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Skipping row {}: {}", index, e);
                    continue;
                }
            };
            let row_area = Rect {
                x: inner.x,
                y: inner.y + row as u16,
                width: inner.width.saturating_sub(1),
                height: 1,
            };
            self.format_row(index, line, text_width)
                .render(row_area, buf);
        }

        self.render_scrollbar(inner, buf, state);
    }
}

/// Cut `text` to at most `width` display columns, marking the cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mark_width = styles::TRUNCATION_MARK.width();
    let budget = width.saturating_sub(mark_width);
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if used + mark_width <= width {
        out.push_str(styles::TRUNCATION_MARK);
    }
    out
}
