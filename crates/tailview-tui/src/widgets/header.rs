//! Header bar widget
//!
//! Shows the stream URL and the auto-scroll toggle hint.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing app title, stream URL and the toggle hint
pub struct MainHeader<'a> {
    url: &'a str,
    auto_scroll: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(url: &'a str, auto_scroll: bool) -> Self {
        Self { url, auto_scroll }
    }

    /// Label of the toggle; names what pressing `a` will do
    pub fn toggle_label(auto_scroll: bool) -> &'static str {
        if auto_scroll {
            "Disable Auto Scroll"
        } else {
            "Enable Auto Scroll"
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let url = if self.url.is_empty() {
            "(no stream)"
        } else {
            self.url
        };

        let left = Line::from(vec![
            Span::styled(" tailview ", styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
            Span::styled(url, styles::text_secondary()),
        ]);
        (&left).render(inner, buf);

        let hint = Line::from(vec![
            Span::styled("[a] ", styles::keybinding()),
            Span::styled(Self::toggle_label(self.auto_scroll), styles::text_primary()),
            Span::raw(" "),
        ]);
        let hint_width = hint.width() as u16;
        let left_width = left.width() as u16;

        // Drop the hint when it would overlap the URL
        if left_width + hint_width < inner.width {
            let hint_area = Rect {
                x: inner.x + inner.width - hint_width,
                width: hint_width,
                ..inner
            };
            hint.render(hint_area, buf);
        }
    }
}
