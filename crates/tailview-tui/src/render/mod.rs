//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use tailview_app::state::AppState;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Only the viewport's measured height and pending scroll are written back
/// into `state`.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    let header = widgets::MainHeader::new(&state.stream_url, state.auto_scroll.is_enabled());
    frame.render_widget(header, areas.header);

    let log_view = widgets::LogView::new(state.ingester.buffer(), state.ingester.connection_state())
        .show_timestamps(state.ui.show_timestamps)
        .show_line_numbers(state.ui.show_line_numbers);
    frame.render_stateful_widget(log_view, areas.logs, &mut state.viewport);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
