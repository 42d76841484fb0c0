//! Row styling constants for log view rendering

use ratatui::style::{Color, Modifier, Style};

/// Line number column
pub const LINE_NUMBER: Style = Style::new().fg(Color::DarkGray);

/// Receive-time column
pub const TIMESTAMP: Style = Style::new().fg(Color::DarkGray);

/// Line text
pub const TEXT: Style = Style::new().fg(Color::White);

/// Marker appended to truncated rows
pub const TRUNCATION_MARK: &str = "…";

/// Empty-state headline
pub const EMPTY_TITLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Empty-state detail line
pub const EMPTY_DETAIL: Style = Style::new().fg(Color::DarkGray);
