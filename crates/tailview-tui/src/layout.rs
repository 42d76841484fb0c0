//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Status bar height: top separator + content row
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Stream URL and the auto-scroll toggle
    pub header: Rect,

    /// Log rows
    pub logs: Rect,

    /// Connection, progress and window position
    pub status: Rect,
}

/// Split the screen into header, logs and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        logs: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.logs.y, 3);
        assert_eq!(layout.logs.height, 19); // 24 - 3 - 2
        assert_eq!(layout.status.y, 22);
        assert_eq!(layout.status.height, 2);
    }

    #[test]
    fn test_layout_spans_full_width() {
        let layout = create(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.width, 120);
        assert_eq!(layout.logs.width, 120);
        assert_eq!(layout.status.width, 120);
    }
}
