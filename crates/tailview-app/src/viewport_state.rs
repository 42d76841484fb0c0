//! Viewport state - window position, scroll offset and deferred scroll commands.
//!
//! This module defines the state shared by the app handler layer (scroll
//! messages, appends) and the TUI layer (measuring and rendering the log
//! view).
//!
//! The viewport never addresses more than `MAX_ITEMS` rows. Those rows form
//! the current [`Window`] of logical indices, and the scroll offset is a
//! position inside that window's content, in abstract pixels:
//!
//! ```text
//! content  = window.size * row_h
//! viewport = visible_rows * row_h
//! range    = content - viewport        (0 ..= range is the valid offset)
//! top row  = window.start + offset / row_h
//! ```
//!
//! Scroll offsets (scrollbar drags, jumps to the top) remap the window
//! through [`WindowCalculator`]. Row and page steps move by logical index
//! and only shift the window once the target rows leave it. Appends either
//! bottom-anchor the window or keep its start, depending on auto-scroll.

use tailview_core::{RowGeometry, Window, WindowCalculator};

// ─────────────────────────────────────────────────────────────────────────────
// Scroll commands
// ─────────────────────────────────────────────────────────────────────────────

/// Where a target row should land inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    Center,
    #[default]
    End,
}

/// A scroll request executed on the next render pass, once the viewport
/// knows its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    /// Bring a logical index into view
    Index { index: usize, align: Align },
    /// Bring the window's last row into view, whatever it is at execution time
    LastRow { align: Align },
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewportState
// ─────────────────────────────────────────────────────────────────────────────

/// State for the windowed log view
#[derive(Debug)]
pub struct ViewportState {
    calculator: WindowCalculator,
    /// Logical indices currently materialized
    window: Window,
    /// Offset into the window content, `0..=scrollable_range_px()`
    scroll_offset_px: u64,
    /// Logical length `L`
    total: usize,
    /// First retained index (non-zero only with retention)
    first: usize,
    /// Visible rows (set during render)
    visible_rows: usize,
    /// Single-slot deferred scroll
    pending: Option<ScrollCommand>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(RowGeometry::default())
    }
}

impl ViewportState {
    pub fn new(geometry: RowGeometry) -> Self {
        Self {
            calculator: WindowCalculator::new(geometry),
            window: Window::default(),
            scroll_offset_px: 0,
            total: 0,
            first: 0,
            visible_rows: 0,
            pending: None,
        }
    }

    pub fn geometry(&self) -> RowGeometry {
        self.calculator.geometry()
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn scroll_offset_px(&self) -> u64 {
        self.scroll_offset_px
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn first_index(&self) -> usize {
        self.first
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn pending_scroll(&self) -> Option<ScrollCommand> {
        self.pending
    }

    fn retained(&self) -> usize {
        self.total - self.first
    }

    pub fn viewport_height_px(&self) -> u64 {
        self.geometry().rows_to_px(self.visible_rows)
    }

    pub fn content_height_px(&self) -> u64 {
        self.geometry().rows_to_px(self.window.size)
    }

    /// Largest valid scroll offset for the current window and viewport
    pub fn scrollable_range_px(&self) -> u64 {
        self.content_height_px()
            .saturating_sub(self.viewport_height_px())
    }

    // ─────────────────────────────────────────────────────────
    // Buffer growth
    // ─────────────────────────────────────────────────────────

    /// Bottom-anchor the window for a buffer of `total` lines and queue a
    /// scroll to its last row.
    pub fn anchor_bottom(&mut self, total: usize, first: usize) {
        self.set_extent(total, first);
        self.window = self
            .calculator
            .bottom_anchored(self.retained())
            .offset_by(self.first);
        self.pending = Some(ScrollCommand::LastRow { align: Align::End });
        self.clamp_offset();
    }

    /// Keep the window start for a buffer of `total` lines, clamped so the
    /// window stays inside the retained range.
    pub fn hold_position(&mut self, total: usize, first: usize) {
        self.set_extent(total, first);
        let relative_start = self.window.start.saturating_sub(self.first);
        self.window = self
            .calculator
            .clamp(relative_start, self.retained())
            .offset_by(self.first);
        self.clamp_offset();
    }

    fn set_extent(&mut self, total: usize, first: usize) {
        self.total = total;
        self.first = first.min(total);
    }

    // ─────────────────────────────────────────────────────────
    // Scroll events
    // ─────────────────────────────────────────────────────────

    /// Scroll to `offset_px` and remap the window from it
    pub fn on_scroll(&mut self, offset_px: u64) {
        let range = self.scrollable_range_px();
        self.scroll_offset_px = offset_px.min(range);
        self.window = self
            .calculator
            .compute(self.scroll_offset_px, self.retained(), range)
            .offset_by(self.first);
    }

    /// Scroll up by `n` rows
    pub fn scroll_up(&mut self, n: usize) {
        self.pending = None;
        let (top, _) = self.visible_range();
        self.show_from(top.saturating_sub(n));
    }

    /// Scroll down by `n` rows
    pub fn scroll_down(&mut self, n: usize) {
        self.pending = None;
        let (top, _) = self.visible_range();
        self.show_from(top.saturating_add(n));
    }

    /// Put logical row `top` first on screen.
    ///
    /// Row steps are index deltas: the window only moves when the rows to
    /// show leave it, and then it is re-centered around them.
    fn show_from(&mut self, top: usize) {
        let retained = self.retained();
        if retained == 0 {
            return;
        }

        let rows = self.visible_rows.min(self.window.size);
        let top = top.clamp(self.first, self.total - rows.max(1));

        if top < self.window.start || top + rows > self.window.end() {
            let slack = (self.window.size - rows) / 2;
            let start = (top - self.first).saturating_sub(slack);
            self.window = self.calculator.clamp(start, retained).offset_by(self.first);
        }

        self.scroll_offset_px = self
            .geometry()
            .rows_to_px(top - self.window.start)
            .min(self.scrollable_range_px());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_rows());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_rows());
    }

    fn page_rows(&self) -> usize {
        self.visible_rows.saturating_sub(2).max(1)
    }

    pub fn scroll_to_top(&mut self) {
        self.pending = None;
        self.on_scroll(0);
    }

    /// Bottom-anchor the window now and queue a scroll to its last row
    pub fn scroll_to_bottom(&mut self) {
        self.anchor_bottom(self.total, self.first);
        self.scroll_offset_px = self.scrollable_range_px();
    }

    /// Queue a scroll that brings `index` into view on the next render
    pub fn scroll_to_index(&mut self, index: usize, align: Align) {
        self.pending = Some(ScrollCommand::Index { index, align });
    }

    // ─────────────────────────────────────────────────────────
    // Render-time geometry
    // ─────────────────────────────────────────────────────────

    /// Record the measured viewport height and run any pending scroll.
    ///
    /// Called by the renderer before it reads `visible_range()`.
    pub fn update_viewport_size(&mut self, visible_rows: usize) {
        self.visible_rows = visible_rows;
        self.clamp_offset();
        self.apply_pending_scroll();
    }

    /// Execute the pending scroll command against the live window.
    ///
    /// Returns the command that ran, if any.
    pub fn apply_pending_scroll(&mut self) -> Option<ScrollCommand> {
        let command = self.pending.take()?;

        let target = match command {
            ScrollCommand::LastRow { align } => self.window.last().map(|index| (index, align)),
            ScrollCommand::Index { index, align } => {
                self.bring_into_window(index, align);
                self.window
                    .last()
                    .map(|last| (index.clamp(self.window.start, last), align))
            }
        };

        match target {
            Some((index, align)) => {
                self.scroll_offset_px = self.offset_for(index - self.window.start, align);
            }
            None => self.scroll_offset_px = 0,
        }

        Some(command)
    }

    /// Move the window so it contains `index`, when it does not already
    fn bring_into_window(&mut self, index: usize, align: Align) {
        let retained = self.retained();
        if retained == 0 || self.window.contains(index) {
            return;
        }

        let relative = index.clamp(self.first, self.total - 1) - self.first;
        let size = self.window.size;
        let start = match align {
            Align::Start => relative,
            Align::Center => relative.saturating_sub(size / 2),
            Align::End => (relative + 1).saturating_sub(size),
        };
        self.window = self.calculator.clamp(start, retained).offset_by(self.first);
    }

    /// Offset that puts window row `row` at `align`
    fn offset_for(&self, row: usize, align: Align) -> u64 {
        let geometry = self.geometry();
        let row_height = u64::from(geometry.row_height_px());
        let row_top = geometry.rows_to_px(row);
        let viewport = self.viewport_height_px();

        let offset = match align {
            Align::Start => row_top,
            Align::Center => (row_top + row_height / 2).saturating_sub(viewport / 2),
            Align::End => (row_top + row_height).saturating_sub(viewport),
        };
        offset.min(self.scrollable_range_px())
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset_px = self.scroll_offset_px.min(self.scrollable_range_px());
    }

    /// Logical `[start, end)` of the rows on screen
    pub fn visible_range(&self) -> (usize, usize) {
        let rows = self.visible_rows.min(self.window.size);
        let top = self
            .geometry()
            .px_to_rows(self.scroll_offset_px)
            .min(self.window.size - rows);
        let start = self.window.start + top;
        (start, start + rows)
    }

    /// Whether the last logical line is on screen
    pub fn is_at_bottom(&self) -> bool {
        let (_, end) = self.visible_range();
        end == self.total
    }
}
