//! Window calculation - mapping a scroll offset to a renderable index range.
//!
//! The viewport can only address `MAX_ITEMS = floor(MAX_SCROLLABLE_HEIGHT_PX /
//! ROW_HEIGHT_PX)` rows at once. When the stream holds more lines than that,
//! only a window of `MAX_ITEMS` consecutive lines is handed to the viewport,
//! and the window's start is chosen by proportional mapping of the scroll
//! position over the whole (simulated) content.
//!
//! All functions here are pure: identical inputs give identical windows.

use crate::error::{Error, Result};

/// Default row height, in pixels
pub const DEFAULT_ROW_HEIGHT_PX: u32 = 32;

/// Default platform limit on the height of a scrollable element, in pixels
pub const DEFAULT_MAX_SCROLLABLE_HEIGHT_PX: u64 = 33_554_400;

// ─────────────────────────────────────────────────────────────────────────────
// RowGeometry
// ─────────────────────────────────────────────────────────────────────────────

/// Validated row sizing: row height, scrollable limit and the derived `MAX_ITEMS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGeometry {
    row_height_px: u32,
    max_scrollable_height_px: u64,
    max_items: usize,
}

impl Default for RowGeometry {
    fn default() -> Self {
        let max_items =
            (DEFAULT_MAX_SCROLLABLE_HEIGHT_PX / u64::from(DEFAULT_ROW_HEIGHT_PX)) as usize;
        Self {
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            max_scrollable_height_px: DEFAULT_MAX_SCROLLABLE_HEIGHT_PX,
            max_items,
        }
    }
}

impl RowGeometry {
    /// Build a geometry, rejecting a zero row height or a limit smaller than one row
    pub fn new(row_height_px: u32, max_scrollable_height_px: u64) -> Result<Self> {
        if row_height_px == 0 {
            return Err(Error::config_invalid("row_height_px must be greater than 0"));
        }

        let max_items = max_scrollable_height_px / u64::from(row_height_px);
        if max_items == 0 {
            return Err(Error::config_invalid(format!(
                "max_scrollable_height_px ({}) must fit at least one row of {}px",
                max_scrollable_height_px, row_height_px
            )));
        }

        Ok(Self {
            row_height_px,
            max_scrollable_height_px,
            max_items: usize::try_from(max_items).unwrap_or(usize::MAX),
        })
    }

    pub fn row_height_px(&self) -> u32 {
        self.row_height_px
    }

    pub fn max_scrollable_height_px(&self) -> u64 {
        self.max_scrollable_height_px
    }

    /// Hard cap on simultaneously addressable rows
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Pixel extent of `rows` rows (saturating)
    pub fn rows_to_px(&self, rows: usize) -> u64 {
        (rows as u64).saturating_mul(u64::from(self.row_height_px))
    }

    /// Number of whole rows covered by `px` pixels
    pub fn px_to_rows(&self, px: u64) -> usize {
        usize::try_from(px / u64::from(self.row_height_px)).unwrap_or(usize::MAX)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window
// ─────────────────────────────────────────────────────────────────────────────

/// Contiguous range `[start, start + size)` of logical indices materialized
/// for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub start: usize,
    pub size: usize,
}

impl Window {
    pub fn new(start: usize, size: usize) -> Self {
        Self { start, size }
    }

    /// Exclusive end index
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Highest index in the window
    pub fn last(&self) -> Option<usize> {
        if self.size == 0 {
            None
        } else {
            Some(self.end() - 1)
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }

    /// Shift by a base index (used when older lines were evicted)
    pub fn offset_by(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            size: self.size,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WindowCalculator
// ─────────────────────────────────────────────────────────────────────────────

/// Pure mapping from `(scroll offset, line count)` to a [`Window`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCalculator {
    geometry: RowGeometry,
}

impl WindowCalculator {
    pub fn new(geometry: RowGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> RowGeometry {
        self.geometry
    }

    /// `min(total, MAX_ITEMS)`
    pub fn window_size(&self, total: usize) -> usize {
        total.min(self.geometry.max_items())
    }

    /// Extent the full content would have without the platform limit
    pub fn simulated_height_px(&self, total: usize) -> u64 {
        self.geometry.rows_to_px(total)
    }

    /// Largest valid window start for `total` lines
    pub fn max_start(&self, total: usize) -> usize {
        total - self.window_size(total)
    }

    /// Map a scroll position to the first index of the window.
    ///
    /// `scrollable_range_px` is the viewport's maximum scroll offset. The
    /// mapping is `floor(offset / range * total)` clamped to
    /// `[0, total - window_size]`, evaluated in exact integer arithmetic.
    pub fn start_index(&self, scroll_offset_px: u64, total: usize, scrollable_range_px: u64) -> usize {
        if total <= self.geometry.max_items() || scrollable_range_px == 0 {
            return 0;
        }

        let estimated =
            u128::from(scroll_offset_px) * total as u128 / u128::from(scrollable_range_px);
        let max_start = self.max_start(total);

        if estimated >= max_start as u128 {
            max_start
        } else {
            estimated as usize
        }
    }

    /// Full window for a scroll position
    pub fn compute(&self, scroll_offset_px: u64, total: usize, scrollable_range_px: u64) -> Window {
        Window::new(
            self.start_index(scroll_offset_px, total, scrollable_range_px),
            self.window_size(total),
        )
    }

    /// Window whose last index is `total - 1`
    pub fn bottom_anchored(&self, total: usize) -> Window {
        Window::new(self.max_start(total), self.window_size(total))
    }

    /// Keep `start` but re-establish the invariants after `total` changed
    pub fn clamp(&self, start: usize, total: usize) -> Window {
        Window::new(start.min(self.max_start(total)), self.window_size(total))
    }
}
