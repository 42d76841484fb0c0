//! Bottom-tracking policy for the log view.

use crate::viewport_state::ViewportState;

/// Decides what an append does to the window.
///
/// Enabled: every append bottom-anchors the window and queues a scroll to
/// the last row. Disabled: the window start is kept, so the view does not
/// move while lines keep arriving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoScrollController {
    enabled: bool,
}

impl Default for AutoScrollController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AutoScrollController {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the policy; returns the new value.
    ///
    /// Nothing moves until the next append or an explicit
    /// `ViewportState::scroll_to_bottom`.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Apply the policy after the buffer grew to `total` lines
    pub fn on_append(&self, viewport: &mut ViewportState, total: usize, first: usize) {
        if self.enabled {
            viewport.anchor_bottom(total, first);
        } else {
            viewport.hold_position(total, first);
        }
    }
}
