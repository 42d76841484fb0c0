//! Scroll message handlers
//!
//! Manual scrolling moves the viewport but leaves auto-scroll as it is; the
//! next append re-anchors the window when auto-scroll is on.

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState, n: usize) -> UpdateResult {
    state.viewport.scroll_up(n);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState, n: usize) -> UpdateResult {
    state.viewport.scroll_down(n);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.viewport.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.viewport.page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_to_bottom();
    UpdateResult::none()
}

pub fn handle_toggle_auto_scroll(state: &mut AppState) -> UpdateResult {
    state.toggle_auto_scroll();
    UpdateResult::none()
}
