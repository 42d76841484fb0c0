//! Custom widget components

mod header;
mod log_view;
mod status_bar;

pub use header::MainHeader;
pub use log_view::LogView;
pub use status_bar::StatusBar;

// Re-export state types from app layer (these are used by render/)
pub use tailview_app::viewport_state::ViewportState;
