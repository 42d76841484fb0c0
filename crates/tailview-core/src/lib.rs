//! # tailview-core - Core Domain Types
//!
//! Foundation crate for tailview. Provides the append-only line store, the
//! window calculation that keeps the viewport within the platform's
//! scrollable limit, byte accounting, transport events, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Line Storage (`buffer`)
//! - [`LogBuffer`] - Chunked, append-only store addressed by logical index
//! - [`LogLine`] - One received line with its receive time
//!
//! ### Windowing (`window`)
//! - [`RowGeometry`] - Row height, scrollable limit and derived `MAX_ITEMS`
//! - [`WindowCalculator`] - Pure `(scroll offset, length) -> Window` mapping
//! - [`Window`] - Range of indices handed to the viewport
//!
//! ### Progress (`progress`)
//! - [`ByteCounter`], [`Progress`] - Cumulative bytes versus a target
//!
//! ### Events and State
//! - [`TransportEvent`] - Opened / Message / Closed from the transport
//! - [`ConnectionState`] - Connection lifecycle observed by the viewer
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use tailview_core::prelude::*;
//! ```

pub mod buffer;
pub mod error;
pub mod events;
pub mod logging;
pub mod progress;
pub mod types;
pub mod window;

/// Prelude for common imports used throughout all tailview crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use buffer::{LogBuffer, CHUNK_SIZE};
pub use error::{Error, Result, ResultExt};
pub use events::TransportEvent;
pub use progress::{format_bytes, ByteCounter, Progress, DEFAULT_TARGET_BYTES};
pub use types::{ConnectionState, LogLine};
pub use window::{
    RowGeometry, Window, WindowCalculator, DEFAULT_MAX_SCROLLABLE_HEIGHT_PX,
    DEFAULT_ROW_HEIGHT_PX,
};
