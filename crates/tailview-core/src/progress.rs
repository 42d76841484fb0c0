//! Cumulative byte accounting for the progress display

/// Default progress target (10 MiB)
pub const DEFAULT_TARGET_BYTES: u64 = 10 * 1024 * 1024;

/// Monotonic count of UTF-8 bytes ingested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCounter {
    bytes: u64,
}

impl ByteCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the UTF-8 size of `text`; returns the new total
    pub fn record(&mut self, text: &str) -> u64 {
        self.bytes = self.bytes.saturating_add(text.len() as u64);
        self.bytes
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Progress against `target_bytes`
    pub fn progress(&self, target_bytes: u64) -> Progress {
        Progress::new(self.bytes, target_bytes)
    }
}

/// Snapshot of bytes received versus the configured target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub bytes: u64,
    pub target_bytes: u64,
    /// `bytes / target * 100`; not capped, so it may exceed 100
    pub percent: f64,
}

impl Progress {
    pub fn new(bytes: u64, target_bytes: u64) -> Self {
        let percent = if target_bytes == 0 {
            0.0
        } else {
            bytes as f64 / target_bytes as f64 * 100.0
        };
        Self {
            bytes,
            target_bytes,
            percent,
        }
    }

    /// e.g. `"1.5 MiB / 10.0 MiB (15.0%)"`
    pub fn display(&self) -> String {
        format!(
            "{} / {} ({:.1}%)",
            format_bytes(self.bytes),
            format_bytes(self.target_bytes),
            self.percent
        )
    }
}

/// Human-readable binary size
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
