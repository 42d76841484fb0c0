//! Append-only, index-addressable store of received lines.
//!
//! Lines live in fixed-capacity chunks held in a `VecDeque`. A chunk is
//! allocated once with its full capacity and never grows past it, so appends
//! never move or reindex existing lines, and `get(i)` is two array lookups
//! regardless of how many lines have been ingested.
//!
//! Retention is opt-in. With a limit set, whole chunks are dropped from the
//! front; logical indices are never shifted, so an index handed out earlier
//! either still resolves to the same line or reports [`Error::IndexEvicted`].

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::types::LogLine;

/// Lines per storage chunk
pub const CHUNK_SIZE: usize = 4096;

/// Append-only log line store
#[derive(Debug)]
pub struct LogBuffer {
    chunks: VecDeque<Vec<LogLine>>,
    /// Logical index of `chunks[0][0]`; always a multiple of `chunk_size`
    first: usize,
    /// Logical end (total lines ever appended)
    len: usize,
    chunk_size: usize,
    max_lines: Option<usize>,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuffer {
    /// Create a buffer with unbounded retention
    pub fn new() -> Self {
        Self::with_layout(CHUNK_SIZE, None)
    }

    /// Create a buffer that keeps at least `max_lines` of the newest lines
    /// and at most `max_lines + CHUNK_SIZE - 1`.
    pub fn with_retention(max_lines: usize) -> Self {
        Self::with_layout(CHUNK_SIZE, Some(max_lines.max(1)))
    }

    fn with_layout(chunk_size: usize, max_lines: Option<usize>) -> Self {
        Self {
            chunks: VecDeque::new(),
            first: 0,
            len: 0,
            chunk_size,
            max_lines,
        }
    }

    /// Small chunks keep chunk-boundary tests fast
    #[cfg(test)]
    pub(crate) fn with_chunk_size(chunk_size: usize, max_lines: Option<usize>) -> Self {
        Self::with_layout(chunk_size, max_lines)
    }

    /// Append a line, assigning it the next logical index.
    ///
    /// Returns the new logical length.
    pub fn append(&mut self, line: LogLine) -> usize {
        let needs_chunk = self
            .chunks
            .back()
            .map_or(true, |chunk| chunk.len() >= self.chunk_size);
        if needs_chunk {
            self.chunks.push_back(Vec::with_capacity(self.chunk_size));
        }
        if let Some(chunk) = self.chunks.back_mut() {
            chunk.push(line);
        }
        self.len += 1;

        self.enforce_retention();
        self.len
    }

    /// Get the line at logical `index`
    pub fn get(&self, index: usize) -> Result<&LogLine> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index < self.first {
            return Err(Error::IndexEvicted {
                index,
                first: self.first,
            });
        }

        let rel = index - self.first;
        Ok(&self.chunks[rel / self.chunk_size][rel % self.chunk_size])
    }

    /// Total lines ever appended (the logical length `L`)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowest index still retained (0 unless lines were evicted)
    pub fn first_index(&self) -> usize {
        self.first
    }

    /// Number of lines currently held in memory
    pub fn retained(&self) -> usize {
        self.len - self.first
    }

    /// Configured retention limit, if any
    pub fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    /// Most recently appended line
    pub fn last(&self) -> Option<&LogLine> {
        self.chunks.back().and_then(|chunk| chunk.last())
    }

    /// Iterate `(index, line)` over `[start, end)`, clipped to the retained range
    pub fn range(&self, start: usize, end: usize) -> impl Iterator<Item = (usize, &LogLine)> {
        let start = start.max(self.first);
        let end = end.min(self.len);
        (start..end).filter_map(move |index| self.get(index).ok().map(|line| (index, line)))
    }

    fn enforce_retention(&mut self) {
        let Some(max_lines) = self.max_lines else {
            return;
        };

        while self.chunks.len() > 1 {
            let front_len = self.chunks[0].len();
            if self.retained() - front_len < max_lines {
                break;
            }
            self.chunks.pop_front();
            self.first += front_len;
            tracing::debug!(
                "Evicted {} lines, first retained index is now {}",
                front_len,
                self.first
            );
        }
    }
}
