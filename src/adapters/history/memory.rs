//! # Memory History Adapter
//!
//! In-memory result log backed by a `Vec<f64>`.
//! Volatile: nothing survives the owning calculator.

use tracing::{debug, trace};

/// In-memory history of computed results, in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    /// Recorded results, oldest first
    entries: Vec<f64>,
}

impl MemoryHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create an empty history with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append a result
    pub(crate) fn record(&mut self, value: f64) {
        self.entries.push(value);
        trace!(value, len = self.entries.len(), "recorded result");
    }

    /// Independent copy of all entries, oldest first
    pub fn snapshot(&self) -> Vec<f64> {
        self.entries.clone()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<f64> {
        self.entries.last().copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub(crate) fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries = Vec::new();
        debug!(dropped, "history cleared");
    }
}
