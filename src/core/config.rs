//! # Configuration
//!
//! Knobs applied when a [`Calculator`](crate::Calculator) is constructed.

/// Calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Number of history slots to pre-allocate (0 = allocate lazily)
    ///
    /// This never limits how many results are recorded.
    pub history_capacity: usize,
}

impl CalculatorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `capacity` history entries
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}
