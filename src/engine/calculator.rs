//! # Calculator Engine
//!
//! The main arithmetic entry point.
//!
//! This struct wires together:
//! - Finite checks (core)
//! - History storage (MemoryHistory adapter)
//! - Configuration
//!
//! Every operation validates before it touches history, so a failed call
//! leaves the history exactly as it was.

use crate::adapters::history::MemoryHistory;
use crate::core::config::CalculatorConfig;
use crate::core::error::CalcResult;
use crate::core::finite::{ensure_finite_pair, ensure_nonzero, mean};

/// Validated arithmetic with a chronological result history
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// Configuration
    config: CalculatorConfig,

    /// Results of successful binary operations
    history: MemoryHistory,
}

impl Calculator {
    /// Create a calculator with an empty history and default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        let history = MemoryHistory::with_capacity(config.history_capacity);
        Self { config, history }
    }

    /// Get the configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // BINARY OPERATIONS
    // ========================================================================

    /// `a + b`, recorded in history
    pub fn add(&mut self, a: f64, b: f64) -> CalcResult<f64> {
        ensure_finite_pair(a, b)?;
        Ok(self.record(a + b))
    }

    /// `a - b`, recorded in history
    pub fn subtract(&mut self, a: f64, b: f64) -> CalcResult<f64> {
        ensure_finite_pair(a, b)?;
        Ok(self.record(a - b))
    }

    /// `a / b`, recorded in history
    ///
    /// Non-finite operands are reported before a zero divisor.
    pub fn divide(&mut self, a: f64, b: f64) -> CalcResult<f64> {
        ensure_finite_pair(a, b)?;
        ensure_nonzero(b)?;
        Ok(self.record(a / b))
    }

    // ========================================================================
    // AGGREGATES
    // ========================================================================

    /// Arithmetic mean of `numbers`
    ///
    /// Not recorded in history. An empty slice is reported before any
    /// non-finite element.
    pub fn average(&self, numbers: &[f64]) -> CalcResult<f64> {
        mean(numbers)
    }

    // ========================================================================
    // HISTORY
    // ========================================================================

    /// Snapshot of recorded results, oldest first
    ///
    /// The returned vector is owned by the caller and shares nothing with
    /// the calculator.
    pub fn history(&self) -> Vec<f64> {
        self.history.snapshot()
    }

    /// Number of recorded results
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Most recently recorded result
    pub fn last_result(&self) -> Option<f64> {
        self.history.last()
    }

    /// Forget every recorded result
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn record(&mut self, result: f64) -> f64 {
        self.history.record(result);
        result
    }
}
