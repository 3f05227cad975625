//! # arith-engine
//!
//! Validated in-memory arithmetic with a chronological result history.
//!
//! ## Rules
//!
//! - **Finite in, or nothing** - NaN and ±infinity are rejected up front
//! - **Validate, then record** - a failed call never touches history
//! - **History is owned** - callers get copies, never the live log
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      arith-engine                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure, no state)                                      │
//! │    CalcError, finite checks, mean, CalculatorConfig         │
//! │                                                              │
//! │  ADAPTERS                                                   │
//! │    History: Memory                                          │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Calculator - the main entry point                        │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use arith_engine::{CalcError, Calculator};
//!
//! let mut calc = Calculator::new();
//!
//! assert_eq!(calc.add(10.0, 5.0), Ok(15.0));
//! assert_eq!(calc.subtract(20.0, 10.0), Ok(10.0));
//! assert_eq!(calc.divide(20.0, 4.0), Ok(5.0));
//! assert_eq!(calc.divide(1.0, 0.0), Err(CalcError::DivisionByZero));
//!
//! // Averages are computed but not recorded
//! assert_eq!(calc.average(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
//!
//! assert_eq!(calc.history(), vec![15.0, 10.0, 5.0]);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure validation, no state
/// Contains: CalcError, finite checks, CalculatorConfig
pub mod core;

/// Adapter implementations
/// Contains: history, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Calculator main struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{CalcError, CalcResult, CalculatorConfig, ErrorKind};

// Adapters
pub use crate::adapters::history::MemoryHistory;

// Engine
pub use crate::engine::Calculator;
