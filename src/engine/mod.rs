//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Configuration is applied
//! - Inputs are validated
//! - Results are recorded in history

mod calculator;

pub use calculator::Calculator;
