//! # Adapters
//!
//! Concrete implementations at the edges of the engine:
//! - History storage: Memory
//! - Python bindings (when enabled)
//!
//! Core logic does not depend on any adapter beyond the history it owns.

pub mod history;

#[cfg(feature = "python")]
pub mod python;
