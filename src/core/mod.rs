//! # Core
//!
//! Pure domain pieces: errors, finite checks, configuration.
//! Nothing in here holds state.

pub mod config;
pub mod error;
pub mod finite;

pub use config::CalculatorConfig;
pub use error::{CalcError, CalcResult, ErrorKind};
