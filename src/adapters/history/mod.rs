//! # History Adapters
//!
//! Where computed results are kept.
//!
//! Available adapters:
//! - `MemoryHistory` - In-memory Vec (fast, volatile)

mod memory;

pub use memory::MemoryHistory;
