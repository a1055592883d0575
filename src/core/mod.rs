//! Driver loop: per-cycle orchestration and periodic scheduling.

pub mod runtime;
pub mod scheduler;

pub use runtime::*;
pub use scheduler::*;
