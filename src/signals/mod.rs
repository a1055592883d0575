//! Signal evaluation and notification decisions.

pub mod analyzer;
pub mod policy;

pub use analyzer::*;
pub use policy::*;
