pub mod error;
pub mod momentum;

pub use error::IndicatorError;
pub use momentum::*;
