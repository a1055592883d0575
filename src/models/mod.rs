//! Shared data models spanning the scanner layers.

pub mod indicators;
pub mod notification;
pub mod signal;

pub use indicators::{Candle, RsiIndicator};
pub use notification::Notification;
pub use signal::{AnalysisResult, Signal};
