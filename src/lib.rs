//! RSI scanner: polls an exchange for recent closes, classifies each symbol
//! by RSI and pushes new strong signals to a chat channel.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{DeliveryError, FetchError, ScanError};
