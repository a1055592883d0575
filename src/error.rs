//! Error taxonomy shared by the scanner layers.

use thiserror::Error;

/// Failures surfaced at the scanner's boundaries.
///
/// None of these are fatal: per-symbol errors skip the symbol for one cycle,
/// delivery errors are logged and dropped.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("insufficient data for {symbol}: need {required} closes, got {actual}")]
    InsufficientData {
        symbol: String,
        required: usize,
        actual: usize,
    },

    #[error("failed to fetch price history for {symbol}: {source}")]
    UpstreamFetch {
        symbol: String,
        #[source]
        source: FetchError,
    },

    #[error("notification delivery failed: {0}")]
    NotificationDelivery(#[from] DeliveryError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by a price-history provider.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("API error: code {code}, msg: {msg}")]
    Api { code: i64, msg: String },

    #[error("invalid price value: {0}")]
    InvalidPrice(String),
}

/// Errors raised by a messaging sink.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("message rejected (status {status}): {description}")]
    Rejected { status: u16, description: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;
