//! Market data provider interface.

use crate::error::FetchError;
use async_trait::async_trait;
use std::fmt;

/// Candle width requested from the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KlineInterval {
    FifteenMinutes,
}

impl KlineInterval {
    /// Wire name used in exchange requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            KlineInterval::FifteenMinutes => "15m",
        }
    }
}

impl fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Closing prices for `symbol`, oldest first, at most `limit` bars.
    async fn fetch_closes(
        &self,
        symbol: &str,
        interval: KlineInterval,
        limit: u16,
    ) -> Result<Vec<f64>, FetchError>;
}
