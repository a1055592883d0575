//! Binance spot REST client for kline history.

use crate::config::BinanceSettings;
use crate::error::FetchError;
use crate::models::indicators::Candle;
use crate::services::market_data::{KlineInterval, PriceHistoryProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Raw kline row as returned by `GET /api/v3/klines`: a JSON array of mixed types.
#[derive(Debug, Deserialize)]
pub struct RawKline(
    pub i64,    // 0: Open time
    pub String, // 1: Open
    pub String, // 2: High
    pub String, // 3: Low
    pub String, // 4: Close
    pub String, // 5: Volume
    pub i64,    // 6: Close time
    pub String, // 7: Quote asset volume
    pub i64,    // 8: Number of trades
    pub String, // 9: Taker buy base asset volume
    pub String, // 10: Taker buy quote asset volume
    pub String, // 11: Ignore
);

impl RawKline {
    fn into_candle(self) -> Result<Candle, FetchError> {
        Ok(Candle::new(
            parse_price(&self.1)?,
            parse_price(&self.2)?,
            parse_price(&self.3)?,
            parse_price(&self.4)?,
            parse_price(&self.5)?,
        )
        .with_times(self.0, self.6))
    }
}

/// Rejects unparsable and non-finite values ("NaN", "inf").
fn parse_price(raw: &str) -> Result<f64, FetchError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FetchError::InvalidPrice(raw.to_string()))
}

/// Client for the public Binance market data endpoints.
#[derive(Debug, Clone)]
pub struct BinanceClient {
    http_client: Client,
    /// Passed through as `X-MBX-APIKEY` when present.
    api_key: Option<String>,
    base_url: String,
}

impl BinanceClient {
    pub fn new(settings: &BinanceSettings) -> Self {
        Self::with_client(settings, Client::new())
    }

    pub fn with_client(settings: &BinanceSettings, http_client: Client) -> Self {
        Self {
            http_client,
            api_key: settings.api_key.clone(),
            base_url: settings.rest_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches historical kline (candlestick) data, oldest first.
    ///
    /// This corresponds to the `GET /api/v3/klines` endpoint.
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: KlineInterval,
        limit: u16,
    ) -> Result<Vec<Candle>, FetchError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let limit = limit.to_string();

        let mut request = self.http_client.get(&url).query(&[
            ("symbol", symbol),
            ("interval", interval.as_str()),
            ("limit", limit.as_str()),
        ]);
        if let Some(key) = &self.api_key {
            request = request.header("X-MBX-APIKEY", key);
        }

        let response_body = request.send().await?.text().await?;

        let raw_klines: Vec<RawKline> = serde_json::from_str(&response_body).map_err(|e| {
            // Binance reports failures as {"code": .., "msg": ..}
            if let Ok(value) = serde_json::from_str::<Value>(&response_body) {
                if let Some(code) = value.get("code").and_then(Value::as_i64) {
                    let msg = value
                        .get("msg")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string();
                    return FetchError::Api { code, msg };
                }
            }
            FetchError::Deserialization(e)
        })?;

        let candles = raw_klines
            .into_iter()
            .map(RawKline::into_candle)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            symbol = %symbol,
            interval = %interval,
            count = candles.len(),
            "BinanceClient: fetched {} klines for {}",
            candles.len(),
            symbol
        );

        Ok(candles)
    }
}

#[async_trait]
impl PriceHistoryProvider for BinanceClient {
    async fn fetch_closes(
        &self,
        symbol: &str,
        interval: KlineInterval,
        limit: u16,
    ) -> Result<Vec<f64>, FetchError> {
        let candles = self.get_klines(symbol, interval, limit).await?;
        Ok(candles.into_iter().map(|c| c.close).collect())
    }
}
