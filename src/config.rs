//! Environment-driven configuration for the scanner.

use crate::error::ScanError;
use crate::services::market_data::KlineInterval;
use std::env;
use std::time::Duration;

pub const DEFAULT_SYMBOLS: [&str; 5] = ["BTCUSDT", "ETHUSDT", "BNBUSDT", "SOLUSDT", "XRPUSDT"];
pub const DEFAULT_BINANCE_BASE_URL: &str = "https://api.binance.com";
pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_SCAN_INTERVAL_SECONDS: u64 = 300;
pub const DEFAULT_SYMBOL_PAUSE_MS: u64 = 1000;
pub const KLINE_INTERVAL: KlineInterval = KlineInterval::FifteenMinutes;
pub const KLINE_LIMIT: u16 = 100;

/// Deployment environment name, `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct BinanceSettings {
    pub api_key: Option<String>,
    pub secret_key: Option<String>,
    pub rest_base_url: String,
}

#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub token: String,
    pub chat_id: String,
    pub api_base_url: String,
}

/// Startup parameters for the scanner binary.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub binance: BinanceSettings,
    pub telegram: TelegramSettings,
    pub symbols: Vec<String>,
    pub scan_interval: Duration,
    pub symbol_pause: Duration,
}

impl ScannerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ScanError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            non_empty(key).ok_or_else(|| ScanError::Config(format!("{} must be set", key)))
        };

        let symbols = match non_empty("SYMBOLS") {
            Some(raw) => {
                let v: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect();
                if v.is_empty() {
                    return Err(ScanError::Config("SYMBOLS contains no symbols".to_string()));
                }
                v
            }
            None => DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        };

        let scan_interval_seconds = parse_u64(
            non_empty("SCAN_INTERVAL_SECONDS"),
            "SCAN_INTERVAL_SECONDS",
            DEFAULT_SCAN_INTERVAL_SECONDS,
        )?;
        if scan_interval_seconds == 0 {
            return Err(ScanError::Config(
                "SCAN_INTERVAL_SECONDS must be > 0".to_string(),
            ));
        }
        let symbol_pause_ms = parse_u64(
            non_empty("SYMBOL_PAUSE_MS"),
            "SYMBOL_PAUSE_MS",
            DEFAULT_SYMBOL_PAUSE_MS,
        )?;

        Ok(Self {
            binance: BinanceSettings {
                api_key: non_empty("BINANCE_API_KEY"),
                secret_key: non_empty("BINANCE_SECRET_KEY"),
                rest_base_url: non_empty("BINANCE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BINANCE_BASE_URL.to_string()),
            },
            telegram: TelegramSettings {
                token: required("TELEGRAM_TOKEN")?,
                chat_id: required("TELEGRAM_CHAT_ID")?,
                api_base_url: non_empty("TELEGRAM_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_BASE_URL.to_string()),
            },
            symbols,
            scan_interval: Duration::from_secs(scan_interval_seconds),
            symbol_pause: Duration::from_millis(symbol_pause_ms),
        })
    }
}

fn parse_u64(value: Option<String>, key: &str, default: u64) -> Result<u64, ScanError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ScanError::Config(format!("{} must be an integer, got '{}'", key, raw))),
        None => Ok(default),
    }
}
