//! Scanner runtime: one cycle of fetch, analyze, decide and deliver.

use crate::config::{
    ScannerConfig, DEFAULT_SCAN_INTERVAL_SECONDS, DEFAULT_SYMBOLS, DEFAULT_SYMBOL_PAUSE_MS,
    KLINE_INTERVAL, KLINE_LIMIT,
};
use crate::error::ScanError;
use crate::models::notification::Notification;
use crate::models::signal::AnalysisResult;
use crate::services::market_data::{KlineInterval, PriceHistoryProvider};
use crate::services::messaging::MessageSink;
use crate::signals::analyzer::SignalAnalyzer;
use crate::signals::policy::{NotificationPolicy, NotificationState};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Configuration for the scan loop
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub symbols: Vec<String>,
    pub scan_interval: Duration,
    /// Pause between two symbol fetches, for exchange rate limits.
    pub symbol_pause: Duration,
    pub kline_interval: KlineInterval,
    pub kline_limit: u16,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            scan_interval: Duration::from_secs(DEFAULT_SCAN_INTERVAL_SECONDS),
            symbol_pause: Duration::from_millis(DEFAULT_SYMBOL_PAUSE_MS),
            kline_interval: KLINE_INTERVAL,
            kline_limit: KLINE_LIMIT,
        }
    }
}

impl From<&ScannerConfig> for RuntimeConfig {
    fn from(config: &ScannerConfig) -> Self {
        Self {
            symbols: config.symbols.clone(),
            scan_interval: config.scan_interval,
            symbol_pause: config.symbol_pause,
            ..Self::default()
        }
    }
}

/// What happened during one cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    pub results: Vec<AnalysisResult>,
    /// Symbols whose fetch or analysis failed this cycle.
    pub skipped: Vec<String>,
    pub notifications: Vec<Notification>,
    /// Notifications the sink accepted.
    pub delivered: usize,
}

/// Owns the notification state and threads it through successive cycles.
pub struct ScannerRuntime {
    config: RuntimeConfig,
    provider: Arc<dyn PriceHistoryProvider>,
    sink: Arc<dyn MessageSink>,
    state: NotificationState,
}

impl ScannerRuntime {
    pub fn new(
        config: RuntimeConfig,
        provider: Arc<dyn PriceHistoryProvider>,
        sink: Arc<dyn MessageSink>,
    ) -> Self {
        Self {
            config,
            provider,
            sink,
            state: NotificationState::default(),
        }
    }

    /// Start from an existing state instead of a fresh one.
    pub fn with_state(mut self, state: NotificationState) -> Self {
        self.state = state;
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    /// Fetch and analyze one symbol.
    pub async fn analyze_symbol(&self, symbol: &str) -> Result<AnalysisResult, ScanError> {
        let closes = self
            .provider
            .fetch_closes(symbol, self.config.kline_interval, self.config.kline_limit)
            .await
            .map_err(|source| ScanError::UpstreamFetch {
                symbol: symbol.to_string(),
                source,
            })?;

        SignalAnalyzer::analyze(symbol, &closes)
    }

    /// Run one cycle, taking the calm-notice clock reading after all symbols
    /// have been scanned.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let (results, skipped) = self.scan_symbols().await;
        self.finish_cycle(results, skipped, Utc::now()).await
    }

    /// Run one cycle with an explicit decision time.
    pub async fn run_cycle_at(&mut self, now: DateTime<Utc>) -> CycleReport {
        let (results, skipped) = self.scan_symbols().await;
        self.finish_cycle(results, skipped, now).await
    }

    async fn scan_symbols(&self) -> (Vec<AnalysisResult>, Vec<String>) {
        let mut results = Vec::with_capacity(self.config.symbols.len());
        let mut skipped = Vec::new();

        for (i, symbol) in self.config.symbols.iter().enumerate() {
            if i > 0 && !self.config.symbol_pause.is_zero() {
                tokio::time::sleep(self.config.symbol_pause).await;
            }

            match self.analyze_symbol(symbol).await {
                Ok(result) => {
                    info!(
                        symbol = %result.symbol,
                        signal = %result.signal,
                        rsi = result.rsi,
                        price = result.price,
                        "{}: {} | RSI: {:.2} | Price: {:.2}",
                        result.symbol,
                        result.signal,
                        result.rsi,
                        result.price
                    );
                    results.push(result);
                }
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Skipping {} this cycle", symbol);
                    skipped.push(symbol.clone());
                }
            }
        }

        (results, skipped)
    }

    async fn finish_cycle(
        &mut self,
        results: Vec<AnalysisResult>,
        skipped: Vec<String>,
        now: DateTime<Utc>,
    ) -> CycleReport {
        let decision = NotificationPolicy::decide(&self.state, &results, now);
        self.state = decision.state;

        let mut delivered = 0;
        for notification in &decision.notifications {
            match self.deliver(notification).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    error!(
                        symbol = notification.symbol().unwrap_or("-"),
                        error = %e,
                        "Failed to deliver notification"
                    );
                }
            }
        }

        info!(
            analyzed = results.len(),
            skipped = skipped.len(),
            notifications = decision.notifications.len(),
            delivered,
            "Scan cycle complete"
        );

        CycleReport {
            results,
            skipped,
            notifications: decision.notifications,
            delivered,
        }
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), ScanError> {
        self.sink.send(&notification.to_string()).await?;
        Ok(())
    }
}
