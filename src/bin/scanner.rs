//! RSI Scanner
//!
//! Polls Binance for 15-minute closes on a fixed symbol set, classifies each
//! symbol by RSI and pushes new strong signals to a Telegram chat.

use dotenvy::dotenv;
use rsi_scanner::config::{self, ScannerConfig};
use rsi_scanner::core::runtime::{RuntimeConfig, ScannerRuntime};
use rsi_scanner::core::scheduler::ScanScheduler;
use rsi_scanner::logging;
use rsi_scanner::services::{BinanceClient, MessageSink, PriceHistoryProvider, TelegramNotifier};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = ScannerConfig::from_env()?;
    let env = config::get_environment();

    info!("🚀 Crypto scanner started... (press CTRL + C to stop)");
    info!(environment = %env, "Environment");
    info!(symbols = ?config.symbols, "Symbols: {}", config.symbols.join(", "));
    info!(
        interval_secs = config.scan_interval.as_secs(),
        pause_ms = config.symbol_pause.as_millis() as u64,
        "Scanning every {} seconds",
        config.scan_interval.as_secs()
    );
    if config.binance.api_key.is_none() {
        info!("BINANCE_API_KEY not set, using anonymous market data requests");
    }

    let provider: Arc<dyn PriceHistoryProvider> = Arc::new(BinanceClient::new(&config.binance));
    let sink: Arc<dyn MessageSink> = Arc::new(TelegramNotifier::new(&config.telegram));

    let runtime = ScannerRuntime::new(RuntimeConfig::from(&config), provider, sink);
    let scheduler = ScanScheduler::new(runtime.config().scan_interval)?;
    scheduler.start(runtime).await?;

    signal::ctrl_c().await?;
    info!("Shutting down scanner...");
    scheduler.stop().await;
    info!("Scanner stopped");

    Ok(())
}
