//! External collaborators: exchange price history and chat delivery.

pub mod binance;
pub mod market_data;
pub mod messaging;
pub mod telegram;

pub use binance::BinanceClient;
pub use market_data::{KlineInterval, PriceHistoryProvider};
pub use messaging::MessageSink;
pub use telegram::TelegramNotifier;
