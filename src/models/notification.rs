use crate::models::signal::Signal;
use std::fmt;

/// An outbound chat message decided by the notification policy.
///
/// `Display` renders the exact text delivered to the messaging sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    StrongSignal {
        symbol: String,
        signal: Signal,
        price: f64,
        rsi: f64,
    },
    CalmMarket,
}

impl Notification {
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Notification::StrongSignal { symbol, .. } => Some(symbol),
            Notification::CalmMarket => None,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::StrongSignal {
                symbol,
                signal,
                price,
                rsi,
            } => write!(
                f,
                "{} for {}! 💥 Price: {:.2} | RSI: {:.2}",
                signal, symbol, price, rsi
            ),
            Notification::CalmMarket => {
                f.write_str("⏳ No strong signals right now. Market is calm.")
            }
        }
    }
}
