use std::fmt;

/// Discrete classification of a symbol's RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    StrongBuy,
    StrongSell,
    Hold,
}

impl Signal {
    /// Strong signals are the only ones that can trigger a notification.
    pub fn is_strong(&self) -> bool {
        matches!(self, Signal::StrongBuy | Signal::StrongSell)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Signal::StrongBuy => "STRONG BUY",
            Signal::StrongSell => "STRONG SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of analyzing one symbol in one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub symbol: String,
    pub rsi: f64,
    pub signal: Signal,
    /// Last close of the analyzed series.
    pub price: f64,
}

impl AnalysisResult {
    pub fn new(symbol: impl Into<String>, rsi: f64, signal: Signal, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            rsi,
            signal,
            price,
        }
    }
}
