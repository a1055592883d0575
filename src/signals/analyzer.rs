//! RSI-based signal analyzer.

use crate::error::ScanError;
use crate::indicators::momentum::rsi::calculate_rsi;
use crate::indicators::IndicatorError;
use crate::models::signal::{AnalysisResult, Signal};

pub const RSI_PERIOD: usize = 14;

/// Fewest closes that give `RSI_PERIOD` deltas.
pub const MIN_CLOSES: usize = RSI_PERIOD + 1;

/// Below this RSI a symbol is oversold.
pub const OVERSOLD: f64 = 30.0;

/// Above this RSI a symbol is overbought.
pub const OVERBOUGHT: f64 = 70.0;

/// Stateless analyzer mapping a close series to an [`AnalysisResult`].
pub struct SignalAnalyzer;

impl SignalAnalyzer {
    /// Analyze `closes` (oldest first) for `symbol`.
    ///
    /// Fails with [`ScanError::InsufficientData`] when fewer than
    /// [`MIN_CLOSES`] closes are supplied.
    pub fn analyze(symbol: &str, closes: &[f64]) -> Result<AnalysisResult, ScanError> {
        let rsi = calculate_rsi(closes, RSI_PERIOD).map_err(|e| match e {
            IndicatorError::InsufficientData { required, actual } => ScanError::InsufficientData {
                symbol: symbol.to_string(),
                required,
                actual,
            },
            IndicatorError::InvalidPeriod(_) => ScanError::InsufficientData {
                symbol: symbol.to_string(),
                required: MIN_CLOSES,
                actual: closes.len(),
            },
        })?;

        // calculate_rsi guarantees at least MIN_CLOSES values here
        let price = closes[closes.len() - 1];

        Ok(AnalysisResult::new(
            symbol,
            rsi.value,
            Self::classify(rsi.value),
            price,
        ))
    }

    /// Strict thresholds: exactly 30 and exactly 70 are both `Hold`.
    pub fn classify(rsi: f64) -> Signal {
        if rsi < OVERSOLD {
            Signal::StrongBuy
        } else if rsi > OVERBOUGHT {
            Signal::StrongSell
        } else {
            Signal::Hold
        }
    }
}
