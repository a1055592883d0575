//! RSI (Relative Strength Index) indicator

use crate::indicators::error::IndicatorError;
use crate::models::indicators::RsiIndicator;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Average loss used when the trailing window has no losses at all.
pub const AVG_LOSS_FLOOR: f64 = 0.0001;

/// Calculate RSI over the trailing `period` deltas of `closes` (oldest first).
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are plain means of the last `period` gains and losses. When the
/// loss sum over that window is exactly zero the average loss is replaced by
/// [`AVG_LOSS_FLOOR`], so an all-gain window yields an RSI just under 100 and
/// a flat window yields 0.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Result<RsiIndicator, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod(period));
    }
    if closes.len() < period + 1 {
        return Err(IndicatorError::InsufficientData {
            required: period + 1,
            actual: closes.len(),
        });
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = deltas.iter().map(|d| if *d > 0.0 { *d } else { 0.0 }).collect();
    let losses: Vec<f64> = deltas.iter().map(|d| if *d < 0.0 { -*d } else { 0.0 }).collect();

    let start = deltas.len() - period;
    let gain_sum: f64 = gains[start..].iter().sum();
    let loss_sum: f64 = losses[start..].iter().sum();

    let avg_gain = gain_sum / period as f64;
    let avg_loss = if loss_sum != 0.0 {
        loss_sum / period as f64
    } else {
        AVG_LOSS_FLOOR
    };

    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - (100.0 / (1.0 + rs));

    Ok(RsiIndicator {
        value: rsi,
        period: Some(period as u32),
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Result<RsiIndicator, IndicatorError> {
    calculate_rsi(closes, DEFAULT_RSI_PERIOD)
}
