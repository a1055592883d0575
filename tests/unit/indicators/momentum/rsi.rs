//! Unit tests for RSI indicator

use crate::common_series::{choppy, falling, rising};
use rsi_scanner::indicators::momentum::rsi::{
    calculate_rsi, calculate_rsi_default, AVG_LOSS_FLOOR,
};
use rsi_scanner::indicators::IndicatorError;

#[test]
fn test_rsi_insufficient_data() {
    let closes = rising(10, 100.0);
    let err = calculate_rsi_default(&closes).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InsufficientData {
            required: 15,
            actual: 10
        }
    );
}

#[test]
fn test_rsi_minimum_length() {
    assert!(calculate_rsi_default(&rising(14, 100.0)).is_err());
    assert!(calculate_rsi_default(&rising(15, 100.0)).is_ok());
}

#[test]
fn test_rsi_zero_period_rejected() {
    assert_eq!(
        calculate_rsi(&rising(20, 100.0), 0).unwrap_err(),
        IndicatorError::InvalidPeriod(0)
    );
}

#[test]
fn test_rsi_all_gains_uses_loss_floor() {
    let closes = rising(16, 100.0);
    let rsi = calculate_rsi_default(&closes).unwrap();

    // avg_gain = 1.0, avg_loss clamped to the floor
    let expected = 100.0 - 100.0 / (1.0 + 1.0 / AVG_LOSS_FLOOR);
    assert!((rsi.value - expected).abs() < 1e-9);
    assert!(rsi.value < 100.0);
    assert!(rsi.value > 99.99);
    assert_eq!(rsi.period, Some(14));
}

#[test]
fn test_rsi_all_losses_is_zero() {
    let rsi = calculate_rsi_default(&falling(16, 100.0)).unwrap();
    assert_eq!(rsi.value, 0.0);
}

#[test]
fn test_rsi_flat_series_is_zero() {
    let closes = vec![100.0; 20];
    let rsi = calculate_rsi_default(&closes).unwrap();
    assert_eq!(rsi.value, 0.0);
}

#[test]
fn test_rsi_balanced_series_is_fifty() {
    let rsi = calculate_rsi_default(&choppy(16, 100.0)).unwrap();
    assert!((rsi.value - 50.0).abs() < 1e-9);
}

#[test]
fn test_rsi_only_trailing_window_counts() {
    // A crash before the last 14 deltas must not register as a loss
    let mut closes = vec![200.0];
    closes.extend(rising(15, 100.0));
    let rsi = calculate_rsi_default(&closes).unwrap();
    let baseline = calculate_rsi_default(&rising(16, 100.0)).unwrap();
    assert!((rsi.value - baseline.value).abs() < 1e-9);
}

#[test]
fn test_rsi_known_value() {
    // Trailing window: 10 gains of 1.0 and 4 losses of 1.0 -> RS = 2.5
    let mut closes = vec![100.0];
    let mut price = 100.0;
    for step in 0..14 {
        price += if step < 10 { 1.0 } else { -1.0 };
        closes.push(price);
    }
    let rsi = calculate_rsi_default(&closes).unwrap();
    let expected = 100.0 - 100.0 / 3.5;
    assert!((rsi.value - expected).abs() < 1e-9);
}
