//! Unit tests for the signal analyzer

use crate::common_series::{choppy, falling, rising};
use rsi_scanner::error::ScanError;
use rsi_scanner::models::Signal;
use rsi_scanner::signals::analyzer::{SignalAnalyzer, MIN_CLOSES};

#[test]
fn test_classify_boundaries_are_hold() {
    assert_eq!(SignalAnalyzer::classify(30.0), Signal::Hold);
    assert_eq!(SignalAnalyzer::classify(70.0), Signal::Hold);
}

#[test]
fn test_classify_just_outside_boundaries() {
    assert_eq!(SignalAnalyzer::classify(29.999), Signal::StrongBuy);
    assert_eq!(SignalAnalyzer::classify(70.001), Signal::StrongSell);
    assert_eq!(SignalAnalyzer::classify(50.0), Signal::Hold);
}

#[test]
fn test_analyze_uptrend_is_strong_sell() {
    let closes = rising(16, 100.0);
    let result = SignalAnalyzer::analyze("BTCUSDT", &closes).unwrap();
    assert_eq!(result.symbol, "BTCUSDT");
    assert_eq!(result.signal, Signal::StrongSell);
    assert_eq!(result.price, 115.0);
    assert!(result.rsi > 70.0 && result.rsi < 100.0);
}

#[test]
fn test_analyze_downtrend_is_strong_buy() {
    let result = SignalAnalyzer::analyze("ETHUSDT", &falling(100, 500.0)).unwrap();
    assert_eq!(result.signal, Signal::StrongBuy);
    assert_eq!(result.price, 401.0);
}

#[test]
fn test_analyze_balanced_is_hold() {
    let result = SignalAnalyzer::analyze("SOLUSDT", &choppy(30, 20.0)).unwrap();
    assert_eq!(result.signal, Signal::Hold);
}

#[test]
fn test_analyze_insufficient_data() {
    let err = SignalAnalyzer::analyze("XRPUSDT", &rising(10, 1.0)).unwrap_err();
    match err {
        ScanError::InsufficientData {
            symbol,
            required,
            actual,
        } => {
            assert_eq!(symbol, "XRPUSDT");
            assert_eq!(required, MIN_CLOSES);
            assert_eq!(actual, 10);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_analyze_empty_series() {
    assert!(matches!(
        SignalAnalyzer::analyze("BNBUSDT", &[]),
        Err(ScanError::InsufficientData { actual: 0, .. })
    ));
}
