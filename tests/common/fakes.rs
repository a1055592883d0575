//! In-memory collaborators for runtime and scheduler tests.

#![allow(dead_code)]

use async_trait::async_trait;
use rsi_scanner::error::{DeliveryError, FetchError};
use rsi_scanner::services::{KlineInterval, MessageSink, PriceHistoryProvider};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Serves fixed close series per symbol; unknown symbols fail as upstream errors.
#[derive(Default)]
pub struct StaticProvider {
    series: Mutex<HashMap<String, Vec<f64>>>,
    calls: Mutex<Vec<String>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(self, symbol: &str, closes: Vec<f64>) -> Self {
        self.set_series(symbol, closes);
        self
    }

    pub fn set_series(&self, symbol: &str, closes: Vec<f64>) {
        self.series
            .lock()
            .unwrap()
            .insert(symbol.to_string(), closes);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceHistoryProvider for StaticProvider {
    async fn fetch_closes(
        &self,
        symbol: &str,
        _interval: KlineInterval,
        limit: u16,
    ) -> Result<Vec<f64>, FetchError> {
        self.calls.lock().unwrap().push(symbol.to_string());
        match self.series.lock().unwrap().get(symbol) {
            Some(closes) => {
                let skip = closes.len().saturating_sub(limit as usize);
                Ok(closes[skip..].to_vec())
            }
            None => Err(FetchError::Api {
                code: -1121,
                msg: "Invalid symbol.".to_string(),
            }),
        }
    }
}

/// Records every message; optionally fails every delivery.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<String>>,
    attempts: AtomicUsize,
    fail: AtomicBool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let sink = Self::default();
        sink.fail.store(true, Ordering::SeqCst);
        sink
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(DeliveryError::Rejected {
                status: 502,
                description: "Bad Gateway".to_string(),
            });
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
