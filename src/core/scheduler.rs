//! Interval-based scheduler that drives the scanner runtime

use crate::core::runtime::ScannerRuntime;
use crate::error::ScanError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Runs one scan cycle immediately, then one every `interval`, until stopped.
pub struct ScanScheduler {
    interval: Duration,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a new scheduler. A zero interval is rejected.
    pub fn new(interval: Duration) -> Result<Self, ScanError> {
        if interval.is_zero() {
            return Err(ScanError::Config(
                "Scheduler disabled: scan interval is 0".to_string(),
            ));
        }

        info!(
            interval_secs = interval.as_secs_f64(),
            "ScanScheduler: created with interval {:?}", interval
        );

        Ok(Self {
            interval,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the scheduler, taking ownership of the runtime and its state.
    pub async fn start(&self, mut runtime: ScannerRuntime) -> Result<(), ScanError> {
        let mut guard = self.handle.write().await;
        if guard.as_ref().is_some_and(|h| !h.is_finished()) {
            return Err(ScanError::Config(
                "ScanScheduler is already running".to_string(),
            ));
        }

        let interval = self.interval;
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let report = runtime.run_cycle().await;
                debug!(
                    analyzed = report.results.len(),
                    skipped = report.skipped.len(),
                    "ScanScheduler: cycle finished"
                );
            }
        });

        *guard = Some(handle);
        info!("ScanScheduler: started");
        Ok(())
    }

    /// Stop the scheduler. Any cycle in flight is cancelled.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ScanScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
