//! Notification policy: dedup of strong signals and calm-market throttling.

use crate::models::notification::Notification;
use crate::models::signal::{AnalysisResult, Signal};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Seconds that must strictly elapse between two calm-market notices.
pub const CALM_NOTICE_INTERVAL_SECS: i64 = 3600;

/// In-memory dedup and throttle state. Lives for the process lifetime only.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationState {
    /// Last strong signal that triggered a notification, per symbol.
    /// `Hold` never clears an entry.
    pub last_signal_sent: HashMap<String, Signal>,
    /// Time of the last calm-market notice; epoch until the first one.
    pub last_calm_notice_at: DateTime<Utc>,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            last_signal_sent: HashMap::new(),
            last_calm_notice_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

/// Notifications for one cycle and the state to carry into the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyDecision {
    pub notifications: Vec<Notification>,
    pub state: NotificationState,
}

impl PolicyDecision {
    /// True when at least one strong-signal notification fired this cycle.
    pub fn has_strong_signals(&self) -> bool {
        self.notifications
            .iter()
            .any(|n| matches!(n, Notification::StrongSignal { .. }))
    }
}

pub struct NotificationPolicy;

impl NotificationPolicy {
    /// Decide which notifications one cycle's results produce.
    ///
    /// Every per-symbol check reads `state` as it was at cycle start; updates
    /// only land in the returned state. Strong notices come out in input
    /// order, followed by the calm notice when no strong notice fired and
    /// more than an hour has passed since the previous calm notice.
    pub fn decide(
        state: &NotificationState,
        results: &[AnalysisResult],
        now: DateTime<Utc>,
    ) -> PolicyDecision {
        let mut next = state.clone();
        let mut notifications = Vec::new();

        for result in results.iter().filter(|r| r.signal.is_strong()) {
            if state.last_signal_sent.get(&result.symbol) == Some(&result.signal) {
                continue;
            }

            notifications.push(Notification::StrongSignal {
                symbol: result.symbol.clone(),
                signal: result.signal,
                price: result.price,
                rsi: result.rsi,
            });
            next.last_signal_sent.insert(result.symbol.clone(), result.signal);
        }

        let calm_due =
            now - state.last_calm_notice_at > Duration::seconds(CALM_NOTICE_INTERVAL_SECS);
        if notifications.is_empty() && calm_due {
            notifications.push(Notification::CalmMarket);
            next.last_calm_notice_at = now;
        }

        PolicyDecision {
            notifications,
            state: next,
        }
    }
}
