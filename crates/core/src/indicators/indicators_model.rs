use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Highest value in the trailing window and whether the latest point sits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentHigh {
    pub high: Decimal,
    pub high_date: NaiveDate,
    pub current: Decimal,
    pub current_date: NaiveDate,
    pub at_high: bool,
    /// Number of points the high was taken over.
    pub window_len: usize,
}

/// Consecutive strictly-increasing steps ending at the latest point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current: usize,
    pub threshold: usize,
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSummary {
    pub recent_high: Option<RecentHigh>,
    pub streak: Streak,
    pub alert_active: bool,
}

/// Sort key for alert-first ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlertRank {
    pub alert: bool,
    pub active: bool,
}

impl AlertRank {
    pub fn new(alert: bool, active: bool) -> Self {
        Self { alert, active }
    }
}
