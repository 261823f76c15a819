use serde::{Deserialize, Serialize};

use crate::benchmark::BenchmarkKey;
use crate::series::Period;

/// Tunables for the analytics core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSettings {
    /// Number of trailing points the recent high is taken over.
    pub recent_high_window: usize,
    /// Consecutive increases needed before a streak raises an alert; 0 disables.
    pub streak_alert_threshold: usize,
    /// Whether sitting at the recent high raises an alert.
    pub alert_on_recent_high: bool,
    /// Benchmark the legacy single-benchmark snapshot field belongs to.
    pub legacy_benchmark: BenchmarkKey,
    pub default_benchmark: BenchmarkKey,
    pub default_period: Period,
    /// Display locale passed through to chart decorations.
    pub locale: String,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            recent_high_window: 20,
            streak_alert_threshold: 3,
            alert_on_recent_high: true,
            legacy_benchmark: BenchmarkKey::Sp500,
            default_benchmark: BenchmarkKey::Sp500,
            default_period: Period::ONE_YEAR,
            locale: "en".to_string(),
        }
    }
}
