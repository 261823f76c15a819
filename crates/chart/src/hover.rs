//! Hover state sinks and header display resolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

use pulsefolio_core::performance::PeriodSummary;

/// Series values under the crosshair, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoveredValues {
    pub date: NaiveDate,
    pub primary: f64,
    pub benchmark: Option<f64>,
}

/// Receives hover updates from a chart's crosshair subscription.
///
/// `publish` runs inside the charting library's callback, so it must be fast
/// and must not call back into the chart. `None` means the pointer left the
/// plot and the header should fall back to the period summary.
pub trait HoverSink: Send + Sync {
    fn publish(&self, hovered: Option<HoveredValues>);
}

/// Discards hover updates.
#[derive(Clone, Default)]
pub struct NoOpHoverSink;

impl HoverSink for NoOpHoverSink {
    fn publish(&self, _hovered: Option<HoveredValues>) {}
}

/// Keeps the latest hover value for a header component to read.
#[derive(Clone, Default)]
pub struct SharedHoverState {
    current: Arc<Mutex<Option<HoveredValues>>>,
    updates: Arc<Mutex<usize>>,
}

impl SharedHoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<HoveredValues> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of updates published so far.
    pub fn update_count(&self) -> usize {
        *self.updates.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HoverSink for SharedHoverState {
    fn publish(&self, hovered: Option<HoveredValues>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = hovered;
        *self.updates.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }
}

/// What the performance header shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum HeaderDisplay {
    /// Values at the hovered date.
    #[serde(rename_all = "camelCase")]
    Hover {
        date: NaiveDate,
        primary_text: String,
        benchmark_text: Option<String>,
    },
    /// Whole-period return.
    #[serde(rename_all = "camelCase")]
    Period {
        start_date: NaiveDate,
        end_date: NaiveDate,
        text: String,
    },
    InsufficientData,
}

impl HeaderDisplay {
    /// Hover wins over the period summary; with neither there is nothing to show.
    pub fn resolve(summary: Option<&PeriodSummary>, hovered: Option<&HoveredValues>) -> Self {
        if let Some(h) = hovered {
            return HeaderDisplay::Hover {
                date: h.date,
                primary_text: format_hover_percent(h.primary),
                benchmark_text: h.benchmark.map(format_hover_percent),
            };
        }
        match summary {
            Some(s) => HeaderDisplay::Period {
                start_date: s.start_date,
                end_date: s.end_date,
                text: s.text.clone(),
            },
            None => HeaderDisplay::InsufficientData,
        }
    }
}

fn format_hover_percent(value: f64) -> String {
    // Avoid rendering "-0.00%".
    let rounded = (value * 100.0).round() / 100.0;
    let value = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:+.2}%", value)
}
