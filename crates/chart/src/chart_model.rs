//! Value types exchanged with the charting library.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Handle to a series owned by a chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub u32);

/// Handle to a horizontal price line attached to a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PriceLineId(pub u32);

/// Handle to a registered crosshair callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Gain,
    Loss,
    Benchmark,
    Neutral,
    Highlight,
}

impl SeriesColor {
    pub fn hex(&self) -> &'static str {
        match self {
            SeriesColor::Gain => "#16a34a",
            SeriesColor::Loss => "#dc2626",
            SeriesColor::Benchmark => "#94a3b8",
            SeriesColor::Neutral => "#2563eb",
            SeriesColor::Highlight => "#f59e0b",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesOptions {
    pub title: String,
    pub color: SeriesColor,
    pub line_width: u8,
    pub line_style: LineStyle,
    pub visible: bool,
}

impl SeriesOptions {
    pub fn line(title: impl Into<String>, color: SeriesColor) -> Self {
        Self {
            title: title.into(),
            color,
            line_width: 2,
            line_style: LineStyle::Solid,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceLineOptions {
    pub price: f64,
    pub title: String,
    pub color: SeriesColor,
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub height: u32,
    /// Render the value axis as percentages.
    pub percent_axis: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: 300,
            percent_axis: true,
        }
    }
}

/// Pointer movement over the plot area.
///
/// `time` is `None` once the pointer has left the plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrosshairEvent {
    pub time: Option<NaiveDate>,
    pub values: HashMap<SeriesId, f64>,
}

impl CrosshairEvent {
    pub fn at(time: NaiveDate, values: impl IntoIterator<Item = (SeriesId, f64)>) -> Self {
        Self {
            time: Some(time),
            values: values.into_iter().collect(),
        }
    }

    pub fn left() -> Self {
        Self::default()
    }

    pub fn value_of(&self, series: SeriesId) -> Option<f64> {
        self.values.get(&series).copied()
    }
}

/// Locale-dependent text applied to chart series.
///
/// Supplied by the caller; the chart never derives text on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartLabels {
    pub locale: String,
    pub primary_title: String,
    pub benchmark_title: String,
    pub recent_high_title: String,
}
