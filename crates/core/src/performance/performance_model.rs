use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPoint {
    pub date: NaiveDate,
    /// Cumulative return in percent, 0 at the window start.
    pub value: Decimal,
}

/// Gain or loss over a window, decided by the sign of the final return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Gain,
    Loss,
}

impl Direction {
    pub fn from_return(value: Decimal) -> Self {
        if value.is_sign_negative() && !value.is_zero() {
            Direction::Loss
        } else {
            Direction::Gain
        }
    }

    pub fn is_gain(&self) -> bool {
        matches!(self, Direction::Gain)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetrics {
    /// Annualized return in percent. Equals the period return for windows
    /// shorter than a year.
    pub annualized_return: Decimal,
    /// Largest peak-to-trough decline in percent, reported as a positive number.
    pub max_drawdown: Decimal,
}

/// A cumulative return series rebased on its own first point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnSeries {
    pub points: Vec<ReturnPoint>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// First/last return in percent, used for the header summary.
    pub period_return: Decimal,
    pub direction: Direction,
    pub metrics: PeriodMetrics,
}

impl ReturnSeries {
    pub fn value_at(&self, date: NaiveDate) -> Option<Decimal> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| self.points[idx].value)
    }

    pub fn last_value(&self) -> Option<Decimal> {
        self.points.last().map(|p| p.value)
    }
}

/// Result of deriving returns over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ReturnOutcome {
    /// Fewer than two points were available; no return can be derived.
    #[serde(rename_all = "camelCase")]
    InsufficientData { available: usize },
    Available(ReturnSeries),
}

impl ReturnOutcome {
    pub fn series(&self) -> Option<&ReturnSeries> {
        match self {
            ReturnOutcome::Available(series) => Some(series),
            ReturnOutcome::InsufficientData { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ReturnOutcome::Available(_))
    }

    pub fn period_return(&self) -> Option<Decimal> {
        self.series().map(|s| s.period_return)
    }
}
