use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::performance::ReturnSeries;

/// Reference index a portfolio can be compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum BenchmarkKey {
    /// Broad US large-cap index; also the key the legacy single-benchmark
    /// field was recorded for.
    #[default]
    Sp500,
    Nasdaq100,
    DowJones,
    Russell2000,
    /// Total-market index fund.
    TotalMarket,
}

impl BenchmarkKey {
    pub const ALL: [BenchmarkKey; 5] = [
        BenchmarkKey::Sp500,
        BenchmarkKey::Nasdaq100,
        BenchmarkKey::DowJones,
        BenchmarkKey::Russell2000,
        BenchmarkKey::TotalMarket,
    ];

    /// Key under which snapshots store this benchmark's value.
    pub fn as_str(&self) -> &'static str {
        match self {
            BenchmarkKey::Sp500 => "sp500",
            BenchmarkKey::Nasdaq100 => "nasdaq100",
            BenchmarkKey::DowJones => "dowJones",
            BenchmarkKey::Russell2000 => "russell2000",
            BenchmarkKey::TotalMarket => "totalMarket",
        }
    }
}

impl fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenchmarkKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BenchmarkKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownBenchmark(s.to_string()))
    }
}

/// Action the UI can offer when a benchmark has no data for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Remediation {
    /// Fetch benchmark history for the window's date range.
    Backfill { from: NaiveDate, to: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkNotice {
    pub key: BenchmarkKey,
    pub resolved_points: usize,
    pub remediation: Option<Remediation>,
}

/// Benchmark comparison for a window. Unavailability is separate from the
/// primary series' own data sufficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BenchmarkOutcome {
    #[serde(rename_all = "camelCase")]
    Available {
        key: BenchmarkKey,
        series: ReturnSeries,
    },
    Unavailable(BenchmarkNotice),
}

impl BenchmarkOutcome {
    pub fn key(&self) -> BenchmarkKey {
        match self {
            BenchmarkOutcome::Available { key, .. } => *key,
            BenchmarkOutcome::Unavailable(notice) => notice.key,
        }
    }

    pub fn series(&self) -> Option<&ReturnSeries> {
        match self {
            BenchmarkOutcome::Available { series, .. } => Some(series),
            BenchmarkOutcome::Unavailable(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&BenchmarkNotice> {
        match self {
            BenchmarkOutcome::Unavailable(notice) => Some(notice),
            BenchmarkOutcome::Available { .. } => None,
        }
    }
}
