use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::benchmark::BenchmarkKey;
use crate::errors::Result;
use crate::series::{validate_ordering, Dated, Valued};

/// One portfolio valuation at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub date: NaiveDate,
    pub total_value: Decimal,
    /// Per-benchmark index values keyed by [`BenchmarkKey::as_str`].
    #[serde(default)]
    pub benchmark_values: HashMap<String, Option<Decimal>>,
    /// Single benchmark value recorded before per-benchmark values existed.
    #[serde(default, alias = "benchmarkValue")]
    pub legacy_benchmark_value: Option<Decimal>,
}

impl Snapshot {
    pub fn new(date: NaiveDate, total_value: Decimal) -> Self {
        Self {
            date,
            total_value,
            benchmark_values: HashMap::new(),
            legacy_benchmark_value: None,
        }
    }

    pub fn with_benchmark(mut self, key: BenchmarkKey, value: Option<Decimal>) -> Self {
        self.benchmark_values.insert(key.as_str().to_string(), value);
        self
    }

    pub fn with_legacy_benchmark(mut self, value: Decimal) -> Self {
        self.legacy_benchmark_value = Some(value);
        self
    }

    /// Keyed benchmark value; `None` when the key is missing or null.
    pub fn benchmark_value(&self, key: BenchmarkKey) -> Option<Decimal> {
        self.benchmark_values.get(key.as_str()).copied().flatten()
    }
}

impl Dated for Snapshot {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Valued for Snapshot {
    fn value(&self) -> Decimal {
        self.total_value
    }
}

/// Parses a snapshot array from JSON and checks date ordering.
pub fn snapshots_from_json(json: &str) -> Result<Vec<Snapshot>> {
    let snapshots: Vec<Snapshot> = serde_json::from_str(json)?;
    validate_ordering(&snapshots)?;
    Ok(snapshots)
}
