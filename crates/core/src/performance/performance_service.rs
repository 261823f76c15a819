use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{cumulative_returns, format_percent, ReturnOutcome};
use crate::benchmark::{BenchmarkKey, BenchmarkOutcome, BenchmarkResolver};
use crate::constants::DECIMAL_PRECISION;
use crate::series::{today, window, Period};
use crate::settings::AnalyticsSettings;
use crate::snapshot::Snapshot;

/// Header text for the selected period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Signed percentage such as `+10.00%`.
    pub text: String,
}

/// Everything the performance card and chart need for one period and
/// benchmark selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceView {
    pub period: Period,
    pub primary: ReturnOutcome,
    /// `None` when the primary series itself has insufficient data.
    pub benchmark: Option<BenchmarkOutcome>,
    pub summary: Option<PeriodSummary>,
    /// Primary minus benchmark period return, in percentage points.
    pub excess_return: Option<Decimal>,
}

impl PerformanceView {
    pub fn benchmark_key(&self) -> Option<BenchmarkKey> {
        self.benchmark.as_ref().map(BenchmarkOutcome::key)
    }
}

/// Derives performance views from snapshot histories.
///
/// Stateless apart from the resolution chain; every call re-derives from its
/// inputs, so it is safe to call on each selection change.
pub struct PerformanceService {
    resolver: BenchmarkResolver,
}

impl PerformanceService {
    pub fn new(settings: &AnalyticsSettings) -> Self {
        Self {
            resolver: BenchmarkResolver::standard(settings.legacy_benchmark),
        }
    }

    pub fn with_resolver(resolver: BenchmarkResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &BenchmarkResolver {
        &self.resolver
    }

    /// Windows, rebases and compares `snapshots` as of `today`.
    pub fn build_view(
        &self,
        snapshots: &[Snapshot],
        period: Period,
        benchmark: BenchmarkKey,
        today: NaiveDate,
    ) -> PerformanceView {
        let windowed = window(snapshots, period, today);
        let primary = cumulative_returns(windowed);

        let Some(primary_series) = primary.series() else {
            debug!(
                "Performance view {}: insufficient data ({} of {} snapshots in window)",
                period,
                windowed.len(),
                snapshots.len()
            );
            return PerformanceView {
                period,
                primary,
                benchmark: None,
                summary: None,
                excess_return: None,
            };
        };

        let summary = PeriodSummary {
            start_date: primary_series.start_date,
            end_date: primary_series.end_date,
            text: format_percent(primary_series.period_return),
        };

        let benchmark_outcome = self.resolver.compare(windowed, benchmark);
        let excess_return = benchmark_outcome.series().and_then(|bench| {
            primary_series
                .period_return
                .checked_sub(bench.period_return)
                .map(|excess| excess.round_dp(DECIMAL_PRECISION))
        });

        PerformanceView {
            period,
            summary: Some(summary),
            benchmark: Some(benchmark_outcome),
            excess_return,
            primary,
        }
    }

    /// [`Self::build_view`] anchored on the local calendar date.
    pub fn build_view_today(
        &self,
        snapshots: &[Snapshot],
        period: Period,
        benchmark: BenchmarkKey,
    ) -> PerformanceView {
        self.build_view(snapshots, period, benchmark, today())
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new(&AnalyticsSettings::default())
    }
}
