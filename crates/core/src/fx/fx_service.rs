use chrono::NaiveDate;
use log::debug;

use super::fx_model::{FxHistory, FxTrend};
use crate::indicators::IndicatorSummary;
use crate::performance::cumulative_returns;
use crate::series::{window, Period};
use crate::settings::AnalyticsSettings;

/// Windows a pair's history and derives its return and indicators.
///
/// Indicators run over the windowed raw closes, so the recent high is never
/// taken from outside the selected period.
pub fn fx_trend(
    history: &FxHistory,
    period: Period,
    today: NaiveDate,
    settings: &AnalyticsSettings,
) -> FxTrend {
    let windowed = window(history.points(), period, today);
    debug!(
        "FX {} {}: {} of {} points in window",
        history.pair,
        period,
        windowed.len(),
        history.points().len()
    );

    FxTrend {
        pair: history.pair.clone(),
        period,
        latest: history.latest().copied(),
        returns: cumulative_returns(windowed),
        indicators: IndicatorSummary::evaluate(windowed, settings),
    }
}
