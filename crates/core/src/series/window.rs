//! Windowing of date-ordered series into relative lookback periods.

use chrono::NaiveDate;

use super::{Dated, Period};
use crate::constants::MIN_SERIES_POINTS;

/// Returns the contiguous suffix of `series` whose dates are on or after the
/// period's cutoff.
///
/// `series` must be ordered by date; the result borrows from it, so repeated
/// calls with the same inputs always yield the same slice.
pub fn window<T: Dated>(series: &[T], period: Period, today: NaiveDate) -> &[T] {
    match period.cutoff(today) {
        Some(cutoff) => {
            let start = series.partition_point(|point| point.date() < cutoff);
            &series[start..]
        }
        None => series,
    }
}

/// [`window`] anchored on the local calendar date.
pub fn window_today<T: Dated>(series: &[T], period: Period) -> &[T] {
    window(series, period, today())
}

/// True when the window holds enough points to derive a return.
pub fn has_sufficient_points<T>(window: &[T]) -> bool {
    window.len() >= MIN_SERIES_POINTS
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
