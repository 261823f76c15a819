//! Unit tests for series model, periods and windowing.

use super::*;
use crate::errors::{Error, ValidationError};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn daily_series(start: NaiveDate, values: &[i64]) -> Vec<ValuePoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ValuePoint::new(start + chrono::Duration::days(i as i64), (*v).into()))
        .collect()
}

#[test]
fn test_value_series_rejects_unordered_dates() {
    let points = vec![
        ValuePoint::new(date(2024, 1, 2), dec!(1)),
        ValuePoint::new(date(2024, 1, 1), dec!(2)),
    ];
    match ValueSeries::new(points) {
        Err(Error::Validation(ValidationError::UnorderedSeries { index, date: d })) => {
            assert_eq!(index, 1);
            assert_eq!(d, date(2024, 1, 1));
        }
        other => panic!("expected unordered series error, got {:?}", other),
    }
}

#[test]
fn test_value_series_rejects_duplicate_dates() {
    let points = vec![
        ValuePoint::new(date(2024, 1, 1), dec!(1)),
        ValuePoint::new(date(2024, 1, 1), dec!(2)),
    ];
    assert!(ValueSeries::new(points).is_err());
}

#[test]
fn test_value_series_accepts_sparse_series() {
    let points = vec![
        ValuePoint::new(date(2024, 1, 1), dec!(1)),
        ValuePoint::new(date(2024, 6, 1), dec!(2)),
    ];
    let series = ValueSeries::new(points).unwrap();
    assert_eq!(series.len(), 2);
}

#[test]
fn test_from_unsorted_sorts_and_keeps_last_duplicate() {
    let series = ValueSeries::from_unsorted(vec![
        ValuePoint::new(date(2024, 1, 3), dec!(3)),
        ValuePoint::new(date(2024, 1, 1), dec!(1)),
        ValuePoint::new(date(2024, 1, 3), dec!(4)),
    ]);
    let values: Vec<_> = series.points().iter().map(|p| p.value).collect();
    assert_eq!(values, vec![dec!(1), dec!(4)]);
}

#[test]
fn test_value_series_deserialize_validates_order() {
    let ok = r#"[{"date":"2024-01-01","value":1.5},{"date":"2024-01-02","value":2}]"#;
    let series: ValueSeries = serde_json::from_str(ok).unwrap();
    assert_eq!(series.last().unwrap().value, dec!(2));

    let bad = r#"[{"date":"2024-01-02","value":1},{"date":"2024-01-01","value":2}]"#;
    assert!(serde_json::from_str::<ValueSeries>(bad).is_err());
}

#[test]
fn test_period_cutoffs() {
    let today = date(2024, 3, 15);
    assert_eq!(Period::Days(30).cutoff(today), Some(date(2024, 2, 14)));
    assert_eq!(Period::YearToDate.cutoff(today), Some(date(2024, 1, 1)));
    assert_eq!(Period::All.cutoff(today), None);
}

#[test]
fn test_period_parse_and_display() {
    assert_eq!("1m".parse::<Period>().unwrap(), Period::ONE_MONTH);
    assert_eq!("ytd".parse::<Period>().unwrap(), Period::YearToDate);
    assert_eq!(" ALL ".parse::<Period>().unwrap(), Period::All);
    assert_eq!("45D".parse::<Period>().unwrap(), Period::Days(45));
    assert!("2Q".parse::<Period>().is_err());

    for period in Period::presets() {
        assert_eq!(period.to_string().parse::<Period>().unwrap(), period);
    }
    assert_eq!(Period::Days(45).to_string(), "45D");
}

#[test]
fn test_period_serde_uses_selector_strings() {
    let json = serde_json::to_string(&Period::SIX_MONTHS).unwrap();
    assert_eq!(json, "\"6M\"");
    let parsed: Period = serde_json::from_str("\"YTD\"").unwrap();
    assert_eq!(parsed, Period::YearToDate);
}

#[test]
fn test_window_days_includes_cutoff_date() {
    let series = daily_series(date(2024, 1, 1), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let today = date(2024, 1, 10);

    let windowed = window(&series, Period::Days(3), today);
    let dates: Vec<_> = windowed.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2024, 1, 7), date(2024, 1, 8), date(2024, 1, 9), date(2024, 1, 10)]);
}

#[test]
fn test_window_year_to_date() {
    let series = vec![
        ValuePoint::new(date(2023, 12, 29), dec!(1)),
        ValuePoint::new(date(2023, 12, 31), dec!(2)),
        ValuePoint::new(date(2024, 1, 2), dec!(3)),
        ValuePoint::new(date(2024, 2, 1), dec!(4)),
    ];
    let windowed = window(&series, Period::YearToDate, date(2024, 2, 10));
    assert_eq!(windowed.len(), 2);
    assert_eq!(windowed[0].date, date(2024, 1, 2));
}

#[test]
fn test_window_all_returns_full_series() {
    let series = daily_series(date(2020, 1, 1), &[5, 6, 7]);
    let windowed = window(&series, Period::All, date(2024, 1, 1));
    assert_eq!(windowed, &series[..]);
}

#[test]
fn test_window_lookback_past_calendar_range_keeps_everything() {
    let series = daily_series(date(2024, 1, 1), &[1, 2, 3]);
    let today = date(2024, 3, 1);

    let huge: Period = "100000000D".parse().unwrap();
    assert_eq!(huge.cutoff(today), None);
    assert_eq!(window(&series, huge, today), &series[..]);
    assert_eq!(window(&series, Period::Days(u32::MAX), today), &series[..]);
}

#[test]
fn test_window_flags_insufficient_data() {
    let series = daily_series(date(2024, 1, 1), &[1, 2, 3]);
    let windowed = window(&series, Period::Days(0), date(2024, 1, 3));
    assert_eq!(windowed.len(), 1);
    assert!(!has_sufficient_points(windowed));

    let empty: Vec<ValuePoint> = Vec::new();
    assert!(window(&empty, Period::ONE_YEAR, date(2024, 1, 3)).is_empty());
}

#[test]
fn test_window_is_stable_across_calls() {
    let series = daily_series(date(2024, 1, 1), &[1, 2, 3, 4]);
    let today = date(2024, 1, 4);
    let first = window(&series, Period::Days(2), today);
    let second = window(&series, Period::Days(2), today);
    assert_eq!(first.as_ptr(), second.as_ptr());
    assert_eq!(first.len(), second.len());
}
