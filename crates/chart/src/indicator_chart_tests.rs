use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pulsefolio_core::indicators::IndicatorSummary;
use pulsefolio_core::series::ValuePoint;
use pulsefolio_core::settings::AnalyticsSettings;

use crate::recording::{ChartCall, RecordingFactory};
use crate::{ChartLabels, ChartOptions, IndicatorChart, LineStyle, SeriesColor};

fn series(values: &[Decimal]) -> Vec<ValuePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ValuePoint::new(start + Duration::days(i as i64), *v))
        .collect()
}

fn labels(high: &str) -> ChartLabels {
    ChartLabels {
        locale: "en".to_string(),
        primary_title: "EUR/USD".to_string(),
        benchmark_title: String::new(),
        recent_high_title: high.to_string(),
    }
}

#[test]
fn test_price_line_drawn_after_data() {
    let mut factory = RecordingFactory::new();
    let mut chart = IndicatorChart::mount(&mut factory, &ChartOptions::default(), labels("High"));
    factory.clear_calls();

    let values = series(&[dec!(108), dec!(112), dec!(110)]);
    let summary = IndicatorSummary::evaluate(&values, &AnalyticsSettings::default());
    chart.update(&values, &summary);

    let calls = factory.calls();
    let data = calls
        .iter()
        .position(|c| matches!(c, ChartCall::SetData { .. }))
        .unwrap();
    let line = calls
        .iter()
        .position(|c| matches!(c, ChartCall::CreatePriceLine { .. }))
        .unwrap();
    assert!(data < line);

    let lines = factory.price_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].1, chart.series());
    assert_eq!(lines[0].2.price, 112.0);
    assert_eq!(lines[0].2.line_style, LineStyle::Dashed);
}

#[test]
fn test_price_line_replaced_on_update() {
    let mut factory = RecordingFactory::new();
    let mut chart = IndicatorChart::mount(&mut factory, &ChartOptions::default(), labels("High"));
    let settings = AnalyticsSettings::default();

    let first = series(&[dec!(10), dec!(12)]);
    chart.update(&first, &IndicatorSummary::evaluate(&first, &settings));
    let second = series(&[dec!(10), dec!(12), dec!(15)]);
    chart.update(&second, &IndicatorSummary::evaluate(&second, &settings));

    let lines = factory.price_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].2.price, 15.0);
    assert_eq!(factory.charts_created(), 1);
}

#[test]
fn test_alert_highlights_series() {
    let mut factory = RecordingFactory::new();
    let mut chart = IndicatorChart::mount(&mut factory, &ChartOptions::default(), labels("High"));

    let rising = series(&[dec!(1), dec!(2), dec!(3), dec!(4)]);
    let summary = IndicatorSummary::evaluate(&rising, &AnalyticsSettings::default());
    assert!(summary.alert_active);
    chart.update(&rising, &summary);

    let options = factory.series_options(chart.series()).unwrap();
    assert_eq!(options.color, SeriesColor::Highlight);
}

#[test]
fn test_labels_redraw_price_line_title() {
    let mut factory = RecordingFactory::new();
    let mut chart = IndicatorChart::mount(&mut factory, &ChartOptions::default(), labels("High"));
    let values = series(&[dec!(3), dec!(2)]);
    chart.update(
        &values,
        &IndicatorSummary::evaluate(&values, &AnalyticsSettings::default()),
    );

    assert!(!chart.apply_labels(&labels("High")));
    assert!(chart.apply_labels(&labels("Plus haut")));
    let lines = factory.price_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].2.title, "Plus haut");
    assert_eq!(lines[0].2.price, 3.0);
}

#[test]
fn test_drop_removes_price_line_and_chart() {
    let mut factory = RecordingFactory::new();
    {
        let mut chart =
            IndicatorChart::mount(&mut factory, &ChartOptions::default(), labels("High"));
        let values = series(&[dec!(3), dec!(4)]);
        chart.update(
            &values,
            &IndicatorSummary::evaluate(&values, &AnalyticsSettings::default()),
        );
    }
    assert!(factory.price_lines().is_empty());
    assert!(matches!(
        factory.calls().last(),
        Some(ChartCall::Remove { .. })
    ));
}
