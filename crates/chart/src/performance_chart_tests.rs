//! Lifecycle tests for the performance chart controller.

use chrono::NaiveDate;
use std::sync::Arc;

use pulsefolio_core::benchmark::BenchmarkKey;
use pulsefolio_core::performance::{PerformanceService, PerformanceView};
use pulsefolio_core::series::Period;
use pulsefolio_core::snapshot::Snapshot;

use crate::recording::{ChartCall, RecordingChart, RecordingFactory};
use crate::{
    ChartLabels, ChartOptions, ChartStatus, CrosshairEvent, HoveredValues, PerformanceChart,
    SeriesColor, SharedHoverState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn labels(locale: &str) -> ChartLabels {
    ChartLabels {
        locale: locale.to_string(),
        primary_title: format!("Portfolio ({})", locale),
        benchmark_title: format!("Benchmark ({})", locale),
        recent_high_title: "High".to_string(),
    }
}

fn view(values: &[(NaiveDate, i64, Option<i64>)]) -> PerformanceView {
    let snapshots: Vec<Snapshot> = values
        .iter()
        .map(|&(d, total, bench)| {
            Snapshot::new(d, total.into())
                .with_benchmark(BenchmarkKey::Sp500, bench.map(Into::into))
        })
        .collect();
    PerformanceService::default().build_view(
        &snapshots,
        Period::All,
        BenchmarkKey::Sp500,
        date(2024, 12, 31),
    )
}

fn mount(
    factory: &mut RecordingFactory,
) -> (PerformanceChart<RecordingChart>, SharedHoverState) {
    let state = SharedHoverState::new();
    let chart = PerformanceChart::mount(
        factory,
        &ChartOptions::default(),
        labels("en"),
        Arc::new(state.clone()),
    );
    (chart, state)
}

#[test]
fn test_chart_created_once_across_updates() {
    let mut factory = RecordingFactory::new();
    let (mut chart, _) = mount(&mut factory);
    let chart_id = chart.chart().id();

    let first = view(&[
        (date(2024, 1, 1), 1000, Some(4000)),
        (date(2024, 2, 1), 1100, Some(4400)),
    ]);
    let second = view(&[
        (date(2024, 1, 1), 1000, Some(4000)),
        (date(2024, 2, 1), 900, Some(4400)),
        (date(2024, 3, 1), 950, Some(4600)),
    ]);

    assert_eq!(chart.update(&first), ChartStatus::Rendered);
    assert_eq!(chart.update(&second), ChartStatus::Rendered);

    assert_eq!(factory.charts_created(), 1);
    assert_eq!(chart.chart().id(), chart_id);
    assert_eq!(factory.series_data(chart.primary_series()).len(), 3);

    let fits = factory
        .calls()
        .iter()
        .filter(|c| **c == ChartCall::FitContent)
        .count();
    assert_eq!(fits, 1);
}

#[test]
fn test_colour_follows_direction() {
    let mut factory = RecordingFactory::new();
    let (mut chart, _) = mount(&mut factory);
    let primary = chart.primary_series();

    chart.update(&view(&[
        (date(2024, 1, 1), 100, None),
        (date(2024, 1, 2), 90, None),
    ]));
    assert_eq!(factory.series_options(primary).unwrap().color, SeriesColor::Loss);

    chart.update(&view(&[
        (date(2024, 1, 1), 100, None),
        (date(2024, 1, 2), 100, None),
    ]));
    assert_eq!(factory.series_options(primary).unwrap().color, SeriesColor::Gain);
}

#[test]
fn test_data_written_before_options() {
    let mut factory = RecordingFactory::new();
    let (mut chart, _) = mount(&mut factory);
    factory.clear_calls();

    chart.update(&view(&[
        (date(2024, 1, 1), 100, Some(10)),
        (date(2024, 1, 2), 90, Some(11)),
    ]));

    let calls = factory.calls();
    let last_data = calls
        .iter()
        .rposition(|c| matches!(c, ChartCall::SetData { .. }))
        .unwrap();
    let first_options = calls
        .iter()
        .position(|c| matches!(c, ChartCall::ApplyOptions { .. }))
        .unwrap();
    assert!(last_data < first_options);
}

#[test]
fn test_missing_benchmark_hides_line() {
    let mut factory = RecordingFactory::new();
    let (mut chart, _) = mount(&mut factory);
    let benchmark = chart.benchmark_series();

    chart.update(&view(&[
        (date(2024, 1, 1), 100, Some(10)),
        (date(2024, 1, 2), 110, Some(11)),
    ]));
    assert!(factory.series_options(benchmark).unwrap().visible);

    let status = chart.update(&view(&[
        (date(2024, 1, 1), 100, None),
        (date(2024, 1, 2), 110, None),
    ]));
    match status {
        ChartStatus::RenderedWithoutBenchmark(Some(notice)) => {
            assert_eq!(notice.key, BenchmarkKey::Sp500);
        }
        other => panic!("expected missing benchmark, got {:?}", other),
    }
    assert!(!factory.series_options(benchmark).unwrap().visible);
    assert!(factory.series_data(benchmark).is_empty());
}

#[test]
fn test_insufficient_data_clears_series() {
    let mut factory = RecordingFactory::new();
    let (mut chart, _) = mount(&mut factory);

    chart.update(&view(&[
        (date(2024, 1, 1), 100, Some(10)),
        (date(2024, 1, 2), 110, Some(11)),
    ]));
    let status = chart.update(&view(&[(date(2024, 1, 1), 100, Some(10))]));

    assert_eq!(status, ChartStatus::InsufficientData { available: 1 });
    assert!(factory.series_data(chart.primary_series()).is_empty());
    assert!(factory.series_data(chart.benchmark_series()).is_empty());
    assert_eq!(factory.charts_created(), 1);
}

#[test]
fn test_crosshair_publishes_and_clears_hover() {
    let mut factory = RecordingFactory::new();
    let (chart, state) = mount(&mut factory);

    factory.fire_crosshair(&CrosshairEvent::at(
        date(2024, 2, 1),
        [(chart.primary_series(), 5.0), (chart.benchmark_series(), 2.5)],
    ));
    assert_eq!(
        state.current(),
        Some(HoveredValues {
            date: date(2024, 2, 1),
            primary: 5.0,
            benchmark: Some(2.5),
        })
    );

    factory.fire_crosshair(&CrosshairEvent::left());
    assert_eq!(state.current(), None);
    assert_eq!(state.update_count(), 2);
}

#[test]
fn test_dispose_clears_hover_state() {
    let mut factory = RecordingFactory::new();
    let (chart, state) = mount(&mut factory);

    factory.fire_crosshair(&CrosshairEvent::at(
        date(2024, 2, 1),
        [(chart.primary_series(), 5.0)],
    ));
    assert!(state.current().is_some());

    chart.dispose();
    assert_eq!(state.current(), None);
    assert_eq!(state.update_count(), 2);
    assert_eq!(factory.active_subscriptions(), 0);
}

#[test]
fn test_labels_reapplied_when_only_benchmark_changes() {
    let mut factory = RecordingFactory::new();
    let (mut chart, _) = mount(&mut factory);
    factory.clear_calls();

    let nasdaq = ChartLabels {
        benchmark_title: "Nasdaq 100".to_string(),
        ..labels("en")
    };
    assert!(chart.apply_labels(&nasdaq));
    assert_eq!(
        factory
            .series_options(chart.benchmark_series())
            .unwrap()
            .title,
        "Nasdaq 100"
    );
    assert_eq!(
        factory.series_options(chart.primary_series()).unwrap().title,
        "Portfolio (en)"
    );
    assert!(!chart.apply_labels(&nasdaq));

    let applied = factory
        .calls()
        .iter()
        .filter(|c| matches!(c, ChartCall::ApplyOptions { .. }))
        .count();
    assert_eq!(applied, 2);
    assert_eq!(factory.charts_created(), 1);
}

#[test]
fn test_labels_reapplied_only_on_change() {
    let mut factory = RecordingFactory::new();
    let (mut chart, _) = mount(&mut factory);

    assert!(!chart.apply_labels(&labels("en")));
    assert!(chart.apply_labels(&labels("fr")));
    assert_eq!(
        factory.series_options(chart.primary_series()).unwrap().title,
        "Portfolio (fr)"
    );
    assert_eq!(
        factory
            .series_options(chart.benchmark_series())
            .unwrap()
            .title,
        "Benchmark (fr)"
    );
    assert_eq!(factory.charts_created(), 1);
}

#[test]
fn test_drop_unsubscribes_before_remove() {
    let mut factory = RecordingFactory::new();
    {
        let (_chart, _) = mount(&mut factory);
        assert_eq!(factory.active_subscriptions(), 1);
    }
    assert_eq!(factory.active_subscriptions(), 0);

    let calls = factory.calls();
    let unsubscribe = calls
        .iter()
        .position(|c| matches!(c, ChartCall::Unsubscribe { .. }))
        .unwrap();
    let remove = calls
        .iter()
        .position(|c| matches!(c, ChartCall::Remove { .. }))
        .unwrap();
    assert!(unsubscribe < remove);
}

#[test]
fn test_dispose_tears_down_once() {
    let mut factory = RecordingFactory::new();
    let (chart, _) = mount(&mut factory);
    chart.dispose();

    let removes = factory
        .calls()
        .iter()
        .filter(|c| matches!(c, ChartCall::Remove { .. }))
        .count();
    assert_eq!(removes, 1);
}
