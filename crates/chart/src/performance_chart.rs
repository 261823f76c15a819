//! Persistent primary-versus-benchmark return chart.

use log::{debug, warn};
use std::sync::Arc;

use pulsefolio_core::benchmark::{BenchmarkNotice, BenchmarkOutcome};
use pulsefolio_core::performance::{Direction, PerformanceView, ReturnOutcome};

use crate::chart_model::{
    ChartLabels, ChartOptions, CrosshairEvent, LineStyle, SeriesColor, SeriesId, SeriesOptions,
    SubscriptionId,
};
use crate::chart_traits::{ChartApi, ChartFactory};
use crate::convert::return_points;
use crate::hover::{HoverSink, HoveredValues};

/// What the last [`PerformanceChart::update`] rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartStatus {
    Rendered,
    /// Primary rendered; the benchmark line is hidden.
    RenderedWithoutBenchmark(Option<BenchmarkNotice>),
    /// Both lines are cleared; the host shows an insufficient-data state.
    InsufficientData { available: usize },
}

/// Owns one chart instance for its whole lifetime.
///
/// The chart and its two series are created once in [`Self::mount`]. Later
/// data, colour and label changes mutate them in place. Dropping the
/// controller clears the published hover value, unsubscribes the crosshair
/// handler and then removes the chart.
pub struct PerformanceChart<C: ChartApi> {
    chart: C,
    primary: SeriesId,
    benchmark: SeriesId,
    primary_options: SeriesOptions,
    benchmark_options: SeriesOptions,
    labels: ChartLabels,
    sink: Arc<dyn HoverSink>,
    subscription: Option<SubscriptionId>,
    fitted: bool,
    disposed: bool,
}

impl<C: ChartApi> PerformanceChart<C> {
    pub fn mount<F>(
        factory: &mut F,
        options: &ChartOptions,
        labels: ChartLabels,
        sink: Arc<dyn HoverSink>,
    ) -> Self
    where
        F: ChartFactory<Chart = C>,
    {
        let mut chart = factory.create_chart(options);

        let primary_options = SeriesOptions::line(labels.primary_title.clone(), SeriesColor::Gain);
        let benchmark_options = SeriesOptions {
            line_width: 1,
            line_style: LineStyle::Dashed,
            visible: false,
            ..SeriesOptions::line(labels.benchmark_title.clone(), SeriesColor::Benchmark)
        };
        let primary = chart.add_line_series(&primary_options);
        let benchmark = chart.add_line_series(&benchmark_options);

        let handler_sink = Arc::clone(&sink);
        let subscription = chart.subscribe_crosshair_move(Box::new(move |event: &CrosshairEvent| {
            handler_sink.publish(hovered_values(event, primary, benchmark));
        }));
        debug!("Mounted performance chart (series {:?}, {:?})", primary, benchmark);

        Self {
            chart,
            primary,
            benchmark,
            primary_options,
            benchmark_options,
            labels,
            sink,
            subscription: Some(subscription),
            fitted: false,
            disposed: false,
        }
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn primary_series(&self) -> SeriesId {
        self.primary
    }

    pub fn benchmark_series(&self) -> SeriesId {
        self.benchmark
    }

    /// Pushes a freshly derived view into the existing series.
    ///
    /// Data is written before any option change so colours never refer to
    /// stale points.
    pub fn update(&mut self, view: &PerformanceView) -> ChartStatus {
        let primary = match &view.primary {
            ReturnOutcome::Available(series) => series,
            ReturnOutcome::InsufficientData { available } => {
                self.chart.set_series_data(self.primary, &[]);
                self.chart.set_series_data(self.benchmark, &[]);
                self.set_benchmark_visible(false);
                debug!("Performance chart cleared: {} point(s) in window", available);
                return ChartStatus::InsufficientData {
                    available: *available,
                };
            }
        };

        let primary_points = return_points(primary);
        self.chart.set_series_data(self.primary, &primary_points);

        let status = match view.benchmark.as_ref() {
            Some(BenchmarkOutcome::Available { series, .. }) => {
                self.chart
                    .set_series_data(self.benchmark, &return_points(series));
                ChartStatus::Rendered
            }
            Some(BenchmarkOutcome::Unavailable(notice)) => {
                self.chart.set_series_data(self.benchmark, &[]);
                ChartStatus::RenderedWithoutBenchmark(Some(notice.clone()))
            }
            None => {
                self.chart.set_series_data(self.benchmark, &[]);
                ChartStatus::RenderedWithoutBenchmark(None)
            }
        };

        self.set_primary_color(direction_color(primary.direction));
        self.set_benchmark_visible(matches!(status, ChartStatus::Rendered));

        if !self.fitted && !primary_points.is_empty() {
            self.chart.fit_content();
            self.fitted = true;
        }
        status
    }

    /// Re-applies series titles when the caller's labels changed.
    ///
    /// Returns whether anything was applied.
    pub fn apply_labels(&mut self, labels: &ChartLabels) -> bool {
        if *labels == self.labels {
            return false;
        }
        self.labels = labels.clone();
        self.primary_options.title = labels.primary_title.clone();
        self.benchmark_options.title = labels.benchmark_title.clone();
        self.chart
            .apply_series_options(self.primary, &self.primary_options);
        self.chart
            .apply_series_options(self.benchmark, &self.benchmark_options);
        true
    }

    /// Tears the chart down explicitly.
    pub fn dispose(mut self) {
        self.teardown();
    }

    fn set_primary_color(&mut self, color: SeriesColor) {
        if self.primary_options.color != color {
            self.primary_options.color = color;
            self.chart
                .apply_series_options(self.primary, &self.primary_options);
        }
    }

    fn set_benchmark_visible(&mut self, visible: bool) {
        if self.benchmark_options.visible != visible {
            self.benchmark_options.visible = visible;
            self.chart
                .apply_series_options(self.benchmark, &self.benchmark_options);
        }
    }

    fn teardown(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        // Hover state must not outlive the chart it came from.
        self.sink.publish(None);
        match self.subscription.take() {
            Some(subscription) => self.chart.unsubscribe_crosshair_move(subscription),
            None => warn!("Performance chart torn down without a crosshair subscription"),
        }
        self.chart.remove();
        debug!("Removed performance chart");
    }
}

impl<C: ChartApi> Drop for PerformanceChart<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn direction_color(direction: Direction) -> SeriesColor {
    if direction.is_gain() {
        SeriesColor::Gain
    } else {
        SeriesColor::Loss
    }
}

fn hovered_values(
    event: &CrosshairEvent,
    primary: SeriesId,
    benchmark: SeriesId,
) -> Option<HoveredValues> {
    let date = event.time?;
    Some(HoveredValues {
        date,
        primary: event.value_of(primary)?,
        benchmark: event.value_of(benchmark),
    })
}
