//! Raw value chart with a recent-high reference line.

use log::debug;

use pulsefolio_core::indicators::IndicatorSummary;
use pulsefolio_core::series::Valued;

use crate::chart_model::{
    ChartLabels, ChartOptions, LineStyle, PriceLineId, PriceLineOptions, SeriesColor, SeriesId,
    SeriesOptions,
};
use crate::chart_traits::{ChartApi, ChartFactory};
use crate::convert::{to_f64, value_points};

pub struct IndicatorChart<C: ChartApi> {
    chart: C,
    series: SeriesId,
    options: SeriesOptions,
    labels: ChartLabels,
    high_line: Option<PriceLineId>,
    high: Option<f64>,
    fitted: bool,
    disposed: bool,
}

impl<C: ChartApi> IndicatorChart<C> {
    pub fn mount<F>(factory: &mut F, options: &ChartOptions, labels: ChartLabels) -> Self
    where
        F: ChartFactory<Chart = C>,
    {
        let mut chart = factory.create_chart(options);
        let series_options = SeriesOptions::line(labels.primary_title.clone(), SeriesColor::Neutral);
        let series = chart.add_line_series(&series_options);

        Self {
            chart,
            series,
            options: series_options,
            labels,
            high_line: None,
            high: None,
            fitted: false,
            disposed: false,
        }
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn series(&self) -> SeriesId {
        self.series
    }

    /// Replaces the plotted values, then redraws the recent-high line.
    pub fn update<T: Valued>(&mut self, values: &[T], summary: &IndicatorSummary) {
        let points = value_points(values);
        self.chart.set_series_data(self.series, &points);

        let color = if summary.alert_active {
            SeriesColor::Highlight
        } else {
            SeriesColor::Neutral
        };
        if self.options.color != color {
            self.options.color = color;
            self.chart.apply_series_options(self.series, &self.options);
        }

        self.high = summary.recent_high.and_then(|high| to_f64(high.high));
        self.redraw_high_line();

        if !self.fitted && !points.is_empty() {
            self.chart.fit_content();
            self.fitted = true;
        }
    }

    pub fn apply_labels(&mut self, labels: &ChartLabels) -> bool {
        if *labels == self.labels {
            return false;
        }
        self.labels = labels.clone();
        self.options.title = labels.primary_title.clone();
        self.chart.apply_series_options(self.series, &self.options);
        self.redraw_high_line();
        true
    }

    pub fn dispose(mut self) {
        self.teardown();
    }

    fn redraw_high_line(&mut self) {
        if let Some(line) = self.high_line.take() {
            self.chart.remove_price_line(self.series, line);
        }
        if let Some(price) = self.high {
            let options = PriceLineOptions {
                price,
                title: self.labels.recent_high_title.clone(),
                color: SeriesColor::Highlight,
                line_style: LineStyle::Dashed,
            };
            self.high_line = Some(self.chart.create_price_line(self.series, &options));
        }
    }

    fn teardown(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(line) = self.high_line.take() {
            self.chart.remove_price_line(self.series, line);
        }
        self.chart.remove();
        debug!("Removed indicator chart");
    }
}

impl<C: ChartApi> Drop for IndicatorChart<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
