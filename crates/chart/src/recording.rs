//! In-memory chart backend that records every call.
//!
//! Used by tests and headless hosts to observe how controllers drive a chart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::chart_model::{
    ChartOptions, ChartPoint, CrosshairEvent, PriceLineId, PriceLineOptions, SeriesId,
    SeriesOptions, SubscriptionId,
};
use crate::chart_traits::{ChartApi, ChartFactory, CrosshairHandler};

#[derive(Debug, Clone, PartialEq)]
pub enum ChartCall {
    CreateChart { chart: u32 },
    AddSeries { series: SeriesId, title: String },
    SetData { series: SeriesId, len: usize },
    ApplyOptions { series: SeriesId },
    CreatePriceLine { series: SeriesId, line: PriceLineId },
    RemovePriceLine { series: SeriesId, line: PriceLineId },
    Subscribe { subscription: SubscriptionId },
    Unsubscribe { subscription: SubscriptionId },
    FitContent,
    Remove { chart: u32 },
}

#[derive(Default)]
struct Recorder {
    calls: Vec<ChartCall>,
    charts_created: u32,
    next_id: u32,
    data: HashMap<SeriesId, Vec<ChartPoint>>,
    options: HashMap<SeriesId, SeriesOptions>,
    price_lines: HashMap<PriceLineId, (SeriesId, PriceLineOptions)>,
    handlers: Vec<(SubscriptionId, CrosshairHandler)>,
}

impl Recorder {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

fn lock(shared: &Arc<Mutex<Recorder>>) -> MutexGuard<'_, Recorder> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Factory handing out [`RecordingChart`]s that share one call log.
#[derive(Clone, Default)]
pub struct RecordingFactory {
    shared: Arc<Mutex<Recorder>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ChartCall> {
        lock(&self.shared).calls.clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.shared).calls.clear();
    }

    pub fn charts_created(&self) -> u32 {
        lock(&self.shared).charts_created
    }

    pub fn series_data(&self, series: SeriesId) -> Vec<ChartPoint> {
        lock(&self.shared)
            .data
            .get(&series)
            .cloned()
            .unwrap_or_default()
    }

    pub fn series_options(&self, series: SeriesId) -> Option<SeriesOptions> {
        lock(&self.shared).options.get(&series).cloned()
    }

    pub fn price_lines(&self) -> Vec<(PriceLineId, SeriesId, PriceLineOptions)> {
        let recorder = lock(&self.shared);
        let mut lines: Vec<_> = recorder
            .price_lines
            .iter()
            .map(|(id, (series, options))| (*id, *series, options.clone()))
            .collect();
        lines.sort_by_key(|(id, _, _)| *id);
        lines
    }

    pub fn active_subscriptions(&self) -> usize {
        lock(&self.shared).handlers.len()
    }

    /// Delivers a crosshair event to every registered handler.
    pub fn fire_crosshair(&self, event: &CrosshairEvent) {
        // Handlers are taken out so they can run without holding the lock.
        let mut handlers = std::mem::take(&mut lock(&self.shared).handlers);
        for (_, handler) in handlers.iter_mut() {
            handler(event);
        }
        let mut recorder = lock(&self.shared);
        handlers.append(&mut recorder.handlers);
        recorder.handlers = handlers;
    }
}

impl ChartFactory for RecordingFactory {
    type Chart = RecordingChart;

    fn create_chart(&mut self, _options: &ChartOptions) -> RecordingChart {
        let mut recorder = lock(&self.shared);
        recorder.charts_created += 1;
        let id = recorder.next_id();
        recorder.calls.push(ChartCall::CreateChart { chart: id });
        RecordingChart {
            id,
            shared: Arc::clone(&self.shared),
        }
    }
}

pub struct RecordingChart {
    id: u32,
    shared: Arc<Mutex<Recorder>>,
}

impl RecordingChart {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl ChartApi for RecordingChart {
    fn add_line_series(&mut self, options: &SeriesOptions) -> SeriesId {
        let mut recorder = lock(&self.shared);
        let series = SeriesId(recorder.next_id());
        recorder.options.insert(series, options.clone());
        recorder.calls.push(ChartCall::AddSeries {
            series,
            title: options.title.clone(),
        });
        series
    }

    fn set_series_data(&mut self, series: SeriesId, data: &[ChartPoint]) {
        let mut recorder = lock(&self.shared);
        recorder.data.insert(series, data.to_vec());
        recorder.calls.push(ChartCall::SetData {
            series,
            len: data.len(),
        });
    }

    fn apply_series_options(&mut self, series: SeriesId, options: &SeriesOptions) {
        let mut recorder = lock(&self.shared);
        recorder.options.insert(series, options.clone());
        recorder.calls.push(ChartCall::ApplyOptions { series });
    }

    fn create_price_line(&mut self, series: SeriesId, options: &PriceLineOptions) -> PriceLineId {
        let mut recorder = lock(&self.shared);
        let line = PriceLineId(recorder.next_id());
        recorder.price_lines.insert(line, (series, options.clone()));
        recorder
            .calls
            .push(ChartCall::CreatePriceLine { series, line });
        line
    }

    fn remove_price_line(&mut self, series: SeriesId, line: PriceLineId) {
        let mut recorder = lock(&self.shared);
        recorder.price_lines.remove(&line);
        recorder
            .calls
            .push(ChartCall::RemovePriceLine { series, line });
    }

    fn subscribe_crosshair_move(&mut self, handler: CrosshairHandler) -> SubscriptionId {
        let mut recorder = lock(&self.shared);
        let subscription = SubscriptionId(recorder.next_id());
        recorder.handlers.push((subscription, handler));
        recorder.calls.push(ChartCall::Subscribe { subscription });
        subscription
    }

    fn unsubscribe_crosshair_move(&mut self, subscription: SubscriptionId) {
        let mut recorder = lock(&self.shared);
        recorder.handlers.retain(|(id, _)| *id != subscription);
        recorder.calls.push(ChartCall::Unsubscribe { subscription });
    }

    fn fit_content(&mut self) {
        lock(&self.shared).calls.push(ChartCall::FitContent);
    }

    fn remove(&mut self) {
        let id = self.id;
        lock(&self.shared).calls.push(ChartCall::Remove { chart: id });
    }
}
