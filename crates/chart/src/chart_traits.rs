use crate::chart_model::{
    ChartOptions, ChartPoint, CrosshairEvent, PriceLineId, PriceLineOptions, SeriesId,
    SeriesOptions, SubscriptionId,
};

/// Callback invoked on every crosshair move.
pub type CrosshairHandler = Box<dyn FnMut(&CrosshairEvent) + Send>;

/// Imperative surface of a created chart instance.
///
/// Implementations wrap a concrete charting library. Every method mutates the
/// live chart in place; nothing here recreates the chart.
pub trait ChartApi {
    fn add_line_series(&mut self, options: &SeriesOptions) -> SeriesId;

    /// Replaces the whole data set of `series`.
    fn set_series_data(&mut self, series: SeriesId, data: &[ChartPoint]);

    fn apply_series_options(&mut self, series: SeriesId, options: &SeriesOptions);

    fn create_price_line(&mut self, series: SeriesId, options: &PriceLineOptions) -> PriceLineId;

    fn remove_price_line(&mut self, series: SeriesId, line: PriceLineId);

    fn subscribe_crosshair_move(&mut self, handler: CrosshairHandler) -> SubscriptionId;

    fn unsubscribe_crosshair_move(&mut self, subscription: SubscriptionId);

    /// Scales the time axis to show all data.
    fn fit_content(&mut self);

    /// Destroys the chart. No other method may be called afterwards.
    fn remove(&mut self);
}

/// Creates chart instances attached to a host surface.
pub trait ChartFactory {
    type Chart: ChartApi;

    fn create_chart(&mut self, options: &ChartOptions) -> Self::Chart;
}
